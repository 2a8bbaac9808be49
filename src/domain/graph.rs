use crate::domain::error::{GraphError, GraphResult};
use std::collections::BTreeSet;

/// Directed graph over nodes `0..n`, stored as ordered successor lists.
///
/// Successor order is insertion order and drives DFS visitation order, so it
/// is never sorted or deduplicated. Construction validates every edge; once
/// built the graph is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_adjacency(edges: Vec<Vec<usize>>) -> GraphResult<Self> {
        let n = edges.len();
        for (u, outs) in edges.iter().enumerate() {
            if let Some(&v) = outs.iter().find(|&&v| v >= n) {
                return Err(GraphError::successor_out_of_range(u, v, n));
            }
        }
        Ok(Self { edges })
    }

    pub fn from_edges(node_count: usize, pairs: &[(usize, usize)]) -> GraphResult<Self> {
        let mut edges = vec![Vec::new(); node_count];
        for &(u, v) in pairs {
            if u >= node_count {
                return Err(GraphError::node_out_of_range(u, node_count));
            }
            if v >= node_count {
                return Err(GraphError::successor_out_of_range(u, v, node_count));
            }
            edges[u].push(v);
        }
        Ok(Self { edges })
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    /// Successors of `node` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.node_count()`.
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.edges[node]
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.edges
    }

    /// All edges as `(from, to)`, sources ascending, successors in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v)))
    }

    pub fn has_self_loop(&self, node: usize) -> bool {
        self.edges[node].contains(&node)
    }

    /// Builds the reverse graph. Reverse lists keep the scan order of
    /// [`Graph::edges`]; parallel edges stay parallel.
    pub fn transpose(&self) -> Graph {
        let mut rev: Vec<Vec<usize>> = vec![Vec::new(); self.node_count()];
        for (u, v) in self.edges() {
            rev[v].push(u);
        }
        Graph { edges: rev }
    }
}

/// Per-node values left behind by a Tarjan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarjanDiagnostics {
    pub discovery: Vec<usize>,
    pub lowlink: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    /// Node index -> position of its component in `components`.
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
    /// Only present for Tarjan results.
    pub diagnostics: Option<TarjanDiagnostics>,
}

impl SccResult {
    /// Normalizes a finished component list into a result.
    ///
    /// `components` must partition `0..graph.node_count()`.
    pub fn from_components(
        graph: &Graph,
        components: Vec<Vec<usize>>,
        diagnostics: Option<TarjanDiagnostics>,
    ) -> Self {
        let mut component_of = vec![usize::MAX; graph.node_count()];
        for (cid, comp) in components.iter().enumerate() {
            for &node in comp {
                debug_assert_eq!(component_of[node], usize::MAX, "node {node} in two components");
                component_of[node] = cid;
            }
        }
        debug_assert!(component_of.iter().all(|&c| c != usize::MAX));

        let cyclic_component = components
            .iter()
            .map(|comp| comp.len() > 1 || graph.has_self_loop(comp[0]))
            .collect();

        Self {
            component_of,
            components,
            cyclic_component,
            diagnostics,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn group_of(&self, node: usize) -> usize {
        self.component_of[node]
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    /// The partition as sets, ignoring component and member order.
    pub fn component_sets(&self) -> BTreeSet<BTreeSet<usize>> {
        self.components
            .iter()
            .map(|comp| comp.iter().copied().collect())
            .collect()
    }
}
