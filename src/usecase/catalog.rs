use crate::domain::error::{GraphError, GraphResult};
use crate::domain::graph::Graph;

#[derive(Debug, Clone)]
pub struct DemoGraph {
    pub name: &'static str,
    pub graph: Graph,
}

/// The fixed set of small demo graphs the explorer cycles through.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    graphs: Vec<DemoGraph>,
}

const BUILTIN: &[(&str, usize, &[(usize, usize)])] = &[
    ("triangle", 3, &[(0, 1), (1, 2), (2, 0)]),
    ("tail into cycle", 4, &[(0, 1), (1, 2), (2, 3), (3, 1)]),
    (
        "two disjoint cycles",
        6,
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
    ),
    ("cycle with exit", 5, &[(0, 1), (1, 2), (2, 3), (3, 1), (2, 4)]),
    (
        "two linked cycles",
        6,
        &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)],
    ),
];

impl DemoCatalog {
    pub fn builtin() -> GraphResult<Self> {
        let graphs = BUILTIN
            .iter()
            .map(|&(name, n, edges)| -> GraphResult<DemoGraph> {
                Ok(DemoGraph {
                    name,
                    graph: Graph::from_edges(n, edges)?,
                })
            })
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(Self { graphs })
    }

    pub fn from_graphs(graphs: Vec<DemoGraph>) -> Self {
        Self { graphs }
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn get(&self, index: usize) -> GraphResult<&DemoGraph> {
        self.graphs.get(index).ok_or(GraphError::UnknownDemoGraph {
            index,
            available: self.graphs.len(),
        })
    }

    pub fn graphs(&self) -> &[DemoGraph] {
        &self.graphs
    }

    pub fn iter(&self) -> impl Iterator<Item = &DemoGraph> {
        self.graphs.iter()
    }
}
