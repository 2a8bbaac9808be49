use crate::domain::graph::{Graph, SccResult, TarjanDiagnostics};
use crate::domain::traits::SccDetector;

pub struct TarjanSccDetector;

impl SccDetector for TarjanSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        tarjan_scc(graph)
    }
}

const UNVISITED: usize = usize::MAX;

fn tarjan_scc(graph: &Graph) -> SccResult {
    let mut state = TarjanState::new(graph);

    for start in 0..graph.node_count() {
        if state.discovery[start] == UNVISITED {
            state.visit(start);
        }
    }

    let TarjanState {
        discovery,
        lowlink,
        components,
        ..
    } = state;

    SccResult::from_components(
        graph,
        components,
        Some(TarjanDiagnostics { discovery, lowlink }),
    )
}

/// Traversal state for one Tarjan run.
struct TarjanState<'g> {
    graph: &'g Graph,
    time: usize,
    discovery: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl<'g> TarjanState<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            time: 0,
            discovery: vec![UNVISITED; n],
            lowlink: vec![UNVISITED; n],
            on_stack: vec![false; n],
            stack: Vec::with_capacity(n),
            components: Vec::new(),
        }
    }

    /// Depth-first visit from `root`. Each frame is `(node, next successor index)`;
    /// a child's lowlink is folded into its parent when the child frame is popped,
    /// which is exactly where the recursive version returns.
    fn visit(&mut self, root: usize) {
        let graph = self.graph;
        let mut frames: Vec<(usize, usize)> = Vec::new();
        self.enter(root);
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let u = frame.0;
            let succ = graph.successors(u);

            if frame.1 < succ.len() {
                let v = succ[frame.1];
                frame.1 += 1;
                if self.discovery[v] == UNVISITED {
                    self.enter(v);
                    frames.push((v, 0));
                } else if self.on_stack[v] {
                    self.lowlink[u] = self.lowlink[u].min(self.discovery[v]);
                }
                continue;
            }

            frames.pop();
            self.close(u);
            if let Some(&(parent, _)) = frames.last() {
                self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[u]);
            }
        }
    }

    fn enter(&mut self, u: usize) {
        self.discovery[u] = self.time;
        self.lowlink[u] = self.time;
        self.time += 1;
        self.stack.push(u);
        self.on_stack[u] = true;
    }

    /// Emits a component if `u` is a root.
    fn close(&mut self, u: usize) {
        if self.lowlink[u] != self.discovery[u] {
            return;
        }
        let mut comp = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            comp.push(w);
            if w == u {
                break;
            }
        }
        self.components.push(comp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(adj: Vec<Vec<usize>>) -> Graph {
        Graph::from_adjacency(adj).expect("valid graph")
    }

    #[test]
    fn triangle_pops_in_reverse_discovery_order() {
        let r = tarjan_scc(&graph(vec![vec![1], vec![2], vec![0]]));
        assert_eq!(r.components, vec![vec![2, 1, 0]]);
        let d = r.diagnostics.expect("tarjan diagnostics");
        assert_eq!(d.discovery, vec![0, 1, 2]);
        assert_eq!(d.lowlink, vec![0, 0, 0]);
    }

    #[test]
    fn linked_cycles_finalize_downstream_first() {
        // 0 -> 1 -> 2 -> 0, 2 -> 3 -> 4 -> 5 -> 3
        let g = graph(vec![vec![1], vec![2], vec![0, 3], vec![4], vec![5], vec![3]]);
        let r = tarjan_scc(&g);
        assert_eq!(r.components, vec![vec![5, 4, 3], vec![2, 1, 0]]);
        assert_eq!(r.component_of, vec![1, 1, 1, 0, 0, 0]);
        let d = r.diagnostics.expect("tarjan diagnostics");
        assert_eq!(d.discovery, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(d.lowlink, vec![0, 0, 0, 3, 3, 3]);
    }

    #[test]
    fn closed_component_does_not_lower_lowlink() {
        // 0 -> 1, 1 -> 1, 2 -> 1: node 1 is closed before 2 is visited.
        let g = graph(vec![vec![1], vec![1], vec![1]]);
        let r = tarjan_scc(&g);
        assert_eq!(r.components, vec![vec![1], vec![0], vec![2]]);
        assert_eq!(r.cyclic_component, vec![true, false, false]);
        let d = r.diagnostics.expect("tarjan diagnostics");
        assert_eq!(d.discovery, vec![0, 1, 2]);
        assert_eq!(d.lowlink, vec![0, 1, 2]);
    }

    #[test]
    fn deep_chain_does_not_exhaust_the_call_stack() {
        let n = 200_000;
        let mut adj: Vec<Vec<usize>> = (0..n).map(|i| vec![i + 1]).collect();
        adj[n - 1] = vec![0];
        let r = tarjan_scc(&graph(adj));
        assert_eq!(r.component_count(), 1);
        assert_eq!(r.components[0].len(), n);
    }
}
