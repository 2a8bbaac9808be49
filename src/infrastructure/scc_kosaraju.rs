use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();

    // Pass 1: finish order over the original edges. The last element finished last.
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, graph.adjacency(), &mut seen, &mut order);
    }

    // Built per call; the caller may hand us a different graph next time.
    let rev = graph.transpose();

    // Pass 2: seeds popped latest-finish first, each DFS over the reverse edges.
    let mut visited = vec![false; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for &seed in order.iter().rev() {
        if visited[seed] {
            continue;
        }
        let mut comp = Vec::new();
        iterative_collect(seed, rev.adjacency(), &mut visited, &mut comp);
        components.push(comp);
    }

    SccResult::from_components(graph, components, None)
}

/// Post-order DFS from `start`. Frames carry the index of the next successor
/// to look at, so finish order matches the recursive formulation.
fn iterative_finish_order(
    start: usize,
    edges: &[Vec<usize>],
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = Vec::new();
    seen[start] = true;
    stack.push((start, 0));

    while let Some((v, next_i)) = stack.pop() {
        if next_i < edges[v].len() {
            let to = edges[v][next_i];
            stack.push((v, next_i + 1));
            if !seen[to] {
                seen[to] = true;
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}

/// Pre-order DFS from `start`, appending every newly reached node to `comp`.
fn iterative_collect(start: usize, edges: &[Vec<usize>], visited: &mut [bool], comp: &mut Vec<usize>) {
    let mut stack: Vec<(usize, usize)> = Vec::new();
    visited[start] = true;
    comp.push(start);
    stack.push((start, 0));

    while let Some((v, next_i)) = stack.pop() {
        if next_i >= edges[v].len() {
            continue;
        }
        let to = edges[v][next_i];
        stack.push((v, next_i + 1));
        if !visited[to] {
            visited[to] = true;
            comp.push(to);
            stack.push((to, 0));
        }
    }
}
