use crate::domain::graph::Graph;
use crate::domain::model::{Algorithm, SccRun};
use crate::domain::traits::SccDetector;
use std::time::Instant;

/// Dispatches to one of two detectors and times the call.
///
/// Holds no per-run state: every call returns a fresh [`SccRun`].
pub struct SccRunner<'a> {
    tarjan: &'a dyn SccDetector,
    kosaraju: &'a dyn SccDetector,
}

impl<'a> SccRunner<'a> {
    pub fn new(tarjan: &'a dyn SccDetector, kosaraju: &'a dyn SccDetector) -> Self {
        Self { tarjan, kosaraju }
    }

    pub fn run(&self, graph: &Graph, algorithm: Algorithm) -> SccRun {
        let detector = match algorithm {
            Algorithm::Tarjan => self.tarjan,
            Algorithm::Kosaraju => self.kosaraju,
        };
        run_with(detector, graph, algorithm)
    }
}

/// Runs `detector` and labels the outcome with `algorithm`.
///
/// Diagnostics are only kept for Tarjan runs.
pub fn run_with(detector: &dyn SccDetector, graph: &Graph, algorithm: Algorithm) -> SccRun {
    let started = Instant::now();
    let mut result = detector.compute_scc(graph);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if algorithm != Algorithm::Tarjan {
        result.diagnostics = None;
    }

    SccRun {
        algorithm,
        result,
        elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::{SccResult, TarjanDiagnostics};
    use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
    use crate::infrastructure::scc_tarjan::TarjanSccDetector;

    struct LeakyDetector;

    impl SccDetector for LeakyDetector {
        fn compute_scc(&self, graph: &Graph) -> SccResult {
            let comps = (0..graph.node_count()).map(|u| vec![u]).collect();
            let diag = TarjanDiagnostics {
                discovery: vec![0; graph.node_count()],
                lowlink: vec![0; graph.node_count()],
            };
            SccResult::from_components(graph, comps, Some(diag))
        }
    }

    #[test]
    fn run_dispatches_by_selector() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let runner = SccRunner::new(&TarjanSccDetector, &KosarajuSccDetector);

        let t = runner.run(&g, Algorithm::Tarjan);
        assert_eq!(t.algorithm, Algorithm::Tarjan);
        assert!(t.result.diagnostics.is_some());
        assert!(t.elapsed_ms >= 0.0);

        let k = runner.run(&g, Algorithm::Kosaraju);
        assert_eq!(k.algorithm, Algorithm::Kosaraju);
        assert!(k.result.diagnostics.is_none());
        assert_eq!(k.result.component_sets(), t.result.component_sets());
    }

    #[test]
    fn kosaraju_runs_never_carry_diagnostics() {
        let g = Graph::from_edges(2, &[(0, 1)]).unwrap();
        let run = run_with(&LeakyDetector, &g, Algorithm::Kosaraju);
        assert!(run.result.diagnostics.is_none());
    }

    #[test]
    fn repeated_runs_are_identical_apart_from_timing() {
        let g = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 1), (2, 4)]).unwrap();
        let runner = SccRunner::new(&TarjanSccDetector, &KosarajuSccDetector);
        for alg in Algorithm::ALL {
            let a = runner.run(&g, alg);
            let b = runner.run(&g, alg);
            assert_eq!(a.result, b.result);
        }
    }
}
