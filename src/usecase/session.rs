use crate::domain::error::GraphResult;
use crate::domain::model::{Algorithm, SccRun};
use crate::usecase::catalog::{DemoCatalog, DemoGraph};
use crate::usecase::runner::SccRunner;

/// Interactive state of the explorer: which demo graph is shown and which
/// algorithm is selected.
///
/// Every change recomputes the run from scratch and replaces the previous one.
pub struct ExplorerSession<'a> {
    runner: SccRunner<'a>,
    catalog: DemoCatalog,
    current: usize,
    algorithm: Algorithm,
    last: SccRun,
}

impl<'a> ExplorerSession<'a> {
    pub fn new(runner: SccRunner<'a>, catalog: DemoCatalog, algorithm: Algorithm) -> GraphResult<Self> {
        let last = runner.run(&catalog.get(0)?.graph, algorithm);
        Ok(Self {
            runner,
            catalog,
            current: 0,
            algorithm,
            last,
        })
    }

    pub fn toggle_algorithm(&mut self) -> &SccRun {
        self.algorithm = self.algorithm.toggled();
        self.recompute()
    }

    /// Advances to the next demo graph, wrapping at the end.
    pub fn next_graph(&mut self) -> &SccRun {
        self.current = (self.current + 1) % self.catalog.len();
        self.recompute()
    }

    pub fn select_graph(&mut self, index: usize) -> GraphResult<&SccRun> {
        self.catalog.get(index)?;
        self.current = index;
        Ok(self.recompute())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_graph(&self) -> &DemoGraph {
        // `current` is only ever set to an index the catalog accepted.
        &self.catalog.graphs()[self.current]
    }

    pub fn graph_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn last_run(&self) -> &SccRun {
        &self.last
    }

    /// `(discovery, lowlink)` per node, only while Tarjan is selected.
    pub fn overlay(&self) -> Option<Vec<(usize, usize)>> {
        let diag = self.last.result.diagnostics.as_ref()?;
        Some(
            diag.discovery
                .iter()
                .copied()
                .zip(diag.lowlink.iter().copied())
                .collect(),
        )
    }

    fn recompute(&mut self) -> &SccRun {
        self.last = self.runner.run(&self.current_graph().graph, self.algorithm);
        &self.last
    }
}
