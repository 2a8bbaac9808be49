use crate::domain::model::Algorithm;
use crate::usecase::stats::RunStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        name: String,
        nodes: usize,
        edges: usize,
    },

    SccComputed {
        algorithm: Algorithm,
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
        elapsed_ms: f64,
    },

    AlgorithmToggled {
        algorithm: Algorithm,
    },

    GraphSwitched {
        index: usize,
        name: String,
    },

    PartitionsCompared {
        name: String,
        agree: bool,
    },

    Finished {
        stats: RunStats,
    },
}
