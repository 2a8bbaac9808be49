use crate::domain::graph::{Graph, SccResult};

/// Port for strongly-connected-component detection.
///
/// Implementations own all traversal state for the duration of one call and
/// keep nothing between calls.
pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult;
}
