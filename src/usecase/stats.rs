use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RunStats {
    pub graphs_seen: usize,
    pub runs: usize,
    pub components_found: usize,
    pub cyclic_components: usize,
    pub disagreements: usize,
}
