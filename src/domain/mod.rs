//! Domain layer: graph model, SCC results, algorithm selector, ports.

pub mod error;
pub mod graph;
pub mod model;
pub mod traits;
