//! Strongly connected components with Tarjan's and Kosaraju's algorithms.
//!
//! Layers:
//! - domain: graph model, SCC results, algorithm selector, detector port
//! - infrastructure: the two detectors, serde/JSON adapters, schema checks, event printing
//! - usecase: timed runner, demo catalog, explorer session, workflows + progress events
//! - interface: CLI wiring and text reports

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
