//! Usecase layer: runner, demo catalog, explorer session, workflows + events.

pub mod analyze;
pub mod catalog;
pub mod event;
pub mod palette;
pub mod runner;
pub mod session;
pub mod stats;
