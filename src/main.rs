//! Binary entrypoint.
//!
//! The crate is split into Clean Architecture layers:
//! - domain: graph model and SCC result types, pure and synchronous
//! - usecase: timed runner, demo catalog, explorer session, progress events
//! - infrastructure: the Tarjan and Kosaraju detectors, serde + async IO, schema checks
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    scc_explorer::interface::cli::run().await
}
