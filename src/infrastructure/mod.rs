// Infrastructure layer: detectors, file I/O, serde, schema validation, eventing
pub mod event_ndjson;
pub mod scc_kosaraju;
pub mod scc_tarjan;
pub mod schema_validator;
pub mod serde_json_adapter;
