use crate::domain::error::GraphError;
use crate::domain::graph::Graph;
use crate::domain::model::{Algorithm, SccRun};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// On-disk graph description.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GraphFileDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub node_count: usize,

    #[serde(default)]
    pub adjacency: Vec<Vec<usize>>,
}

impl GraphFileDto {
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        if self.adjacency.len() != self.node_count {
            return Err(GraphError::NodeCountMismatch {
                declared: self.node_count,
                actual: self.adjacency.len(),
            });
        }
        Graph::from_adjacency(self.adjacency)
    }

    pub fn from_graph(name: Option<String>, graph: &Graph) -> Self {
        Self {
            name,
            node_count: graph.node_count(),
            adjacency: graph.adjacency().to_vec(),
        }
    }
}

/// Serialized outcome of one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
    pub algorithm: Algorithm,
    pub elapsed_ms: f64,
    pub components: Vec<Vec<usize>>,
    pub group_of: Vec<usize>,
    pub cyclic_component: Vec<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowlink: Option<Vec<usize>>,
}

impl ReportDto {
    pub fn from_run(graph: Option<String>, run: &SccRun) -> Self {
        let diag = run.result.diagnostics.as_ref();
        Self {
            graph,
            algorithm: run.algorithm,
            elapsed_ms: run.elapsed_ms,
            components: run.result.components.clone(),
            group_of: run.result.component_of.clone(),
            cyclic_component: run.result.cyclic_component.clone(),
            discovery: diag.map(|d| d.discovery.clone()),
            lowlink: diag.map(|d| d.lowlink.clone()),
        }
    }
}

pub async fn read_graph_value(path: &str) -> Result<serde_json::Value> {
    let raw = fs::read_to_string(path).await?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(value)
}

pub async fn read_graph_file(path: &str) -> Result<GraphFileDto> {
    let value = read_graph_value(path).await?;
    let dto: GraphFileDto = serde_json::from_value(value)?;
    Ok(dto)
}

pub async fn write_report_file(path: &str, report: &ReportDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(report)?;
    fs::write(path, pretty)
        .await
        .with_context(|| format!("writing report: {path}"))?;
    Ok(())
}
