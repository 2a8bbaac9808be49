use crate::domain::error::GraphError;
use crate::domain::graph::SccResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which SCC algorithm to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Tarjan,
    #[default]
    Kosaraju,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Tarjan, Algorithm::Kosaraju];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Tarjan => "Tarjan's",
            Algorithm::Kosaraju => "Kosaraju's",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Tarjan => Algorithm::Kosaraju,
            Algorithm::Kosaraju => Algorithm::Tarjan,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Tarjan => f.write_str("tarjan"),
            Algorithm::Kosaraju => f.write_str("kosaraju"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tarjan" => Ok(Algorithm::Tarjan),
            "kosaraju" => Ok(Algorithm::Kosaraju),
            _ => Err(GraphError::unknown_algorithm(s)),
        }
    }
}

/// One timed algorithm invocation.
#[derive(Debug, Clone)]
pub struct SccRun {
    pub algorithm: Algorithm,
    pub result: SccResult,
    /// Wall-clock time of the algorithm call alone, in milliseconds.
    pub elapsed_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Tarjan".parse::<Algorithm>().unwrap(), Algorithm::Tarjan);
        assert_eq!(" KOSARAJU ".parse::<Algorithm>().unwrap(), Algorithm::Kosaraju);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "bfs".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, GraphError::unknown_algorithm("bfs"));
    }

    #[test]
    fn toggled_flips_and_display_round_trips() {
        for alg in Algorithm::ALL {
            assert_ne!(alg.toggled(), alg);
            assert_eq!(alg.toggled().toggled(), alg);
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn default_is_kosaraju() {
        assert_eq!(Algorithm::default(), Algorithm::Kosaraju);
        assert_eq!(Algorithm::default().label(), "Kosaraju's");
    }
}
