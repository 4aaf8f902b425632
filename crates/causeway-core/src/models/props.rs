//! The inbound host interface: everything the hosting page supplies when it
//! mounts the panel. Field names follow the host's camelCase vocabulary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::edge::EdgeKey;
use super::graph::CausalGraph;

/// Configuration properties supplied by the hosting page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PanelProps {
    /// Host-defined dataset kind (e.g. tabular vs. time series). Forwarded
    /// to the service untouched.
    pub data_type: String,
    /// Full dataset, row major.
    pub data: Vec<Vec<f64>>,
    /// Variable names, one per dataset column.
    pub var_names: Vec<String>,
    /// Directed causal graph; pending edges may still be encoded in both
    /// directions.
    #[ts(type = "Record<string, Array<string>>")]
    pub causal_graph: CausalGraph,
    /// Whether variables take discrete states.
    pub is_discrete: bool,
    /// Seed the service used (or will use) for data generation.
    pub random_seed: u64,
    /// Whether the dataset was synthetically generated (ground-truth effects
    /// are then meaningful).
    pub is_data_generated: bool,
    pub num_vars: usize,
    pub num_samples: usize,
    /// Maximum time lag for time-series data.
    pub max_lag: usize,
    /// Edges whose causal direction is not yet fixed.
    #[ts(type = "Array<[string, string]>")]
    pub undirected_edges: Vec<EdgeKey>,
}
