//! View-models the hosting page renders. Purely derived from engine state;
//! no logic of their own beyond formatting.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use causeway_core::constants::DISPLAY_DECIMALS;
use causeway_core::{CausalGraph, ConditionVar, EffectKind, PredictionModel, TreatmentVar};

use crate::inference::InferenceRequester;

/// Everything the hosting page needs to draw the panel.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelView {
    /// No host properties were supplied.
    Empty,
    EdgeResolution(EdgeResolutionView),
    Inference(InferenceView),
}

/// The undirected-edges screen.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct EdgeResolutionView {
    /// Working graph snapshot for the graph renderer.
    #[ts(type = "Record<string, Array<string>>")]
    pub graph: CausalGraph,
    pub pending: Vec<PendingEdgeView>,
}

/// One selectable pending edge.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PendingEdgeView {
    /// Selection encoding round-tripped back through the engine.
    pub value: String,
    /// Human-readable label ("A - B").
    pub label: String,
}

/// The inference-configuration screen.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct InferenceView {
    #[ts(type = "Record<string, Array<string>>")]
    pub graph: CausalGraph,
    pub var_names: Vec<String>,
    pub target_var: Option<String>,
    pub prediction_model: Option<PredictionModel>,
    /// Variable entry opens once target and model are chosen.
    pub can_add_variables: bool,
    /// Per-variable "Max: N" input hints; absent while bounds are unknown.
    #[ts(type = "Record<string, number>")]
    pub max_state_vals: BTreeMap<String, f64>,
    /// Failure message of the bounds fetch, if it failed; retryable.
    pub bounds_error: Option<String>,
    #[ts(type = "Array<[string, number, number]>")]
    pub treatments: Vec<TreatmentVar>,
    #[ts(type = "Array<[string, number]>")]
    pub conditions: Vec<ConditionVar>,
    pub ate: EstimateControlView,
    pub cate: EstimateControlView,
    /// At most one result panel at a time.
    pub results: Option<ResultsView>,
}

/// An estimation button with its requirement checklist.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct EstimateControlView {
    pub enabled: bool,
    pub requirements: Vec<RequirementView>,
}

/// One "Required:" checklist row.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RequirementView {
    pub label: String,
    pub met: bool,
}

/// The results panel.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsView {
    Loading {
        kind: EffectKind,
    },
    Ready {
        kind: EffectKind,
        estimated: String,
        ground_truth: String,
    },
    Failed {
        kind: EffectKind,
        message: String,
    },
}

impl ResultsView {
    /// Derive the single displayed result panel from requester state.
    /// ATE wins ties; only one panel is ever shown.
    pub fn derive(requester: &InferenceRequester) -> Option<Self> {
        for kind in [EffectKind::Ate, EffectKind::Cate] {
            let state = requester.state(kind);
            if state.is_loading() {
                return Some(Self::Loading { kind });
            }
            if let Some(message) = state.error() {
                return Some(Self::Failed {
                    kind,
                    message: message.to_string(),
                });
            }
            if state.is_available() {
                if let Some(estimate) = state.result() {
                    return Some(Self::Ready {
                        kind,
                        estimated: format_effect(estimate.estimated),
                        ground_truth: format_effect(estimate.ground_truth),
                    });
                }
            }
        }
        None
    }
}

/// Round to the display precision and trim trailing zeros: 1.234 -> "1.23",
/// 1.50 -> "1.5", 2.00 -> "2".
pub fn format_effect(value: f64) -> String {
    let scale = 10f64.powi(DISPLAY_DECIMALS as i32);
    let rounded = (value * scale).round() / scale;
    // Normalize negative zero so -0.001 renders as "0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}
