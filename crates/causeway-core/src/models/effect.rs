use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which causal effect an estimation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Ate,
    Cate,
}

impl EffectKind {
    /// Label used in result panels and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ate => "ATE",
            Self::Cate => "CATE",
        }
    }

    /// The other estimation kind.
    pub fn other(self) -> Self {
        match self {
            Self::Ate => Self::Cate,
            Self::Cate => Self::Ate,
        }
    }
}

/// Estimated effect next to its ground-truth value.
///
/// The ground truth is meaningful when the dataset was synthetically
/// generated; the service returns it either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EffectEstimate {
    pub estimated: f64,
    pub ground_truth: f64,
}
