//! Treatment and condition variable entries plus the prediction-model
//! enumeration. Wire encodings match the remote service: entries serialize
//! as tuples, models by their display name.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A treatment variable with its treatment/control value pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64, f64)", into = "(String, f64, f64)")]
pub struct TreatmentVar {
    pub name: String,
    pub treatment: f64,
    pub control: f64,
}

impl TreatmentVar {
    pub fn new(name: impl Into<String>, treatment: f64, control: f64) -> Self {
        Self {
            name: name.into(),
            treatment,
            control,
        }
    }
}

impl From<(String, f64, f64)> for TreatmentVar {
    fn from((name, treatment, control): (String, f64, f64)) -> Self {
        Self {
            name,
            treatment,
            control,
        }
    }
}

impl From<TreatmentVar> for (String, f64, f64) {
    fn from(var: TreatmentVar) -> Self {
        (var.name, var.treatment, var.control)
    }
}

/// A condition variable fixed to a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct ConditionVar {
    pub name: String,
    pub value: f64,
}

impl ConditionVar {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl From<(String, f64)> for ConditionVar {
    fn from((name, value): (String, f64)) -> Self {
        Self { name, value }
    }
}

impl From<ConditionVar> for (String, f64) {
    fn from(var: ConditionVar) -> Self {
        (var.name, var.value)
    }
}

/// Prediction model offered for effect estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PredictionModel {
    #[serde(rename = "Linear Regression")]
    LinearRegression,
    #[serde(rename = "MLP Regression")]
    MlpRegression,
}

impl PredictionModel {
    pub const ALL: [PredictionModel; 2] = [Self::LinearRegression, Self::MlpRegression];

    /// Name used on the wire and in the host's model selector.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::LinearRegression => "Linear Regression",
            Self::MlpRegression => "MLP Regression",
        }
    }

    /// Parse a host-supplied model name.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.wire_name() == name)
    }
}

impl fmt::Display for PredictionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
