//! Wire protocol for the inference service — typed request builders that
//! produce the exact ordered form-field list, and typed JSON responses.
//!
//! Nested values (dataset, variable names, graph, treatment and condition
//! lists) travel as JSON-encoded strings inside form fields; booleans as
//! "true"/"false"; numbers in plain decimal form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use causeway_core::errors::ClientError;
use causeway_core::{
    CausalGraph, ConditionVar, EffectEstimate, PanelResult, PredictionModel, TreatmentVar,
};

/// One-time lookup of per-variable maximum discrete state values.
#[derive(Debug, Clone)]
pub struct BoundsRequest<'a> {
    pub data: &'a [Vec<f64>],
    pub var_names: &'a [String],
}

impl BoundsRequest<'_> {
    pub fn to_form(&self) -> PanelResult<Vec<(String, String)>> {
        Ok(vec![
            field("data_array", json(self.data)?),
            field("var_names", json(self.var_names)?),
        ])
    }
}

/// Response of the bounds lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundsResponse {
    pub max_state_val: BTreeMap<String, f64>,
}

/// Everything an ATE estimation sends; CATE adds conditions on top.
#[derive(Debug, Clone)]
pub struct EstimationRequest<'a> {
    pub data_type: &'a str,
    pub data: &'a [Vec<f64>],
    pub var_names: &'a [String],
    pub causal_graph: &'a CausalGraph,
    pub target_var: &'a str,
    pub prediction_model: PredictionModel,
    pub treatments: &'a [TreatmentVar],
    pub is_discrete: bool,
    pub random_seed: u64,
    pub is_data_generated: bool,
    pub num_vars: usize,
    pub num_samples: usize,
    pub max_lag: usize,
}

impl EstimationRequest<'_> {
    /// Form fields for the `/ate` endpoint, in wire order.
    pub fn to_ate_form(&self) -> PanelResult<Vec<(String, String)>> {
        let mut fields = self.head()?;
        fields.extend(self.tail());
        Ok(fields)
    }

    /// Form fields for the `/cate` endpoint: the ATE set plus the condition
    /// list and its prediction model (the same model, per the service
    /// contract).
    pub fn to_cate_form(&self, conditions: &[ConditionVar]) -> PanelResult<Vec<(String, String)>> {
        let mut fields = self.head()?;
        fields.push(field("conditions", json(conditions)?));
        fields.push(field(
            "condition_prediction_model",
            self.prediction_model.wire_name().to_string(),
        ));
        fields.extend(self.tail());
        Ok(fields)
    }

    fn head(&self) -> PanelResult<Vec<(String, String)>> {
        Ok(vec![
            field("data_type", self.data_type.to_string()),
            field("data_array", json(self.data)?),
            field("var_names", json(self.var_names)?),
            field("causal_graph", json(self.causal_graph)?),
            field("target_var", self.target_var.to_string()),
            field(
                "prediction_model",
                self.prediction_model.wire_name().to_string(),
            ),
            field("treatments", json(self.treatments)?),
        ])
    }

    fn tail(&self) -> Vec<(String, String)> {
        vec![
            field("isDiscrete", self.is_discrete.to_string()),
            field("random_seed", self.random_seed.to_string()),
            field("isDataGenerated", self.is_data_generated.to_string()),
            field("num_vars", self.num_vars.to_string()),
            field("num_samples", self.num_samples.to_string()),
            field("max_lag", self.max_lag.to_string()),
        ]
    }
}

/// Response of `/ate`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AteResponse {
    pub est_ate: f64,
    pub true_ate: f64,
}

impl From<AteResponse> for EffectEstimate {
    fn from(r: AteResponse) -> Self {
        Self {
            estimated: r.est_ate,
            ground_truth: r.true_ate,
        }
    }
}

/// Response of `/cate`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CateResponse {
    pub est_cate: f64,
    pub true_cate: f64,
}

impl From<CateResponse> for EffectEstimate {
    fn from(r: CateResponse) -> Self {
        Self {
            estimated: r.est_cate,
            ground_truth: r.true_cate,
        }
    }
}

fn field(name: &str, value: String) -> (String, String) {
    (name.to_string(), value)
}

fn json<T: Serialize + ?Sized>(value: &T) -> PanelResult<String> {
    serde_json::to_string(value).map_err(|e| {
        ClientError::EncodeError {
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request<'a>(
        graph: &'a CausalGraph,
        data: &'a [Vec<f64>],
        var_names: &'a [String],
        treatments: &'a [TreatmentVar],
    ) -> EstimationRequest<'a> {
        EstimationRequest {
            data_type: "Tabular",
            data,
            var_names,
            causal_graph: graph,
            target_var: "Y",
            prediction_model: PredictionModel::LinearRegression,
            treatments,
            is_discrete: true,
            random_seed: 42,
            is_data_generated: true,
            num_vars: 2,
            num_samples: 2,
            max_lag: 0,
        }
    }

    fn lookup<'a>(fields: &'a [(String, String)], name: &str) -> &'a str {
        &fields
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("missing field {name}"))
            .1
    }

    #[test]
    fn ate_form_carries_the_exact_field_set() {
        let mut graph = CausalGraph::new();
        graph.add_arc("X", "Y");
        let data = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let var_names = vec!["X".to_string(), "Y".to_string()];
        let treatments = vec![TreatmentVar::new("X", 5.0, 0.0)];

        let fields = sample_request(&graph, &data, &var_names, &treatments)
            .to_ate_form()
            .unwrap();

        let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            [
                "data_type",
                "data_array",
                "var_names",
                "causal_graph",
                "target_var",
                "prediction_model",
                "treatments",
                "isDiscrete",
                "random_seed",
                "isDataGenerated",
                "num_vars",
                "num_samples",
                "max_lag",
            ]
        );
        assert_eq!(lookup(&fields, "target_var"), "Y");
        assert_eq!(lookup(&fields, "prediction_model"), "Linear Regression");
        assert_eq!(lookup(&fields, "treatments"), r#"[["X",5.0,0.0]]"#);
        assert_eq!(lookup(&fields, "causal_graph"), r#"{"X":["Y"],"Y":[]}"#);
        assert_eq!(lookup(&fields, "isDiscrete"), "true");
        assert_eq!(lookup(&fields, "random_seed"), "42");
    }

    #[test]
    fn cate_form_adds_conditions_and_their_model() {
        let graph = CausalGraph::new();
        let data: Vec<Vec<f64>> = Vec::new();
        let var_names: Vec<String> = Vec::new();
        let treatments = vec![TreatmentVar::new("X", 1.0, 0.0)];
        let conditions = vec![ConditionVar::new("Z", 2.0)];

        let fields = sample_request(&graph, &data, &var_names, &treatments)
            .to_cate_form(&conditions)
            .unwrap();

        assert_eq!(lookup(&fields, "conditions"), r#"[["Z",2.0]]"#);
        assert_eq!(
            lookup(&fields, "condition_prediction_model"),
            "Linear Regression"
        );
        // Conditions slot in between the shared head and tail.
        let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names[6], "treatments");
        assert_eq!(names[7], "conditions");
        assert_eq!(names[8], "condition_prediction_model");
        assert_eq!(names[9], "isDiscrete");
    }

    #[test]
    fn responses_map_into_effect_estimates() {
        let ate: AteResponse = serde_json::from_str(r#"{"est_ate": 1.23, "true_ate": 1.5}"#).unwrap();
        let estimate: EffectEstimate = ate.into();
        assert_eq!(estimate.estimated, 1.23);
        assert_eq!(estimate.ground_truth, 1.5);
    }
}
