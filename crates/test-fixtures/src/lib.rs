//! Fixture builders and a recording stub backend, shared by integration
//! tests across crates.

use std::cell::RefCell;
use std::collections::BTreeMap;

use causeway_client::transport::protocol::{BoundsRequest, EstimationRequest};
use causeway_client::InferenceBackend;
use causeway_core::errors::ClientError;
use causeway_core::{
    CausalGraph, ConditionVar, EdgeKey, EffectEstimate, PanelProps, PanelResult, StateBounds,
};

/// Props for a three-variable discrete dataset where the X - Z edge is still
/// undirected (encoded in both directions, as the host delivers it).
pub fn sample_props() -> PanelProps {
    let mut graph = CausalGraph::new();
    graph.add_arc("X", "Y");
    graph.add_arc("X", "Z");
    graph.add_arc("Z", "X");

    PanelProps {
        data_type: "Tabular".to_string(),
        data: vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ],
        var_names: vec!["X".to_string(), "Y".to_string(), "Z".to_string()],
        causal_graph: graph,
        is_discrete: true,
        random_seed: 42,
        is_data_generated: true,
        num_vars: 3,
        num_samples: 3,
        max_lag: 0,
        undirected_edges: vec![EdgeKey::new("X", "Z")],
    }
}

/// Same dataset with every edge already directed.
pub fn resolved_props() -> PanelProps {
    let mut props = sample_props();
    props.causal_graph.remove_arc("Z", "X");
    props.undirected_edges.clear();
    props
}

/// Bounds matching `sample_props`: every variable maxes out at 5.
pub fn sample_bounds() -> StateBounds {
    ["X", "Y", "Z"]
        .into_iter()
        .map(|v| (v.to_string(), 5.0))
        .collect()
}

/// A call the stub backend received, with the serialized form fields.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    Bounds(Vec<(String, String)>),
    Ate(Vec<(String, String)>),
    Cate(Vec<(String, String)>),
}

/// Stub `InferenceBackend` serving canned responses and recording every
/// request's form fields. A `None` response simulates a transport failure.
#[derive(Debug, Default)]
pub struct StubBackend {
    bounds: Option<StateBounds>,
    ate: Option<EffectEstimate>,
    cate: Option<EffectEstimate>,
    pub calls: RefCell<Vec<RecordedCall>>,
}

impl StubBackend {
    /// A backend that fails every call.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: StateBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_ate(mut self, estimated: f64, ground_truth: f64) -> Self {
        self.ate = Some(EffectEstimate {
            estimated,
            ground_truth,
        });
        self
    }

    pub fn with_cate(mut self, estimated: f64, ground_truth: f64) -> Self {
        self.cate = Some(EffectEstimate {
            estimated,
            ground_truth,
        });
        self
    }

    /// Form fields of the last recorded call, as a lookup map.
    pub fn last_fields(&self) -> BTreeMap<String, String> {
        let calls = self.calls.borrow();
        let fields = match calls.last().expect("no recorded calls") {
            RecordedCall::Bounds(f) | RecordedCall::Ate(f) | RecordedCall::Cate(f) => f,
        };
        fields.iter().cloned().collect()
    }

    fn fail() -> causeway_core::PanelError {
        ClientError::NetworkError {
            reason: "stub backend offline".to_string(),
        }
        .into()
    }
}

impl InferenceBackend for StubBackend {
    fn max_state_bounds(&self, request: &BoundsRequest<'_>) -> PanelResult<StateBounds> {
        self.calls
            .borrow_mut()
            .push(RecordedCall::Bounds(request.to_form()?));
        self.bounds.clone().ok_or_else(Self::fail)
    }

    fn estimate_ate(&self, request: &EstimationRequest<'_>) -> PanelResult<EffectEstimate> {
        self.calls
            .borrow_mut()
            .push(RecordedCall::Ate(request.to_ate_form()?));
        self.ate.ok_or_else(Self::fail)
    }

    fn estimate_cate(
        &self,
        request: &EstimationRequest<'_>,
        conditions: &[ConditionVar],
    ) -> PanelResult<EffectEstimate> {
        self.calls
            .borrow_mut()
            .push(RecordedCall::Cate(request.to_cate_form(conditions)?));
        self.cate.ok_or_else(Self::fail)
    }
}
