//! PanelEngine — owns the working graph copy, the edge resolver, variable
//! configuration, request state, and the host navigation callback.
//!
//! Single-threaded and synchronous: every mutation commits inside the call
//! that requested it, with outbound backend calls as the only suspension
//! points.

use causeway_client::transport::protocol::{BoundsRequest, EstimationRequest};
use causeway_client::InferenceBackend;
use causeway_core::errors::ValidationError;
use causeway_core::{
    CausalGraph, Direction, EffectEstimate, EffectKind, PanelError, PanelProps, PanelResult,
    PredictionModel, StateBounds,
};

use crate::configurator::VariableConfigurator;
use crate::inference::InferenceRequester;
use crate::resolver::EdgeResolver;
use crate::view::{
    EdgeResolutionView, EstimateControlView, InferenceView, PanelView, PendingEdgeView,
    RequirementView, ResultsView,
};

/// Which screen the panel is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// Undirected edges remain; the inference screen is gated off.
    ResolvingEdges,
    /// Graph fully resolved (or no undirected edges were supplied).
    Configuring,
}

/// The panel engine. Construct with host props, `init` once against a
/// backend, then drive through the mutation methods and render `view()`.
pub struct PanelEngine {
    props: Option<PanelProps>,
    graph: CausalGraph,
    resolver: EdgeResolver,
    configurator: VariableConfigurator,
    requester: InferenceRequester,
    bounds: StateBounds,
    bounds_error: Option<String>,
    on_navigate: Option<Box<dyn Fn(usize)>>,
}

impl PanelEngine {
    /// Engine with no host properties; renders the empty placeholder.
    pub fn empty() -> Self {
        Self {
            props: None,
            graph: CausalGraph::new(),
            resolver: EdgeResolver::default(),
            configurator: VariableConfigurator::new(),
            requester: InferenceRequester::new(),
            bounds: StateBounds::empty(),
            bounds_error: None,
            on_navigate: None,
        }
    }

    /// Engine over host props. The graph is copied; the caller's value is
    /// never mutated.
    pub fn new(props: PanelProps) -> Self {
        let graph = props.causal_graph.clone();
        let resolver = EdgeResolver::new(props.undirected_edges.clone());
        Self {
            props: Some(props),
            graph,
            resolver,
            configurator: VariableConfigurator::new(),
            requester: InferenceRequester::new(),
            bounds: StateBounds::empty(),
            bounds_error: None,
            on_navigate: None,
        }
    }

    /// Attach the host's page-navigation callback.
    pub fn with_navigation(mut self, on_navigate: impl Fn(usize) + 'static) -> Self {
        self.on_navigate = Some(Box::new(on_navigate));
        self
    }

    /// One-time max-state-bounds fetch. On failure the bounds stay unknown
    /// and the error is surfaced in the view; `retry_state_bounds` re-issues
    /// the fetch.
    pub fn init<B: InferenceBackend>(&mut self, backend: &B) {
        let Some(props) = &self.props else {
            return;
        };
        let request = BoundsRequest {
            data: &props.data,
            var_names: &props.var_names,
        };
        match backend.max_state_bounds(&request) {
            Ok(bounds) => {
                self.bounds = bounds;
                self.bounds_error = None;
            }
            Err(e) => {
                self.bounds = StateBounds::empty();
                self.bounds_error = Some(e.to_string());
                tracing::warn!("panel: max state bounds fetch failed: {e}");
            }
        }
    }

    /// Re-issue the bounds fetch after a failure.
    pub fn retry_state_bounds<B: InferenceBackend>(&mut self, backend: &B) {
        self.init(backend);
    }

    pub fn phase(&self) -> PanelPhase {
        if self.resolver.is_complete() {
            PanelPhase::Configuring
        } else {
            PanelPhase::ResolvingEdges
        }
    }

    /// The working graph copy.
    pub fn graph(&self) -> &CausalGraph {
        &self.graph
    }

    pub fn resolver(&self) -> &EdgeResolver {
        &self.resolver
    }

    pub fn configurator(&self) -> &VariableConfigurator {
        &self.configurator
    }

    pub fn requester(&self) -> &InferenceRequester {
        &self.requester
    }

    pub fn bounds(&self) -> &StateBounds {
        &self.bounds
    }

    /// Resolve one pending edge from its host selection encoding.
    pub fn resolve_edge(&mut self, raw: &str, direction: Direction) -> PanelResult<()> {
        let edge = self.resolver.select(raw)?;
        self.resolver.resolve(&mut self.graph, &edge, direction)
    }

    pub fn set_target_var(&mut self, name: &str) -> PanelResult<()> {
        let props = self.props.as_ref().ok_or_else(no_props)?;
        self.configurator.set_target_var(&props.var_names, name)?;
        Ok(())
    }

    pub fn set_prediction_model(&mut self, model: PredictionModel) {
        self.configurator.set_prediction_model(model);
    }

    pub fn add_treatment(
        &mut self,
        name: &str,
        treatment: Option<f64>,
        control: Option<f64>,
    ) -> PanelResult<()> {
        self.configurator
            .add_treatment(&self.bounds, name, treatment, control)?;
        Ok(())
    }

    pub fn add_condition(&mut self, name: &str, value: Option<f64>) -> PanelResult<()> {
        self.configurator.add_condition(&self.bounds, name, value)?;
        Ok(())
    }

    pub fn remove_treatment(&mut self, index: usize) {
        self.configurator.remove_treatment(index);
    }

    pub fn remove_condition(&mut self, index: usize) {
        self.configurator.remove_condition(index);
    }

    /// ATE needs at least one treatment variable.
    pub fn ate_enabled(&self) -> bool {
        self.configurator.has_treatments()
    }

    /// CATE needs at least one treatment and one condition variable.
    pub fn cate_enabled(&self) -> bool {
        self.configurator.has_treatments() && self.configurator.has_conditions()
    }

    /// Run an ATE estimation. Precondition violations are errors; transport
    /// failures are absorbed into requester state (loading cleared, error
    /// surfaced) and return `Ok`.
    pub fn estimate_ate<B: InferenceBackend>(&mut self, backend: &B) -> PanelResult<()> {
        if !self.ate_enabled() {
            return Err(ValidationError::RequirementsNotMet {
                effect: "ATE",
                reason: "at least one treatment variable",
            }
            .into());
        }
        self.check_selection()?;
        self.requester.begin(EffectKind::Ate);
        let outcome = self.dispatch(backend, EffectKind::Ate);
        self.requester.complete(EffectKind::Ate, outcome);
        Ok(())
    }

    /// Run a CATE estimation. Same contract as `estimate_ate`.
    pub fn estimate_cate<B: InferenceBackend>(&mut self, backend: &B) -> PanelResult<()> {
        if !self.cate_enabled() {
            return Err(ValidationError::RequirementsNotMet {
                effect: "CATE",
                reason: "at least one treatment and one condition variable",
            }
            .into());
        }
        self.check_selection()?;
        self.requester.begin(EffectKind::Cate);
        let outcome = self.dispatch(backend, EffectKind::Cate);
        self.requester.complete(EffectKind::Cate, outcome);
        Ok(())
    }

    /// Invoke the host's page-navigation callback (the "Back" link).
    pub fn navigate_back(&self) {
        if let Some(on_navigate) = &self.on_navigate {
            on_navigate(0);
        }
    }

    /// Derive the full view-model for the hosting page.
    pub fn view(&self) -> PanelView {
        let Some(props) = &self.props else {
            return PanelView::Empty;
        };

        if !self.resolver.is_complete() {
            return PanelView::EdgeResolution(EdgeResolutionView {
                graph: self.graph.clone(),
                pending: self
                    .resolver
                    .pending()
                    .iter()
                    .map(|edge| PendingEdgeView {
                        value: edge.encoded(),
                        label: edge.to_string(),
                    })
                    .collect(),
            });
        }

        let has_treatments = self.configurator.has_treatments();
        let has_conditions = self.configurator.has_conditions();
        let treatment_requirement = RequirementView {
            label: "At least one treatment variable".to_string(),
            met: has_treatments,
        };
        let condition_requirement = RequirementView {
            label: "At least one condition variable".to_string(),
            met: has_conditions,
        };

        PanelView::Inference(InferenceView {
            graph: self.graph.clone(),
            var_names: props.var_names.clone(),
            target_var: self.configurator.target_var().map(String::from),
            prediction_model: self.configurator.prediction_model(),
            can_add_variables: self.configurator.can_add_variables(),
            max_state_vals: self.bounds.known().clone(),
            bounds_error: self.bounds_error.clone(),
            treatments: self.configurator.treatments().to_vec(),
            conditions: self.configurator.conditions().to_vec(),
            ate: EstimateControlView {
                enabled: has_treatments,
                requirements: vec![treatment_requirement.clone()],
            },
            cate: EstimateControlView {
                enabled: has_treatments && has_conditions,
                requirements: vec![treatment_requirement, condition_requirement],
            },
            results: ResultsView::derive(&self.requester),
        })
    }

    /// Estimation runs only once the graph is fully resolved and target and
    /// model are chosen.
    fn check_selection(&self) -> PanelResult<()> {
        if !self.resolver.is_complete() {
            return Err(PanelError::NotConfigured {
                reason: "undirected edges remain unresolved".to_string(),
            });
        }
        if self.configurator.target_var().is_none() {
            return Err(ValidationError::MissingValue {
                field: "target variable",
            }
            .into());
        }
        if self.configurator.prediction_model().is_none() {
            return Err(ValidationError::MissingValue {
                field: "prediction model",
            }
            .into());
        }
        Ok(())
    }

    /// Assemble the request from current state and call the backend.
    fn dispatch<B: InferenceBackend>(
        &self,
        backend: &B,
        kind: EffectKind,
    ) -> PanelResult<EffectEstimate> {
        let props = self.props.as_ref().ok_or_else(no_props)?;
        let target_var = self.configurator.target_var().ok_or_else(no_props)?;
        let prediction_model = self.configurator.prediction_model().ok_or_else(no_props)?;
        let request = EstimationRequest {
            data_type: &props.data_type,
            data: &props.data,
            var_names: &props.var_names,
            causal_graph: &self.graph,
            target_var,
            prediction_model,
            treatments: self.configurator.treatments(),
            is_discrete: props.is_discrete,
            random_seed: props.random_seed,
            is_data_generated: props.is_data_generated,
            num_vars: props.num_vars,
            num_samples: props.num_samples,
            max_lag: props.max_lag,
        };
        match kind {
            EffectKind::Ate => backend.estimate_ate(&request),
            EffectKind::Cate => backend.estimate_cate(&request, self.configurator.conditions()),
        }
    }
}

fn no_props() -> PanelError {
    PanelError::NotConfigured {
        reason: "no host properties supplied".to_string(),
    }
}
