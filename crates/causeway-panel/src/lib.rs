//! # causeway-panel
//!
//! Headless engine for the causal-inference panel. Owns the working copy of
//! the causal graph, resolves undirected edges, configures treatment and
//! condition variables against fetched state bounds, drives ATE/CATE
//! estimation through an `InferenceBackend`, and derives the view-model the
//! hosting page renders.

pub mod configurator;
pub mod engine;
pub mod inference;
pub mod resolver;
pub mod view;

pub use configurator::VariableConfigurator;
pub use engine::{PanelEngine, PanelPhase};
pub use inference::{EstimateState, InferenceRequester};
pub use resolver::EdgeResolver;
pub use view::{
    EdgeResolutionView, EstimateControlView, InferenceView, PanelView, PendingEdgeView,
    RequirementView, ResultsView,
};
