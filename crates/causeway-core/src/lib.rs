//! # causeway-core
//!
//! Foundation crate for the Causeway inference panel.
//! Defines all models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ServiceConfig;
pub use errors::{PanelError, PanelResult};
pub use models::{
    Bound, BoundCheck, CausalGraph, ConditionVar, Direction, EdgeKey, EffectEstimate, EffectKind,
    PanelProps, PredictionModel, StateBounds, TreatmentVar,
};
