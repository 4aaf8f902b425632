pub mod bounds;
pub mod edge;
pub mod effect;
pub mod graph;
pub mod props;
pub mod variables;

pub use bounds::{Bound, BoundCheck, StateBounds};
pub use edge::{Direction, EdgeKey};
pub use effect::{EffectEstimate, EffectKind};
pub use graph::CausalGraph;
pub use props::PanelProps;
pub use variables::{ConditionVar, PredictionModel, TreatmentVar};
