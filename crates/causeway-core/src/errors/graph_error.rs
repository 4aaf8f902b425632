/// Causal graph and edge-resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("malformed edge selection: {input:?}")]
    MalformedEdgeSelection { input: String },

    #[error("unknown node: {name}")]
    UnknownNode { name: String },

    #[error("edge {left} - {right} is not pending resolution")]
    EdgeNotPending { left: String, right: String },

    #[error("cycle detected in causal graph: {path}")]
    CycleDetected { path: String },
}
