//! Error taxonomy for the panel: per-domain enums plus the `PanelError`
//! umbrella every fallible operation returns.

pub mod client_error;
pub mod graph_error;
pub mod validation_error;

pub use client_error::ClientError;
pub use graph_error::GraphError;
pub use validation_error::ValidationError;

/// Workspace-wide result alias.
pub type PanelResult<T> = Result<T, PanelError>;

/// Umbrella error for all panel operations.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("panel not configured: {reason}")]
    NotConfigured { reason: String },
}
