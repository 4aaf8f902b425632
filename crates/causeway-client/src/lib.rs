//! # causeway-client
//!
//! Blocking HTTP client for the remote statistical-computation service:
//! typed wire protocol, transport with timeouts and error mapping, and the
//! `InferenceBackend` seam the panel engine consumes.

pub mod service;
pub mod transport;

pub use service::{InferenceBackend, InferenceService};
pub use transport::protocol::{BoundsRequest, EstimationRequest};
pub use transport::HttpClient;
