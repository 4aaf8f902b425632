/// Remote inference-service call errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {reason}")]
    NetworkError { reason: String },

    #[error("service error: status {status}: {reason}")]
    ServiceError { status: u16, reason: String },

    #[error("request encode error: {reason}")]
    EncodeError { reason: String },

    #[error("response decode error: {reason}")]
    DecodeError { reason: String },

    #[error("invalid client config: {reason}")]
    InvalidConfig { reason: String },
}
