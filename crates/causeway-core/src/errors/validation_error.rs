/// Input validation errors. Surfaced inline and recoverable by re-entry.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("enter a valid {field}")]
    MissingValue { field: &'static str },

    #[error("{field} {value} exceeds the max state value {max} for {var}")]
    ExceedsBound {
        field: &'static str,
        var: String,
        value: f64,
        max: f64,
    },

    #[error("max state value for {var} is unknown; retry the bounds fetch")]
    BoundUnknown { var: String },

    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("{effect} requirements not met: {reason}")]
    RequirementsNotMet {
        effect: &'static str,
        reason: &'static str,
    },
}
