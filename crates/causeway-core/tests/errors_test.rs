//! Error message and conversion tests.

use causeway_core::errors::{ClientError, GraphError, ValidationError};
use causeway_core::PanelError;

#[test]
fn validation_messages_name_the_field() {
    let err = ValidationError::MissingValue {
        field: "treatment value",
    };
    assert_eq!(err.to_string(), "enter a valid treatment value");

    let err = ValidationError::ExceedsBound {
        field: "control value",
        var: "X".to_string(),
        value: 9.0,
        max: 5.0,
    };
    let message = err.to_string();
    assert!(message.contains("control value"));
    assert!(message.contains('X'));
}

#[test]
fn domain_errors_lift_into_the_umbrella() {
    let err: PanelError = GraphError::MalformedEdgeSelection {
        input: "A-B-C".to_string(),
    }
    .into();
    assert!(matches!(err, PanelError::Graph(_)));
    assert!(err.to_string().contains("A-B-C"));

    let err: PanelError = ClientError::ServiceError {
        status: 500,
        reason: "internal".to_string(),
    }
    .into();
    assert!(err.to_string().contains("500"));
}
