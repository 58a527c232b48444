//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_argument_display() {
    let err = Error::InvalidArgument("model point is missing or not finite".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid argument"));
    assert!(display.contains("model point"));
}

#[test]
fn test_degenerate_geometry_display() {
    let err = Error::DegenerateGeometry("modelview-projection matrix is singular".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate geometry"));
    assert!(display.contains("singular"));
}

#[test]
fn test_invalid_state_display() {
    let err = Error::InvalidState("no frame".to_string());
    assert_eq!(format!("{}", err), "Invalid state: no frame");
}

#[test]
fn test_non_finite_helper() {
    let err = Error::non_finite("screen point");
    assert_eq!(
        err,
        Error::InvalidArgument("screen point is missing or not finite".to_string())
    );
}

#[test]
fn test_singular_helper() {
    let err = Error::singular("projection matrix");
    assert!(matches!(err, Error::DegenerateGeometry(ref msg) if msg.contains("projection matrix")));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidState("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::InvalidArgument("a".to_string()));
    assert!(debug1.contains("InvalidArgument"));

    let debug2 = format!("{:?}", Error::DegenerateGeometry("b".to_string()));
    assert!(debug2.contains("DegenerateGeometry"));

    let debug3 = format!("{:?}", Error::InvalidState("c".to_string()));
    assert!(debug3.contains("InvalidState"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::DegenerateGeometry("w is zero".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<f64> {
        Err(Error::InvalidArgument("distance".to_string()))
    }

    fn outer() -> Result<f64> {
        let value = inner()?;
        Ok(value * 2.0)
    }

    assert_eq!(outer(), Err(Error::InvalidArgument("distance".to_string())));
}
