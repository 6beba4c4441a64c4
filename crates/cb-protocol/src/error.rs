//! Payload validation errors.

use thiserror::Error;

/// A request payload failed boundary validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: String, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: String, value: f64 },

    #[error("{0}")]
    Empty(String),
}

/// Require a finite, non-negative measurement.
pub fn non_negative(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    let field = field.into();
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// Require a finite, strictly positive parameter.
pub fn positive(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    let field = field.into();
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_and_negative() {
        assert!(matches!(
            non_negative("maf_gps", f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            non_negative("maf_gps", -1.0),
            Err(ValidationError::Negative { .. })
        ));
        assert!(non_negative("maf_gps", 0.0).is_ok());
    }

    #[test]
    fn positive_rejects_zero() {
        let err = positive("displacement_l", 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "displacement_l must be greater than zero, got 0"
        );
    }
}
