//! # Error Types
//!
//! Structured error types for joint_core. Errors fall into two families so a
//! host can treat them differently:
//!
//! - [`ValidationError`] - bad input or unknown labels, reported before any
//!   computation runs
//! - [`ComputationError`] - the inputs were valid but the comparison has no
//!   defined answer (e.g. the reference joint has zero strength); a host
//!   renders these as "N/A" rather than a number
//!
//! [`CalcError`] wraps both for the one-call helpers.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::errors::ValidationError;
//!
//! fn validate_quantity(quantity: u32) -> Result<(), ValidationError> {
//!     if quantity == 0 {
//!         return Err(ValidationError::invalid_input(
//!             "quantity",
//!             quantity.to_string(),
//!             "At least one fastener is required",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for joint_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Input was rejected before any computation ran.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Fastener size label is not in the reference table
    #[error("Fastener size not found: {label}")]
    SizeNotFound { label: String },

    /// Material grade label is not in the reference table
    #[error("Material grade not found: {label}")]
    GradeNotFound { label: String },

    /// The grade exists but publishes no value of the requested kind
    #[error("Grade '{grade}' has no {kind} rating")]
    StrengthNotRated { grade: String, kind: String },

    /// A custom reference table is malformed
    #[error("Invalid reference data: {reason}")]
    InvalidReferenceData { reason: String },
}

impl ValidationError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SizeNotFound error
    pub fn size_not_found(label: impl Into<String>) -> Self {
        ValidationError::SizeNotFound { label: label.into() }
    }

    /// Create a GradeNotFound error
    pub fn grade_not_found(label: impl Into<String>) -> Self {
        ValidationError::GradeNotFound { label: label.into() }
    }

    /// Create a StrengthNotRated error
    pub fn strength_not_rated(grade: impl Into<String>, kind: impl Into<String>) -> Self {
        ValidationError::StrengthNotRated {
            grade: grade.into(),
            kind: kind.into(),
        }
    }

    /// Create an InvalidReferenceData error
    pub fn invalid_reference_data(reason: impl Into<String>) -> Self {
        ValidationError::InvalidReferenceData { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidInput { .. } => "INVALID_INPUT",
            ValidationError::SizeNotFound { .. } => "SIZE_NOT_FOUND",
            ValidationError::GradeNotFound { .. } => "GRADE_NOT_FOUND",
            ValidationError::StrengthNotRated { .. } => "STRENGTH_NOT_RATED",
            ValidationError::InvalidReferenceData { .. } => "INVALID_REFERENCE_DATA",
        }
    }
}

/// Inputs were valid but the comparison has no defined numeric answer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ComputationError {
    /// Strength ratio is undefined (reference strength is zero or not finite)
    #[error("Ratio undefined - {reason}")]
    UndefinedRatio { reason: String },

    /// The two joints were computed on different equivalent-strength bases
    #[error("Cannot compare joints computed on different bases: {joint_1} vs {joint_2}")]
    BasisMismatch { joint_1: String, joint_2: String },

    /// Acceptance threshold is not a positive finite percentage
    #[error("Invalid acceptance threshold: {value}%")]
    InvalidThreshold { value: String },
}

impl ComputationError {
    /// Create an UndefinedRatio error
    pub fn undefined_ratio(reason: impl Into<String>) -> Self {
        ComputationError::UndefinedRatio { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ComputationError::UndefinedRatio { .. } => "UNDEFINED_RATIO",
            ComputationError::BasisMismatch { .. } => "BASIS_MISMATCH",
            ComputationError::InvalidThreshold { .. } => "INVALID_THRESHOLD",
        }
    }
}

/// Any error produced by a full joint check.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", content = "error")]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl CalcError {
    /// True for errors raised before any computation ran
    pub fn is_validation(&self) -> bool {
        matches!(self, CalcError::Validation(_))
    }

    /// True for errors where the host should display "N/A"
    pub fn is_computation(&self) -> bool {
        matches!(self, CalcError::Computation(_))
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation(e) => e.error_code(),
            CalcError::Computation(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ValidationError::invalid_input("k_factor", "-0.2", "k-factor must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::size_not_found("9/32-15").error_code(), "SIZE_NOT_FOUND");
        assert_eq!(ValidationError::grade_not_found("A999").error_code(), "GRADE_NOT_FOUND");
        assert_eq!(
            ComputationError::undefined_ratio("zero strength").error_code(),
            "UNDEFINED_RATIO"
        );
    }

    #[test]
    fn test_calc_error_categories() {
        let v: CalcError = ValidationError::grade_not_found("A999").into();
        assert!(v.is_validation());
        assert!(!v.is_computation());
        assert_eq!(v.error_code(), "GRADE_NOT_FOUND");

        let c: CalcError = ComputationError::undefined_ratio("zero strength").into();
        assert!(c.is_computation());
        assert_eq!(c.to_string(), "Ratio undefined - zero strength");
    }

    #[test]
    fn test_calc_error_json_shape() {
        let c: CalcError = ComputationError::undefined_ratio("zero strength").into();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"category\":\"Computation\""));
        assert!(json.contains("\"type\":\"UndefinedRatio\""));
    }
}
