//! # Error Types
//!
//! Structured error types for roll_core. Every failure carries enough
//! context to understand and fix the issue programmatically; callers
//! should never have to parse a message string.
//!
//! Note that "no rods fit" is not an error: it is a valid allocation
//! outcome, reported through [`crate::allocation::AllocationResult`] with
//! `rod_count == 0`. The variants here cover inputs that are rejected
//! before any geometry runs and arithmetic that would otherwise produce
//! NaN or infinity.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::errors::{RollError, RollResult};
//!
//! fn validate_density(density: f64) -> RollResult<()> {
//!     if density <= 0.0 {
//!         return Err(RollError::invalid_input(
//!             "density",
//!             density.to_string(),
//!             "Density must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roll_core operations
pub type RollResult<T> = Result<T, RollError>;

/// Structured error type for allocation and geometry operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers and UIs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RollError {
    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Arithmetic would leave the real domain (negative square-root
    /// argument, zero divisor). Raised instead of propagating NaN.
    #[error("Invalid geometry in {operation}: {reason}")]
    InvalidGeometry { operation: String, reason: String },

    /// Paper grade code not found in the catalog
    #[error("Paper grade not found: {code}")]
    MaterialNotFound { code: String },
}

impl RollError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RollError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        RollError::InvalidGeometry {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(code: impl Into<String>) -> Self {
        RollError::MaterialNotFound { code: code.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RollError::InvalidInput { .. } => "INVALID_INPUT",
            RollError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            RollError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RollError::invalid_input("drum_radius_mm", "-5.0", "Radius must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: RollError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RollError::material_not_found("9X999").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            RollError::invalid_geometry("radius_for_length", "negative sqrt argument")
                .error_code(),
            "INVALID_GEOMETRY"
        );
    }

    #[test]
    fn test_error_display() {
        let error = RollError::material_not_found("1F999");
        assert_eq!(error.to_string(), "Paper grade not found: 1F999");
    }
}
