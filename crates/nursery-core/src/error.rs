//! # Error Types
//!
//! Domain-specific error types for nursery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nursery-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog loading failures                       │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── PriceError       - Data-quality signal, never propagated          │
//! │                         past the normalizer                            │
//! │                                                                         │
//! │  shell errors (apps/shell)                                             │
//! │  └── ShellError       - What the terminal user sees                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note on Cart Transitions
//! Cart transitions are total: removing an unknown name, setting a quantity
//! on an unknown name, or setting a quantity ≤ 0 are defined outcomes, not
//! errors. Nothing in [`crate::cart`] returns a `Result`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog data: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Duplicate value (e.g., two catalog entries with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Price Error
// =============================================================================

/// Why a price representation could not be read as a plain amount.
///
/// Returned by [`crate::money::try_normalize`]. The fail-soft
/// [`crate::money::normalize`] logs these and substitutes zero (or the
/// clamped value for negatives).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    /// Text that does not start with a number after the currency marker.
    #[error("price '{raw}' is not a decimal amount")]
    Unparseable { raw: String },

    /// A number too large for an exact decimal amount.
    #[error("price {raw} is out of range")]
    OutOfRange { raw: String },

    /// NaN or infinite numeric price.
    #[error("price {value} is not a finite number")]
    NonFinite { value: f64 },

    /// Prices below zero are data errors.
    #[error("price {raw} is negative")]
    Negative { raw: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "plant name".to_string(),
            value: "Jasmine".to_string(),
        };
        assert_eq!(err.to_string(), "plant name 'Jasmine' already exists");
    }

    #[test]
    fn test_price_error_messages() {
        let err = PriceError::Unparseable {
            raw: "$abc".to_string(),
        };
        assert_eq!(err.to_string(), "price '$abc' is not a decimal amount");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
