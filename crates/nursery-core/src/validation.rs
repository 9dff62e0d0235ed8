//! # Validation Module
//!
//! Name rules for catalog data. Shell command lines are parsed in the
//! shell crate and never pass through here.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Catalog load ──► THIS MODULE: names present, bounded, unique          │
//! │                                                                         │
//! │  Cart transitions ──► NO validation. Every add/remove/set is total;    │
//! │                       quantities ≤ 0 mean "remove", unknown names      │
//! │                       are no-ops, prices are interpreted on read.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nursery_core::validation::validate_item_name;
//!
//! assert!(validate_item_name("Snake Plant").is_ok());
//! assert!(validate_item_name("").is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a plant name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name)
}

/// Validates a category title. Same rules as plant names.
pub fn validate_category_name(category: &str) -> ValidationResult<()> {
    validate_name("category", category)
}

fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
