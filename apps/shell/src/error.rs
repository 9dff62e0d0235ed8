//! # Shell Error Type
//!
//! Unified error type for shell commands and startup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  Startup (config, catalog, stdin/stdout)                               │
//! │    └── ShellError ──► main prints it and exits non-zero               │
//! │                                                                         │
//! │  One command line                                                      │
//! │    └── ShellError ──► rendered as text or {"code", "message"} JSON,   │
//! │                       loop continues with the next line               │
//! │                                                                         │
//! │  Cart transitions never fail, so no cart error exists here.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use nursery_core::CoreError;

/// Errors surfaced by the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading stdin, writing stdout, or reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`crate::state::ShopConfig`].
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration values are inconsistent.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Catalog could not be loaded or validated.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CoreError),

    /// Response could not be encoded as JSON.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// The named plant is not in the catalog.
    #[error("No plant named '{0}' in the catalog")]
    UnknownItem(String),

    /// The input line is not a command.
    #[error("{0}")]
    InvalidCommand(String),

    /// Checkout was requested with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Checkout has no implementation yet.
    #[error("Checkout is not available yet (cart total {total})")]
    CheckoutUnavailable { total: String },
}

/// Machine-readable error codes for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Plant not found
    NotFound,

    /// Input could not be parsed
    ValidationError,

    /// Operation not allowed in the current cart state
    BusinessLogic,

    /// Feature not built yet
    NotImplemented,

    /// Anything else
    Internal,
}

/// What JSON consumers receive when a command fails.
///
/// ```json
/// { "code": "NOT_FOUND", "message": "No plant named 'Cactus' in the catalog" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl ShellError {
    /// The code reported alongside the message.
    pub fn code(&self) -> ErrorCode {
        match self {
            ShellError::UnknownItem(_) => ErrorCode::NotFound,
            ShellError::InvalidCommand(_) => ErrorCode::ValidationError,
            ShellError::EmptyCart => ErrorCode::BusinessLogic,
            ShellError::CheckoutUnavailable { .. } => ErrorCode::NotImplemented,
            ShellError::Io(_)
            | ShellError::ConfigParse(_)
            | ShellError::InvalidConfig(_)
            | ShellError::Catalog(_)
            | ShellError::Output(_) => ErrorCode::Internal,
        }
    }

    /// True for errors that only affect one command line.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.code(), ErrorCode::Internal)
    }

    /// Creates an invalid command error.
    pub fn invalid(message: impl Into<String>) -> Self {
        ShellError::InvalidCommand(message.into())
    }
}

impl From<&ShellError> for ErrorResponse {
    fn from(err: &ShellError) -> Self {
        ErrorResponse {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for Results with ShellError.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ShellError::UnknownItem("Cactus".into()).code(),
            ErrorCode::NotFound
        );
        assert_eq!(ShellError::EmptyCart.code(), ErrorCode::BusinessLogic);
        assert!(ShellError::EmptyCart.is_recoverable());
        assert!(!ShellError::InvalidConfig("x".into()).is_recoverable());
    }

    #[test]
    fn test_error_response_json() {
        let err = ShellError::UnknownItem("Cactus".into());
        let json = serde_json::to_string(&ErrorResponse::from(&err)).unwrap();
        assert_eq!(
            json,
            r#"{"code":"NOT_FOUND","message":"No plant named 'Cactus' in the catalog"}"#
        );
    }
}
