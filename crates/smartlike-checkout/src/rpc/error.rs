/*
[INPUT]:  Error sources (secret validation, parameter checks, HTTP, serialization)
[OUTPUT]: Structured error types with user/system classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Smartlike checkout pipeline
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Account secret is not a valid BIP-39 mnemonic
    #[error("invalid account key: {0}")]
    InvalidSecret(#[from] bip39::Error),

    /// A required checkout parameter was not supplied
    #[error("missing parameter '{name}'")]
    MissingParameter { name: &'static str },

    /// Checkout type is not one of the supported actions
    #[error("unknown action type '{value}'")]
    UnknownAction { value: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Result could not be handed to the configured sink
    #[error("Result delivery failed: {0}")]
    Delivery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// Check if the error was caused by caller input (bad secret or bad
    /// parameters) rather than by the system or the network.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CheckoutError::InvalidSecret(_)
                | CheckoutError::MissingParameter { .. }
                | CheckoutError::UnknownAction { .. }
        )
    }

    /// Create a missing-parameter error for the given field name
    pub fn missing(name: &'static str) -> Self {
        CheckoutError::MissingParameter { name }
    }
}

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;
