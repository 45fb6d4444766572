//! Error types for SDK configuration.

/// Errors that can occur while building a [`crate::SwayLandConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configured URL could not be parsed.
    #[error("Invalid {field} URL {input:?}: {details}")]
    InvalidUrl {
        /// Which URL setting was invalid
        field: &'static str,
        /// The rejected input
        input: String,
        /// Parser error details
        details: String,
    },

    /// The gas-limit multiplier is malformed or below 1.
    #[error("Invalid gas limit multiplier {input:?}: {reason}")]
    InvalidGasLimitMultiplier {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// The oracle HTTP client could not be constructed.
    #[error("Failed to build oracle HTTP client: {details}")]
    HttpClient {
        /// Client builder error details
        details: String,
    },
}

impl ConfigError {
    /// Create an `InvalidUrl` error.
    pub fn invalid_url(
        field: &'static str,
        input: impl Into<String>,
        details: impl std::fmt::Display,
    ) -> Self {
        ConfigError::InvalidUrl {
            field,
            input: input.into(),
            details: details.to_string(),
        }
    }

    /// Create an `InvalidGasLimitMultiplier` error.
    pub fn invalid_gas_limit_multiplier(
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidGasLimitMultiplier {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
