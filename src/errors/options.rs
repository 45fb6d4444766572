//! Error types for call option resolution.

/// Errors that can occur while resolving the options for a single call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// A state-mutating operation was requested but no wallet is configured.
    ///
    /// Raised before any network I/O.
    #[error("Missing credential: {operation} requires a wallet")]
    MissingCredential {
        /// Name of the operation that needed the wallet
        operation: &'static str,
    },
}

impl OptionsError {
    /// Create a `MissingCredential` error for an operation.
    pub fn missing_credential(operation: &'static str) -> Self {
        OptionsError::MissingCredential { operation }
    }
}
