//! Error types for read-only market queries.

use super::{BuildError, NetworkError, OptionsError};

/// Errors that can occur while running a read-only query.
///
/// A failed query is always surfaced; it is never turned into a zero value.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Resolving options for the query failed.
    #[error(transparent)]
    Options(#[from] OptionsError),

    /// The query call could not be encoded.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The network failed to simulate the query.
    #[error("Query {function} failed")]
    Simulation {
        /// Contract function that was queried
        function: &'static str,
        /// Network failure
        #[source]
        source: NetworkError,
    },

    /// The query succeeded but returned a value of an unexpected shape.
    #[error("Query {function} returned an unexpected value, expected {expected}")]
    UnexpectedReturn {
        /// Contract function that was queried
        function: &'static str,
        /// Description of the expected shape
        expected: &'static str,
    },
}

impl QueryError {
    /// Create a `Simulation` error.
    pub fn simulation(function: &'static str, source: NetworkError) -> Self {
        QueryError::Simulation { function, source }
    }

    /// Create an `UnexpectedReturn` error.
    pub fn unexpected_return(function: &'static str, expected: &'static str) -> Self {
        QueryError::UnexpectedReturn { function, expected }
    }
}
