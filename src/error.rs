//! Generation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The settings resolve to an empty character pool. Not retryable;
    /// the caller must fix the configuration.
    #[error("configuration resolves to an empty character pool")]
    InvalidConfiguration,

    /// The randomness source failed to produce bytes. Propagated as-is;
    /// any retry policy belongs to the caller.
    #[error("randomness source unavailable")]
    SourceUnavailable(#[from] std::io::Error),
}
