//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors emitted while generating an explanation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExplanationError {
    #[error("explanations are not configured")]
    Disabled,
    #[error("explanation response contained no generated text")]
    EmptyResponse,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
