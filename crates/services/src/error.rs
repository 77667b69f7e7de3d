//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::{BankError, ScoreError, ShareError};

/// Errors emitted by the quiz session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz already completed")]
    Completed,
    #[error("quiz is still in progress")]
    InProgress,
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Errors emitted while loading or exporting a question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read question catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Bank(#[from] BankError),
}

/// Errors emitted while resolving runtime configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid site url {raw:?}: {source}")]
    SiteUrl {
        raw: String,
        #[source]
        source: ShareError,
    },
    #[error("invalid share base url {raw:?}: {source}")]
    ShareBase {
        raw: String,
        #[source]
        source: ShareError,
    },
    #[error("invalid shuffle seed {raw:?}")]
    Seed { raw: String },
}
