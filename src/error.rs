// src/error.rs
//! Typed errors. Only item extraction and store writes can fail; everything
//! else degrades to empty/sentinel values.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Why one listing item could not be turned into a record.
/// Always recovered by skipping the item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing node `{selector}`")]
    MissingNode { selector: &'static str },

    #[error("missing {what} #{index}")]
    MissingIndex { what: &'static str, index: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode records: {0}")]
    Json(#[from] serde_json::Error),
}
