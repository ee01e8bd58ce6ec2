//! Errors raised while building a content index.
//!
//! Queries never fail: missing records are `None` and stale references are
//! skipped. Only loading the bundled data can go wrong.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Collection;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {collection} data: {source}")]
    Parse {
        collection: Collection,
        source: serde_json::Error,
    },

    #[error("Duplicate id in {collection}: {id}")]
    DuplicateId { collection: Collection, id: String },
}
