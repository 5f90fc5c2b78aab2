use std::path::PathBuf;

use thiserror::Error;

use crate::query::QueryError;

#[derive(Debug, Error)]
pub enum TfQueryError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("failed to read state file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse state file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
