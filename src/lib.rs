//! tfstate-query - Terraform state attribute lookup
//!
//! Reads a Terraform state file and renders one resource attribute as a
//! `type.name.property=value` line for shell scripts.

pub mod config;
pub mod error;
pub mod output;
pub mod query;
pub mod terraform;

pub use config::{DEFAULT_STATE_FILE, LookupConfig};
pub use error::TfQueryError;
pub use query::{Query, QueryError};
pub use terraform::{ResourceBlock, ResourceInstance, StateDocument, find_resource};

/// Parses `raw_query`, loads the configured state file and returns the line to
/// print, if any.
///
/// The query is validated before the state file is touched.
pub fn run(config: &LookupConfig, raw_query: &str) -> Result<Option<String>, TfQueryError> {
    let query = Query::parse(raw_query)?;
    let state = StateDocument::load(&config.state_path)?;
    let value = state.lookup(&query);

    Ok(output::format_assignment(&query, value.as_deref()))
}
