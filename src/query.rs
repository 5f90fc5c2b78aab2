use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error(
        "malformed query '{query}': expected resource_type.name.property, got {parts} part(s)"
    )]
    Malformed { query: String, parts: usize },
}

/// A `resource_type.name.property` lookup.
///
/// Split on every `.`; embedded dots cannot be escaped, so a property such as
/// `tags.Name` is rejected rather than treated as a nested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    pub resource_type: String,
    pub name: String,
    pub property: String,
}

impl Query {
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let parts: Vec<&str> = input.split('.').collect();

        match parts.as_slice() {
            [resource_type, name, property] => Ok(Self {
                raw: input.to_string(),
                resource_type: (*resource_type).to_string(),
                name: (*name).to_string(),
                property: (*property).to_string(),
            }),
            _ => Err(QueryError::Malformed {
                query: input.to_string(),
                parts: parts.len(),
            }),
        }
    }

    /// The query exactly as given on the command line; used as the output key.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
