//! Terraform state reader.
//!
//! Only the `resources[].{type,name,instances[].attributes}` subset of the tfstate
//! schema is modelled; everything else in the file is ignored and the schema
//! version is not checked.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::TfQueryError;
use crate::query::Query;

#[derive(Debug, Clone, Deserialize)]
pub struct StateDocument {
    pub resources: Vec<ResourceBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceBlock {
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    #[serde(default)]
    pub instances: Vec<ResourceInstance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceInstance {
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
}

impl ResourceInstance {
    pub fn attribute(&self, property: &str) -> Option<&Value> {
        self.attributes.as_ref()?.get(property)
    }
}

impl StateDocument {
    pub fn load(path: &Path) -> Result<Self, TfQueryError> {
        tracing::debug!(path = %path.display(), "reading state file");

        let contents = fs::read_to_string(path).map_err(|source| TfQueryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document: StateDocument =
            serde_json::from_str(&contents).map_err(|source| TfQueryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(count = document.resources.len(), "state file parsed");

        Ok(document)
    }

    pub fn lookup(&self, query: &Query) -> Option<String> {
        find_resource(
            &self.resources,
            &query.resource_type,
            &query.name,
            &query.property,
        )
    }
}

/// Collects `property` from every instance of every block matching
/// `resource_type` and `name`, joined with `,` in document order.
///
/// Returns `None` when no block matches. Instances lacking the property are
/// skipped, so a match where no instance carries it yields `Some("")`.
pub fn find_resource(
    resources: &[ResourceBlock],
    resource_type: &str,
    name: &str,
    property: &str,
) -> Option<String> {
    let matching: Vec<&ResourceBlock> = resources
        .iter()
        .filter(|r| r.type_ == resource_type && r.name == name)
        .collect();

    if matching.is_empty() {
        tracing::debug!(resource_type, name, "no matching resource");
        return None;
    }

    let values: Vec<String> = matching
        .iter()
        .flat_map(|block| block.instances.iter())
        .filter_map(|instance| instance.attribute(property))
        .filter_map(attribute_to_string)
        .collect();

    tracing::debug!(
        blocks = matching.len(),
        values = values.len(),
        property,
        "collected attribute values"
    );

    Some(values.join(","))
}

// A present key normally contributes a value, but null is how terraform records
// an unset attribute, so it is skipped like a missing key instead.
fn attribute_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
