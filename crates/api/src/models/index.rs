use serde::{Deserialize, Serialize};

use super::component::Component;
use super::schema::Schema;

/// Stable warning codes emitted by the indexer. Informational only: a warning
/// degrades display of the affected component, never blocks browsing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    MissingDependency,
    UnresolvedReference,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::MissingDependency => "MISSING_DEPENDENCY",
            WarningCode::UnresolvedReference => "UNRESOLVED_REFERENCE",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexSummary {
    #[serde(default)]
    pub schema_count: usize,
    #[serde(default)]
    pub component_count: usize,
    #[serde(default)]
    pub root_element_count: usize,
    #[serde(default)]
    pub warning_count: usize,
}

/// The immutable snapshot the whole engine operates on: every schema, every
/// component, every precomputed resolution, plus indexer diagnostics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaIndex {
    pub version: u32,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub source_directory: String,
    #[serde(default)]
    pub summary: IndexSummary,
    #[serde(default)]
    pub warnings: Vec<Warning>,
    #[serde(default)]
    pub schemas: Vec<Schema>,
    #[serde(default)]
    pub components: Vec<Component>,
}
