use serde::{Deserialize, Serialize};

/// One `include`/`import` edge of a schema file, pre-resolved by the indexer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub kind: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub resolved_file_name: String,
    #[serde(default)]
    pub exists: bool,
}

/// One source `.xsd` file and the component ids it declares.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub target_namespace: String,
    #[serde(default)]
    pub root_element_ids: Vec<String>,
    #[serde(default)]
    pub component_ids: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Schema {
    /// Dependencies whose schemaLocation did not resolve to a file on disk.
    pub fn missing_dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies
            .iter()
            .filter(|d| !d.location.is_empty() && !d.exists)
    }
}
