//! Loading of the indexer-produced JSON document.
//!
//! The indexer is an external collaborator: it parses the `.xsd` files,
//! resolves every QName against the cross-schema catalog, and writes one JSON
//! index. This module only deserializes that document and checks its version;
//! everything downstream treats the result as immutable.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, XsdscopeError};
use crate::model::SchemaIndex;

/// Index document version this engine understands.
pub const SUPPORTED_INDEX_VERSION: u32 = 1;

pub fn load_index(path: &Path) -> Result<SchemaIndex> {
    let file = File::open(path)?;
    let index = read_index(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        schemas = index.schemas.len(),
        components = index.components.len(),
        warnings = index.warnings.len(),
        "loaded schema index"
    );
    Ok(index)
}

pub fn read_index(reader: impl Read) -> Result<SchemaIndex> {
    let index: SchemaIndex = serde_json::from_reader(reader)?;
    if index.version != SUPPORTED_INDEX_VERSION {
        return Err(XsdscopeError::Index(format!(
            "unsupported index version {} (expected {})",
            index.version, SUPPORTED_INDEX_VERSION
        )));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_version() {
        let doc = r#"{ "version": 2, "schemas": [], "components": [] }"#;
        let err = read_index(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, XsdscopeError::Index(_)));
    }

    #[test]
    fn parses_minimal_document() {
        let doc = r#"{
            "version": 1,
            "generatedAt": "2026-08-30T00:00:00Z",
            "summary": { "schemaCount": 1, "componentCount": 0 },
            "schemas": [
                { "id": "schema-a", "fileName": "a.xsd", "targetNamespace": "urn:a" }
            ],
            "components": []
        }"#;
        let index = read_index(doc.as_bytes()).unwrap();
        assert_eq!(index.schemas.len(), 1);
        assert_eq!(index.schemas[0].target_namespace, "urn:a");
        assert_eq!(index.summary.schema_count, 1);
    }
}
