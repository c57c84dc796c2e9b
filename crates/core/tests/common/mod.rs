#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use xsdscope_core::model::{
    AttributeField, Component, ComponentKind, ElementField, IndexSummary, QNameResolution, Schema,
    SchemaIndex, TreeModel, TreeNodeKind,
};

pub fn schema(id: &str, file_name: &str) -> Schema {
    Schema {
        id: id.to_string(),
        file_name: file_name.to_string(),
        display_name: file_name.trim_end_matches(".xsd").to_string(),
        target_namespace: "urn:test".to_string(),
        root_element_ids: vec![],
        component_ids: vec![],
        dependencies: vec![],
    }
}

pub fn component(id: &str, schema_id: &str, kind: ComponentKind, name: &str) -> Component {
    Component {
        id: id.to_string(),
        schema_id: schema_id.to_string(),
        schema_file_name: format!("{schema_id}.xsd"),
        kind,
        name: name.to_string(),
        namespace: "urn:test".to_string(),
        docs: vec![],
        restrictions: Default::default(),
        enumerations: vec![],
        base_type: None,
        element_fields: vec![],
        attribute_fields: vec![],
        references: vec![],
        used_by: vec![],
    }
}

pub fn element_field(id: &str, path: &str, depth: u32, name: &str) -> ElementField {
    ElementField {
        id: id.to_string(),
        path: path.to_string(),
        depth,
        name: name.to_string(),
        occurrence: "1..1".to_string(),
        documentation: String::new(),
        raw_type_or_ref: String::new(),
        resolution: None,
        restrictions: Default::default(),
    }
}

pub fn attribute_field(id: &str, path: &str, depth: u32, name: &str) -> AttributeField {
    AttributeField {
        id: id.to_string(),
        path: path.to_string(),
        depth,
        name: name.to_string(),
        usage: "optional".to_string(),
        documentation: String::new(),
        raw_type_or_ref: String::new(),
        resolution: None,
        restrictions: Default::default(),
    }
}

pub fn resolution_to(raw: &str, target_ids: &[&str]) -> QNameResolution {
    QNameResolution {
        raw: raw.to_string(),
        namespace: "urn:test".to_string(),
        local: raw.to_string(),
        is_builtin: false,
        target_ids: target_ids.iter().map(|s| s.to_string()).collect(),
        ambiguous: target_ids.len() > 1,
        unresolved_reason: if target_ids.is_empty() {
            Some("No matching component found".to_string())
        } else {
            None
        },
    }
}

pub fn builtin_resolution(raw: &str) -> QNameResolution {
    QNameResolution {
        raw: raw.to_string(),
        namespace: "http://www.w3.org/2001/XMLSchema".to_string(),
        local: raw.trim_start_matches("xs:").to_string(),
        is_builtin: true,
        target_ids: vec![],
        ambiguous: false,
        unresolved_reason: None,
    }
}

pub fn index_with(schemas: Vec<Schema>, components: Vec<Component>) -> SchemaIndex {
    SchemaIndex {
        version: 1,
        generated_at: "2026-08-30T00:00:00Z".to_string(),
        source_directory: "/schemas".to_string(),
        summary: IndexSummary {
            schema_count: schemas.len(),
            component_count: components.len(),
            root_element_count: 0,
            warning_count: 0,
        },
        warnings: vec![],
        schemas,
        components,
    }
}

/// Direct-tree cache stub for expansion tests that need trees to be missing
/// or hand-crafted.
pub fn tree_map(entries: Vec<(&str, TreeModel)>) -> HashMap<String, Arc<TreeModel>> {
    entries
        .into_iter()
        .map(|(id, tree)| (id.to_string(), Arc::new(tree)))
        .collect()
}

/// Walk a tree collecting `(path, kind)` pairs in child order, for compact
/// structural assertions.
pub fn flatten(tree: &TreeModel) -> Vec<(String, TreeNodeKind)> {
    let mut out = Vec::new();
    let mut stack = vec![tree.root_id.clone()];
    while let Some(id) = stack.pop() {
        if let Some(node) = tree.node(&id) {
            out.push((node.path.clone(), node.kind));
            for child in node.children.iter().rev() {
                stack.push(child.clone());
            }
        }
    }
    out
}
