mod common;

use std::io::Write;
use std::sync::Arc;

use common::{component, element_field, index_with, resolution_to, schema};
use xsdscope_core::ExplorerSession;
use xsdscope_core::features::query::ComponentFilter;
use xsdscope_core::ingest;
use xsdscope_core::model::ComponentKind;

fn two_schema_session() -> ExplorerSession {
    let mut envelope = component("env", "schema-a", ComponentKind::Element, "Envelope");
    let mut header_field = element_field("f-header", "Envelope/Header", 1, "Header");
    header_field.resolution = Some(resolution_to("HeaderType", &["hdr@a", "hdr@b"]));
    envelope.element_fields = vec![header_field];

    let header_a = component("hdr@a", "schema-a", ComponentKind::ComplexType, "HeaderType");
    let header_b = component("hdr@b", "schema-b", ComponentKind::ComplexType, "HeaderType");
    let address = component("addr", "schema-b", ComponentKind::SimpleType, "Address");

    ExplorerSession::new(index_with(
        vec![schema("schema-a", "a.xsd"), schema("schema-b", "b.xsd")],
        vec![envelope, header_a, header_b, address],
    ))
}

#[test]
fn direct_trees_are_memoized_per_component() {
    let session = two_schema_session();
    let first = session.direct_tree("env").unwrap();
    let second = session.direct_tree("env").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn unknown_component_is_a_not_found_error() {
    let session = two_schema_session();
    let err = session.direct_tree("nope").unwrap_err();
    assert!(matches!(err, xsdscope_api::ApiError::NotFound(_)));
    assert!(session.expanded_tree("nope").is_err());
}

#[test]
fn session_resolution_prefers_the_current_schema() {
    let session = two_schema_session();
    let resolution = resolution_to("HeaderType", &["hdr@a", "hdr@b"]);

    // Seen from schema-a, the schema-a candidate wins; seen from schema-b,
    // the schema-b one does.
    assert_eq!(session.resolve_target(&resolution, "env"), Some("hdr@a"));
    assert_eq!(session.resolve_target(&resolution, "addr"), Some("hdr@b"));
    // Unknown current component cannot anchor a resolution.
    assert_eq!(session.resolve_target(&resolution, "nope"), None);
}

#[test]
fn expansion_through_the_session_uses_cached_trees() {
    let session = two_schema_session();
    let expanded = session.expanded_tree("env").unwrap();
    let header = expanded.node_at_path("Envelope/Header").unwrap();
    // hdr@a has no fields, so nothing was spliced, but the resolution picked
    // the same-schema candidate and tagged nothing else.
    assert!(header.children.is_empty());
    assert_eq!(header.context_component_id, "env");
}

#[test]
fn variants_number_homonymous_components() {
    let session = two_schema_session();
    assert_eq!(session.variant("hdr@a").map(|v| (v.position, v.total)), Some((1, 2)));
    assert_eq!(session.variant("hdr@b").map(|v| (v.position, v.total)), Some((2, 2)));
    assert!(session.variant("addr").is_some_and(|v| v.is_solo()));
    assert_eq!(session.variant("nope"), None);
}

#[test]
fn search_filters_by_kind_and_pattern() {
    let session = two_schema_session();

    let filter = ComponentFilter {
        pattern: Some("header".to_string()),
        kinds: vec![ComponentKind::ComplexType],
        ..Default::default()
    };
    let hits = session.search(&filter).unwrap();
    let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["hdr@a", "hdr@b"]);

    let schema_filter = ComponentFilter {
        schema_id: Some("schema-b".to_string()),
        ..Default::default()
    };
    assert_eq!(session.search(&schema_filter).unwrap().len(), 2);

    let bad = ComponentFilter {
        pattern: Some("[".to_string()),
        ..Default::default()
    };
    assert!(session.search(&bad).is_err());
}

#[test]
fn index_document_round_trips_through_the_loader() {
    let index = index_with(
        vec![schema("schema-a", "a.xsd")],
        vec![component("env", "schema-a", ComponentKind::Element, "Envelope")],
    );
    let json = serde_json::to_string_pretty(&index).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = ingest::load_index(file.path()).unwrap();
    assert_eq!(loaded, index);

    let session = ExplorerSession::new(loaded);
    assert_eq!(session.components().len(), 1);
    assert!(session.component("env").is_some());
    assert!(session.schema("schema-a").is_some());
}

#[test]
fn loader_accepts_the_indexer_field_names() {
    // Spot-check the camelCase wire names against a hand-written document.
    let doc = r#"{
        "version": 1,
        "schemas": [],
        "components": [{
            "id": "c1",
            "schemaId": "schema-a",
            "schemaFileName": "a.xsd",
            "kind": "complexType",
            "name": "Rec",
            "namespace": "urn:test",
            "elementFields": [{
                "id": "f1",
                "path": "Rec/Item",
                "depth": 1,
                "name": "Item",
                "occurrence": "0..unbounded",
                "rawTypeOrRef": "xs:string",
                "resolution": {
                    "raw": "xs:string",
                    "namespace": "http://www.w3.org/2001/XMLSchema",
                    "local": "string",
                    "isBuiltin": true,
                    "targetIds": [],
                    "ambiguous": false
                }
            }],
            "attributeFields": [{
                "id": "a1",
                "path": "Rec/@code",
                "depth": 1,
                "name": "code",
                "use": "required",
                "rawTypeOrRef": "CodeType",
                "resolution": {
                    "raw": "CodeType",
                    "local": "CodeType",
                    "targetIds": [],
                    "unresolvedReason": "No matching component found"
                }
            }]
        }],
        "warnings": [{
            "code": "UNRESOLVED_REFERENCE",
            "message": "a.xsd:complexType:Rec could not resolve 'CodeType'",
            "schemaId": "schema-a",
            "componentId": "c1"
        }]
    }"#;

    let index = ingest::read_index(doc.as_bytes()).unwrap();
    let rec = &index.components[0];
    assert_eq!(rec.kind, ComponentKind::ComplexType);
    assert_eq!(rec.element_fields[0].occurrence, "0..unbounded");
    assert!(rec.element_fields[0].resolution.as_ref().unwrap().is_builtin);
    assert_eq!(rec.attribute_fields[0].usage, "required");
    assert!(rec.attribute_fields[0].resolution.as_ref().unwrap().is_unresolved());
    assert_eq!(
        index.warnings[0].code,
        xsdscope_core::model::WarningCode::UnresolvedReference
    );
}
