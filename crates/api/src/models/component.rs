use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::resolution::QNameResolution;

/// The six global XSD component kinds the catalog tracks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Element,
    ComplexType,
    SimpleType,
    Attribute,
    AttributeGroup,
    Group,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Element => "element",
            ComponentKind::ComplexType => "complexType",
            ComponentKind::SimpleType => "simpleType",
            ComponentKind::Attribute => "attribute",
            ComponentKind::AttributeGroup => "attributeGroup",
            ComponentKind::Group => "group",
        }
    }

    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Element,
        ComponentKind::ComplexType,
        ComponentKind::SimpleType,
        ComponentKind::Attribute,
        ComponentKind::AttributeGroup,
        ComponentKind::Group,
    ];
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown component kind '{s}'"))
    }
}

/// Restriction facets attached to a component or field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub enumerations: Vec<String>,
    #[serde(default)]
    pub facets: IndexMap<String, String>,
}

impl Restriction {
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.enumerations.is_empty() && self.facets.is_empty()
    }
}

/// Base type reference (`extension`/`restriction` base) of a component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BaseType {
    pub raw: String,
    #[serde(default)]
    pub resolution: Option<QNameResolution>,
}

/// One element declaration reachable inside a component, flattened to a
/// slash-delimited path rooted at the component name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ElementField {
    pub id: String,
    pub path: String,
    #[serde(default)]
    pub depth: u32,
    pub name: String,
    #[serde(default)]
    pub occurrence: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub raw_type_or_ref: String,
    #[serde(default)]
    pub resolution: Option<QNameResolution>,
    #[serde(default)]
    pub restrictions: Restriction,
}

/// One attribute declaration reachable inside a component. Attribute path
/// segments carry an `@` prefix (`Envelope/@version`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeField {
    pub id: String,
    pub path: String,
    #[serde(default)]
    pub depth: u32,
    pub name: String,
    #[serde(default, rename = "use")]
    pub usage: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub raw_type_or_ref: String,
    #[serde(default)]
    pub resolution: Option<QNameResolution>,
    #[serde(default)]
    pub restrictions: Restriction,
}

/// Outbound QName use recorded on the component that makes it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub attr_name: String,
    pub raw_value: String,
    #[serde(default)]
    pub context: String,
    pub resolution: QNameResolution,
}

/// Reverse edge: who points at this component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InboundReference {
    pub source_id: String,
    pub attr_name: String,
    pub raw_value: String,
    #[serde(default)]
    pub context: String,
}

/// A named global schema object. Created once by the indexer, immutable
/// thereafter; identity is the id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub schema_id: String,
    #[serde(default)]
    pub schema_file_name: String,
    pub kind: ComponentKind,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub docs: Vec<String>,
    #[serde(default)]
    pub restrictions: Restriction,
    #[serde(default)]
    pub enumerations: Vec<String>,
    #[serde(default)]
    pub base_type: Option<BaseType>,
    #[serde(default)]
    pub element_fields: Vec<ElementField>,
    #[serde(default)]
    pub attribute_fields: Vec<AttributeField>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub used_by: Vec<InboundReference>,
}

/// Discriminant for the two field variants once they flow through the tree
/// builder as one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Element,
    Attribute,
}

/// Borrowed, variant-erased view of a field. Element and attribute fields
/// differ only in their occurrence marker (`1..n` vs `required`/`optional`),
/// which collapses into one display string here.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub id: &'a str,
    pub path: &'a str,
    pub depth: u32,
    pub name: &'a str,
    pub kind: FieldKind,
    pub occurs: &'a str,
    pub documentation: &'a str,
    pub raw_type_or_ref: &'a str,
    pub resolution: Option<&'a QNameResolution>,
    pub restrictions: &'a Restriction,
}

impl Component {
    /// All fields in tree-builder input order: element fields first, then
    /// attribute fields.
    pub fn fields(&self) -> impl Iterator<Item = FieldView<'_>> {
        let elements = self.element_fields.iter().map(|f| FieldView {
            id: &f.id,
            path: &f.path,
            depth: f.depth,
            name: &f.name,
            kind: FieldKind::Element,
            occurs: &f.occurrence,
            documentation: &f.documentation,
            raw_type_or_ref: &f.raw_type_or_ref,
            resolution: f.resolution.as_ref(),
            restrictions: &f.restrictions,
        });
        let attributes = self.attribute_fields.iter().map(|f| FieldView {
            id: &f.id,
            path: &f.path,
            depth: f.depth,
            name: &f.name,
            kind: FieldKind::Attribute,
            occurs: &f.usage,
            documentation: &f.documentation,
            raw_type_or_ref: &f.raw_type_or_ref,
            resolution: f.resolution.as_ref(),
            restrictions: &f.restrictions,
        });
        elements.chain(attributes)
    }

    pub fn field_count(&self) -> usize {
        self.element_fields.len() + self.attribute_fields.len()
    }
}
