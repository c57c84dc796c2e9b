pub mod component;
pub mod index;
pub mod resolution;
pub mod schema;
pub mod tree;
pub mod variant;

pub use component::{
    AttributeField, BaseType, Component, ComponentKind, ElementField, FieldKind, FieldView,
    InboundReference, Reference, Restriction,
};
pub use index::{IndexSummary, SchemaIndex, Warning, WarningCode};
pub use resolution::QNameResolution;
pub use schema::{Dependency, Schema};
pub use tree::{TreeModel, TreeNode, TreeNodeKind};
pub use variant::VariantMeta;
