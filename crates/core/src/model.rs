// Re-export the shared API model so engine code and consumers use one set of
// types.
pub use xsdscope_api::models::{
    AttributeField, BaseType, Component, ComponentKind, Dependency, ElementField, FieldKind,
    FieldView, InboundReference, IndexSummary, QNameResolution, Reference, Restriction, Schema,
    SchemaIndex, TreeModel, TreeNode, TreeNodeKind, VariantMeta, Warning, WarningCode,
};
