use std::sync::Arc;

use crate::model::{Component, TreeModel};

pub mod expand;
pub mod query;
pub mod resolve;
pub mod tree;
pub mod variants;

/// Lookup of components by id. Abstracted so the feature engines work against
/// both the full session and small hand-built catalogs in tests.
pub trait ComponentLookup {
    fn component(&self, id: &str) -> Option<&Component>;
}

/// Supplier of per-component direct trees during expansion. A missing tree is
/// not an error; the expansion engine skips the splice for that node.
pub trait DirectTreeSource {
    fn direct_tree(&self, component_id: &str) -> Option<Arc<TreeModel>>;
}

impl ComponentLookup for [Component] {
    fn component(&self, id: &str) -> Option<&Component> {
        self.iter().find(|c| c.id == id)
    }
}

impl ComponentLookup for Vec<Component> {
    fn component(&self, id: &str) -> Option<&Component> {
        self.as_slice().component(id)
    }
}

impl DirectTreeSource for std::collections::HashMap<String, Arc<TreeModel>> {
    fn direct_tree(&self, component_id: &str) -> Option<Arc<TreeModel>> {
        self.get(component_id).cloned()
    }
}
