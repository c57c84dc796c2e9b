//! The process-wide read-only browsing session over one loaded index.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use xsdscope_api::{ApiError, ApiResult};

use crate::features::expand::build_expanded_tree;
use crate::features::query::{self, ComponentFilter};
use crate::features::resolve;
use crate::features::tree::build_direct_tree;
use crate::features::variants::build_variant_map;
use crate::features::{ComponentLookup, DirectTreeSource};
use crate::model::{
    Component, QNameResolution, Schema, SchemaIndex, TreeModel, VariantMeta, Warning,
};

/// Immutable session over a loaded [`SchemaIndex`].
///
/// Direct trees are pure functions of their component and are computed once
/// per session; expanded trees are root-relative (context tagging depends on
/// the chosen root) and are recomputed per request.
pub struct ExplorerSession {
    index: Arc<SchemaIndex>,
    components_by_id: HashMap<String, usize>,
    schemas_by_id: HashMap<String, usize>,
    variants: HashMap<String, VariantMeta>,
    direct_trees: DashMap<String, Arc<TreeModel>>,
}

impl ExplorerSession {
    pub fn new(index: SchemaIndex) -> Self {
        let components_by_id = index
            .components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        let schemas_by_id = index
            .schemas
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let variants = build_variant_map(&index.components);
        tracing::debug!(
            schemas = index.schemas.len(),
            components = index.components.len(),
            "session opened"
        );
        Self {
            index: Arc::new(index),
            components_by_id,
            schemas_by_id,
            variants,
            direct_trees: DashMap::new(),
        }
    }

    pub fn index(&self) -> &SchemaIndex {
        &self.index
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.index.schemas
    }

    pub fn components(&self) -> &[Component] {
        &self.index.components
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.index.warnings
    }

    pub fn schema(&self, id: &str) -> Option<&Schema> {
        self.schemas_by_id.get(id).map(|&i| &self.index.schemas[i])
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components_by_id
            .get(id)
            .map(|&i| &self.index.components[i])
    }

    pub fn variant(&self, component_id: &str) -> Option<VariantMeta> {
        self.variants.get(component_id).copied()
    }

    /// The component's own tree, no cross-references followed. Memoized.
    pub fn direct_tree(&self, component_id: &str) -> ApiResult<Arc<TreeModel>> {
        if let Some(tree) = self.direct_trees.get(component_id) {
            return Ok(tree.clone());
        }
        let component = self
            .component(component_id)
            .ok_or_else(|| ApiError::NotFound(format!("component '{component_id}'")))?;
        let tree = Arc::new(build_direct_tree(component));
        self.direct_trees
            .insert(component_id.to_string(), tree.clone());
        Ok(tree)
    }

    /// The fully unrolled tree rooted at `component_id`. Recomputed per call;
    /// not shareable across different roots.
    pub fn expanded_tree(&self, component_id: &str) -> ApiResult<TreeModel> {
        let component = self
            .component(component_id)
            .ok_or_else(|| ApiError::NotFound(format!("component '{component_id}'")))?;
        Ok(build_expanded_tree(component, self, self))
    }

    /// Disambiguate a precomputed resolution as seen from `current_id`.
    pub fn resolve_target<'r>(
        &self,
        resolution: &'r QNameResolution,
        current_id: &str,
    ) -> Option<&'r str> {
        let current = self.component(current_id)?;
        resolve::resolve_target(resolution, current, self)
    }

    pub fn search(&self, filter: &ComponentFilter) -> ApiResult<Vec<&Component>> {
        query::search(&self.index.components, filter)
    }
}

impl ComponentLookup for ExplorerSession {
    fn component(&self, id: &str) -> Option<&Component> {
        ExplorerSession::component(self, id)
    }
}

impl DirectTreeSource for ExplorerSession {
    fn direct_tree(&self, component_id: &str) -> Option<Arc<TreeModel>> {
        ExplorerSession::direct_tree(self, component_id).ok()
    }
}
