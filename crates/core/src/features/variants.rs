//! Ordinal labels for homonymous components.

use std::collections::HashMap;

use crate::model::{Component, ComponentKind, VariantMeta};

/// Assign stable ordinals to components sharing a (kind, lowercased name)
/// key. Group members are ordered by component id ascending; singletons get
/// `1 of 1`. Purely derived from the component set.
pub fn build_variant_map(components: &[Component]) -> HashMap<String, VariantMeta> {
    let mut groups: HashMap<(ComponentKind, String), Vec<&str>> = HashMap::new();
    for component in components {
        groups
            .entry((component.kind, component.name.to_lowercase()))
            .or_default()
            .push(&component.id);
    }

    let mut variants = HashMap::with_capacity(components.len());
    for ids in groups.into_values() {
        let mut ids = ids;
        ids.sort_unstable();
        let total = ids.len();
        for (i, id) in ids.into_iter().enumerate() {
            variants.insert(
                id.to_string(),
                VariantMeta {
                    position: i + 1,
                    total,
                },
            );
        }
    }
    variants
}
