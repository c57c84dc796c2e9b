//! Disambiguation of precomputed multi-candidate QName resolutions.

use crate::model::{Component, QNameResolution};

use super::ComponentLookup;

/// Pick the single best target component id for a resolution, seen from
/// `current`.
///
/// Builtin XSD types never resolve to a component; zero candidates means
/// unresolved. With several candidates the one declared in `current`'s own
/// schema wins (a type redefined locally shadows the imported one); otherwise
/// the first candidate is taken. The upstream candidate order is stable but
/// carries no ranking intent, so no further preference is applied.
/// `resolution.ambiguous` stays display metadata and never suppresses the
/// pick.
pub fn resolve_target<'r>(
    resolution: &'r QNameResolution,
    current: &Component,
    catalog: &impl ComponentLookup,
) -> Option<&'r str> {
    if resolution.is_builtin || resolution.target_ids.is_empty() {
        return None;
    }

    let same_schema = resolution.target_ids.iter().find(|id| {
        catalog
            .component(id)
            .is_some_and(|c| c.schema_id == current.schema_id)
    });

    same_schema
        .or_else(|| resolution.target_ids.first())
        .map(String::as_str)
}
