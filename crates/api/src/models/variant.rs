use serde::{Deserialize, Serialize};

/// Ordinal label for components sharing a (kind, lowercased name) key across
/// schemas, so homonymous types can be told apart in listings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VariantMeta {
    /// 1-based rank inside the group, ordered by component id ascending.
    pub position: usize,
    pub total: usize,
}

impl VariantMeta {
    pub fn solo() -> Self {
        Self {
            position: 1,
            total: 1,
        }
    }

    pub fn is_solo(&self) -> bool {
        self.total == 1
    }

    /// Display label, e.g. `variant 2 of 3`.
    pub fn label(&self) -> String {
        format!("variant {} of {}", self.position, self.total)
    }
}
