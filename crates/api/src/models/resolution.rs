use serde::{Deserialize, Serialize};

/// Outcome of resolving one raw QName against the cross-schema catalog.
///
/// Produced by the external indexer; the engine only consumes it. `ambiguous`
/// is true iff more than one candidate existed and is display metadata only —
/// it never suppresses resolution. Builtin XSD types (`xs:string`, ...) carry
/// `is_builtin` and never resolve to a component id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QNameResolution {
    pub raw: String,
    #[serde(default)]
    pub namespace: String,
    pub local: String,
    #[serde(default)]
    pub is_builtin: bool,
    #[serde(default)]
    pub target_ids: Vec<String>,
    #[serde(default)]
    pub ambiguous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unresolved_reason: Option<String>,
}

impl QNameResolution {
    /// A resolution that names a component but matched nothing in the corpus.
    pub fn is_unresolved(&self) -> bool {
        !self.is_builtin && self.target_ids.is_empty()
    }
}
