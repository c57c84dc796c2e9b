//! Component search over the loaded catalog.

use regex::RegexBuilder;
use xsdscope_api::{ApiError, ApiResult};

use crate::model::{Component, ComponentKind};

/// Filter for component listings. An empty filter matches everything up to
/// the limit.
#[derive(Debug, Clone)]
pub struct ComponentFilter {
    /// Case-insensitive regex matched against component name and id.
    pub pattern: Option<String>,
    pub kinds: Vec<ComponentKind>,
    pub schema_id: Option<String>,
    pub limit: usize,
}

impl Default for ComponentFilter {
    fn default() -> Self {
        Self {
            pattern: None,
            kinds: Vec::new(),
            schema_id: None,
            limit: 50,
        }
    }
}

pub fn search<'a>(
    components: &'a [Component],
    filter: &ComponentFilter,
) -> ApiResult<Vec<&'a Component>> {
    let regex = match filter.pattern.as_deref() {
        Some(pattern) => Some(
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ApiError::InvalidArgument(format!("invalid pattern: {e}")))?,
        ),
        None => None,
    };

    let mut hits = Vec::new();
    for component in components {
        if !filter.kinds.is_empty() && !filter.kinds.contains(&component.kind) {
            continue;
        }
        if let Some(schema_id) = filter.schema_id.as_deref()
            && component.schema_id != schema_id
        {
            continue;
        }
        if let Some(regex) = &regex
            && !regex.is_match(&component.name)
            && !regex.is_match(&component.id)
        {
            continue;
        }
        hits.push(component);
        if hits.len() >= filter.limit {
            break;
        }
    }
    Ok(hits)
}
