use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::component::Restriction;
use super::resolution::QNameResolution;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TreeNodeKind {
    Root,
    Element,
    Attribute,
}

/// Materialized display node of a direct or expanded tree.
///
/// `source_field_id` is empty for the root and for synthetic placeholder
/// nodes. `context_component_id` names the component whose direct tree the
/// node was copied from; it determines how the node's own references resolve
/// once cross-references are spliced in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    #[serde(default)]
    pub source_field_id: String,
    pub path: String,
    pub name: String,
    pub kind: TreeNodeKind,
    #[serde(default)]
    pub occurs: String,
    #[serde(default)]
    pub raw_type_or_ref: String,
    #[serde(default)]
    pub resolution: Option<QNameResolution>,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub restrictions: Restriction,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    pub context_component_id: String,
}

impl TreeNode {
    pub fn is_synthetic(&self) -> bool {
        self.kind != TreeNodeKind::Root && self.source_field_id.is_empty()
    }

    /// Last segment of the node path, `@`-prefixed for attributes.
    pub fn path_segment(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A rooted tree addressed two ways: by node id and by full path.
///
/// Every non-root node has exactly one parent. For direct trees the path
/// index is a bijection onto live node ids; for expanded trees spliced
/// children may shadow a sibling path and the index keeps the latest writer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TreeModel {
    pub root_id: String,
    pub nodes: IndexMap<String, TreeNode>,
    pub path_index: IndexMap<String, String>,
}

impl TreeModel {
    pub fn new(root: TreeNode) -> Self {
        let mut nodes = IndexMap::new();
        let mut path_index = IndexMap::new();
        let root_id = root.id.clone();
        path_index.insert(root.path.clone(), root_id.clone());
        nodes.insert(root_id.clone(), root);
        Self {
            root_id,
            nodes,
            path_index,
        }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.nodes.get(&self.root_id)
    }

    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn node_at_path(&self, path: &str) -> Option<&TreeNode> {
        self.path_index.get(path).and_then(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach a node under its `parent_id` and register its path.
    pub fn attach(&mut self, node: TreeNode) {
        if let Some(parent_id) = node.parent_id.as_deref()
            && let Some(parent) = self.nodes.get_mut(parent_id)
        {
            parent.children.push(node.id.clone());
        }
        self.path_index.insert(node.path.clone(), node.id.clone());
        self.nodes.insert(node.id.clone(), node);
    }

    /// Child ids of a node, empty when the id is unknown.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Depth of a node below the root, following parent links.
    pub fn depth_of(&self, id: &str) -> usize {
        let mut depth = 0;
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            match node.parent_id.as_deref() {
                Some(parent) => {
                    depth += 1;
                    current = self.nodes.get(parent);
                }
                None => break,
            }
        }
        depth
    }
}
