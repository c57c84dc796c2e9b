//! Cross-reference expansion: splice the direct trees of resolved type
//! references into one browsable tree, cycle-safe and depth-bounded.

use std::collections::HashSet;

use crate::model::{Component, TreeModel, TreeNode};

use super::resolve::resolve_target;
use super::tree::{build_direct_tree, sort_children};
use super::{ComponentLookup, DirectTreeSource};

/// Levels below the expanded-tree root after which expansion stops silently.
/// Bounds the tree even when the component graph is cyclic; worst-case node
/// count is (branching factor)^8, so keep this small.
pub const MAX_EXPANSION_DEPTH: usize = 8;

/// Build the fully expanded tree for `root`.
///
/// Starts from a clone of the root's direct tree with every node tagged as
/// belonging to the root's context. For each node, children are expanded
/// first; then, if the node's type reference resolves (seen from the node's
/// current context component), the target's top-level children are cloned in
/// as new children and expanded in turn. A branch-local set of already
/// spliced component ids cuts cycles per lineage — the same component may
/// still appear on two non-overlapping branches.
pub fn build_expanded_tree(
    root: &Component,
    trees: &impl DirectTreeSource,
    catalog: &impl ComponentLookup,
) -> TreeModel {
    let mut tree = match trees.direct_tree(&root.id) {
        Some(direct) => (*direct).clone(),
        None => build_direct_tree(root),
    };
    for node in tree.nodes.values_mut() {
        node.context_component_id = root.id.clone();
    }

    // The root component counts as expanded at the root of its own tree.
    let mut branch: HashSet<String> = HashSet::from([root.id.clone()]);
    let root_id = tree.root_id.clone();
    expand_node(&mut tree, &root_id, trees, catalog, &mut branch, 0);

    sort_children(&mut tree);
    tree
}

fn expand_node(
    tree: &mut TreeModel,
    node_id: &str,
    trees: &impl DirectTreeSource,
    catalog: &impl ComponentLookup,
    branch: &mut HashSet<String>,
    depth: usize,
) {
    if depth >= MAX_EXPANSION_DEPTH {
        return;
    }

    // Depth-first over the children that exist right now, so references
    // nested under earlier insertions get expanded before this node splices.
    let children = tree.children_of(node_id).to_vec();
    for child_id in children {
        expand_node(tree, &child_id, trees, catalog, branch, depth + 1);
    }

    let Some(node) = tree.node(node_id) else {
        return;
    };
    let Some(resolution) = node.resolution.clone() else {
        return;
    };
    if resolution.is_builtin {
        return;
    }
    let context_id = node.context_component_id.clone();
    let Some(current) = catalog.component(&context_id) else {
        return;
    };
    let Some(target_id) = resolve_target(&resolution, current, catalog).map(str::to_string)
    else {
        return;
    };
    if catalog.component(&target_id).is_none() {
        return;
    }
    if branch.contains(&target_id) {
        tracing::trace!(node = node_id, target = %target_id, "cycle cut");
        return;
    }
    // Target resolved but its tree is absent from the cache: skip the splice.
    let Some(target_tree) = trees.direct_tree(&target_id) else {
        return;
    };

    branch.insert(target_id.clone());
    let top_level = target_tree.children_of(&target_tree.root_id).to_vec();
    for source_id in top_level {
        if let Some(clone_id) =
            clone_subtree(tree, &target_tree, &source_id, node_id, &target_id)
        {
            expand_node(tree, &clone_id, trees, catalog, branch, depth + 1);
        }
    }
    branch.remove(&target_id);
}

/// Clone a subtree of `source_tree` under `parent_id`, retagging every clone
/// with `context_id` and regenerating ids and paths for the host tree.
fn clone_subtree(
    tree: &mut TreeModel,
    source_tree: &TreeModel,
    source_id: &str,
    parent_id: &str,
    context_id: &str,
) -> Option<String> {
    let source = source_tree.node(source_id)?;
    let parent_path = tree.node(parent_id)?.path.clone();
    let path = format!("{}/{}", parent_path, source.path_segment());
    let id = fresh_clone_id(tree, parent_id, context_id, source_id);

    let clone = TreeNode {
        id: id.clone(),
        source_field_id: source.source_field_id.clone(),
        path: path.clone(),
        name: source.name.clone(),
        kind: source.kind,
        occurs: source.occurs.clone(),
        raw_type_or_ref: source.raw_type_or_ref.clone(),
        resolution: source.resolution.clone(),
        documentation: source.documentation.clone(),
        restrictions: source.restrictions.clone(),
        parent_id: Some(parent_id.to_string()),
        children: Vec::new(),
        context_component_id: context_id.to_string(),
    };
    tree.attach(clone);

    for child_id in source_tree.children_of(source_id).to_vec() {
        clone_subtree(tree, source_tree, &child_id, &id, context_id);
    }
    Some(id)
}

/// Deterministic clone id derived from (parent id, context id, source id),
/// with a numeric suffix on collision so expanded trees are reproducible
/// across runs given the same input.
fn fresh_clone_id(
    tree: &TreeModel,
    parent_id: &str,
    context_id: &str,
    source_id: &str,
) -> String {
    let base = format!("{parent_id}+{context_id}+{source_id}");
    if !tree.nodes.contains_key(&base) {
        return base;
    }
    let mut suffix = 2usize;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !tree.nodes.contains_key(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
