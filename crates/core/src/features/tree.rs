//! Direct tree materialization: one component's flat, path-addressed field
//! list becomes a rooted tree local to that component. No cross-references
//! are followed here; that is the expansion engine's job.

use crate::model::{Component, FieldKind, FieldView, TreeModel, TreeNode, TreeNodeKind};

/// Build the direct tree of a component.
///
/// Pure function of the component: identical input yields an identical tree
/// (same ids, same edges, same child order). Node ids are the field ids for
/// real nodes, the component id for the root, and a `component:synthetic:path`
/// scheme for placeholder nodes filling multi-segment path gaps.
pub fn build_direct_tree(component: &Component) -> TreeModel {
    let root = TreeNode {
        id: component.id.clone(),
        source_field_id: String::new(),
        path: component.name.clone(),
        name: component.name.clone(),
        kind: TreeNodeKind::Root,
        occurs: String::new(),
        raw_type_or_ref: component
            .base_type
            .as_ref()
            .map(|b| b.raw.clone())
            .unwrap_or_default(),
        resolution: None,
        documentation: component.docs.join(" "),
        restrictions: component.restrictions.clone(),
        parent_id: None,
        children: Vec::new(),
        context_component_id: component.id.clone(),
    };
    let mut tree = TreeModel::new(root);

    // Parent paths come first: every field's ancestor path has either been
    // visited already or gets synthesized below.
    let mut fields: Vec<FieldView<'_>> = component.fields().collect();
    fields.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.path.cmp(b.path)));

    for field in fields {
        attach_field(&mut tree, component, &field);
    }

    sort_children(&mut tree);
    tree
}

fn attach_field(tree: &mut TreeModel, component: &Component, field: &FieldView<'_>) {
    let root_path = component.name.as_str();
    let full_path = qualify_path(root_path, field.path, field.name);

    let Some(remainder) = full_path
        .strip_prefix(root_path)
        .and_then(|r| r.strip_prefix('/'))
        .map(str::to_string)
    else {
        return;
    };
    if remainder.is_empty() {
        return;
    }

    let mut parent_id = tree.root_id.clone();
    let mut cumulative = root_path.to_string();
    let segments: Vec<&str> = remainder.split('/').collect();
    let last = segments.len() - 1;

    for (i, segment) in segments.iter().enumerate() {
        cumulative.push('/');
        cumulative.push_str(segment);

        if i < last {
            // Intermediate segment: reuse the occupant or synthesize a
            // placeholder inferred from the `@` prefix convention.
            match tree.path_index.get(&cumulative) {
                Some(existing) => parent_id = existing.clone(),
                None => {
                    let placeholder =
                        synthetic_node(component, segment, &cumulative, &parent_id);
                    parent_id = placeholder.id.clone();
                    tree.attach(placeholder);
                }
            }
            continue;
        }

        let node = TreeNode {
            id: field.id.to_string(),
            source_field_id: field.id.to_string(),
            path: cumulative.clone(),
            name: field.name.to_string(),
            kind: match field.kind {
                FieldKind::Element => TreeNodeKind::Element,
                FieldKind::Attribute => TreeNodeKind::Attribute,
            },
            occurs: field.occurs.to_string(),
            raw_type_or_ref: field.raw_type_or_ref.to_string(),
            resolution: field.resolution.cloned(),
            documentation: field.documentation.to_string(),
            restrictions: field.restrictions.clone(),
            parent_id: Some(parent_id.clone()),
            children: Vec::new(),
            context_component_id: component.id.clone(),
        };

        match tree.path_index.get(&cumulative).cloned() {
            Some(occupant_id) => replace_occupant(tree, &occupant_id, node),
            None => tree.attach(node),
        }
    }
}

/// Prefix a field path with the component root name when the indexer seeded
/// it without one (group and attribute-group components). A degenerate path
/// equal to the root name itself is attached under the root by field name.
fn qualify_path(root_path: &str, field_path: &str, field_name: &str) -> String {
    if field_path == root_path {
        return format!("{root_path}/{field_name}");
    }
    if field_path.starts_with(root_path)
        && field_path[root_path.len()..].starts_with('/')
    {
        return field_path.to_string();
    }
    format!("{root_path}/{field_path}")
}

fn synthetic_node(
    component: &Component,
    segment: &str,
    path: &str,
    parent_id: &str,
) -> TreeNode {
    let kind = if segment.starts_with('@') {
        TreeNodeKind::Attribute
    } else {
        TreeNodeKind::Element
    };
    TreeNode {
        id: format!("{}:synthetic:{}", component.id, path),
        source_field_id: String::new(),
        path: path.to_string(),
        name: segment.trim_start_matches('@').to_string(),
        kind,
        occurs: String::new(),
        raw_type_or_ref: String::new(),
        resolution: None,
        documentation: String::new(),
        restrictions: Default::default(),
        parent_id: Some(parent_id.to_string()),
        children: Vec::new(),
        context_component_id: component.id.clone(),
    }
}

/// Swap a path occupant (normally a synthetic placeholder) for the real field
/// node: the occupant's accumulated children are reparented onto the
/// replacement, the occupant is removed, and the path mapping is updated. The
/// replacement takes the occupant's slot in its parent's child list.
fn replace_occupant(tree: &mut TreeModel, occupant_id: &str, mut node: TreeNode) {
    let Some(occupant) = tree.nodes.shift_remove(occupant_id) else {
        tree.attach(node);
        return;
    };

    node.parent_id = occupant.parent_id.clone();
    node.children = occupant.children;
    for child_id in node.children.clone() {
        if let Some(child) = tree.nodes.get_mut(&child_id) {
            child.parent_id = Some(node.id.clone());
        }
    }

    if let Some(parent_id) = occupant.parent_id.as_deref()
        && let Some(parent) = tree.nodes.get_mut(parent_id)
    {
        match parent.children.iter().position(|c| c == occupant_id) {
            Some(slot) => parent.children[slot] = node.id.clone(),
            None => parent.children.push(node.id.clone()),
        }
    }

    tree.path_index.insert(node.path.clone(), node.id.clone());
    tree.nodes.insert(node.id.clone(), node);
}

/// Sort every node's children for stable presentation: elements before
/// attributes, then case-sensitive name ascending. Shared with the expansion
/// engine, which re-sorts after splicing.
pub fn sort_children(tree: &mut TreeModel) {
    let ids: Vec<String> = tree.nodes.keys().cloned().collect();
    for id in ids {
        let mut children = tree.children_of(&id).to_vec();
        children.sort_by(|a, b| {
            let ka = tree.node(a).map(child_rank).unwrap_or(0);
            let kb = tree.node(b).map(child_rank).unwrap_or(0);
            ka.cmp(&kb).then_with(|| {
                let na = tree.node(a).map(|n| n.name.as_str()).unwrap_or("");
                let nb = tree.node(b).map(|n| n.name.as_str()).unwrap_or("");
                na.cmp(nb)
            })
        });
        if let Some(node) = tree.nodes.get_mut(&id) {
            node.children = children;
        }
    }
}

fn child_rank(node: &TreeNode) -> u8 {
    match node.kind {
        TreeNodeKind::Attribute => 1,
        _ => 0,
    }
}
