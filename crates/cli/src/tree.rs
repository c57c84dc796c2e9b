use anyhow::anyhow;
use xsdscope_core::ExplorerSession;
use xsdscope_core::model::{TreeModel, TreeNode, TreeNodeKind};

pub fn run(session: &ExplorerSession, id: &str, expand: bool, json: bool) -> anyhow::Result<()> {
    if session.component(id).is_none() {
        return Err(anyhow!("component '{id}' not found"));
    }

    let tree: TreeModel = if expand {
        session.expanded_tree(id)?
    } else {
        (*session.direct_tree(id)?).clone()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let mut out = String::new();
    render(&tree, &tree.root_id, 0, expand, &mut out);
    print!("{out}");
    Ok(())
}

fn render(tree: &TreeModel, node_id: &str, depth: usize, expanded: bool, out: &mut String) {
    let Some(node) = tree.node(node_id) else {
        return;
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str(&label(node));
    if expanded && node.context_component_id != tree.root_id && depth > 0 {
        out.push_str(&format!("  <{}>", node.context_component_id));
    }
    out.push('\n');
    for child in &node.children {
        render(tree, child, depth + 1, expanded, out);
    }
}

fn label(node: &TreeNode) -> String {
    let mut label = match node.kind {
        TreeNodeKind::Attribute => format!("@{}", node.name),
        _ => node.name.clone(),
    };
    if !node.occurs.is_empty() {
        label.push_str(&format!(" [{}]", node.occurs));
    }
    if !node.raw_type_or_ref.is_empty() {
        label.push_str(&format!(" : {}", node.raw_type_or_ref));
    }
    if let Some(resolution) = &node.resolution {
        if resolution.is_unresolved() {
            label.push_str("  (unresolved)");
        } else if resolution.ambiguous {
            label.push_str("  (ambiguous)");
        }
    }
    label
}
