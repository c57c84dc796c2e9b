use anyhow::anyhow;
use xsdscope_core::ExplorerSession;
use xsdscope_core::model::Component;

pub fn run(session: &ExplorerSession, id: &str) -> anyhow::Result<()> {
    let component: &Component = session
        .component(id)
        .ok_or_else(|| anyhow!("component '{id}' not found"))?;

    println!("{} {}", component.kind, component.name);
    println!("  id:        {}", component.id);
    println!("  schema:    {}", component.schema_file_name);
    if !component.namespace.is_empty() {
        println!("  namespace: {}", component.namespace);
    }
    if let Some(variant) = session.variant(id).filter(|v| !v.is_solo()) {
        println!("  {}", variant.label());
    }
    for doc in &component.docs {
        println!("  doc: {doc}");
    }

    if let Some(base) = &component.base_type {
        let target = base
            .resolution
            .as_ref()
            .and_then(|r| session.resolve_target(r, id))
            .unwrap_or("(unresolved)");
        println!("  base: {} -> {}", base.raw, target);
    }

    if !component.restrictions.is_empty() {
        let r = &component.restrictions;
        if !r.base.is_empty() {
            println!("  restriction base: {}", r.base);
        }
        for (facet, value) in &r.facets {
            println!("  facet: {facet} = {value}");
        }
    }
    if !component.enumerations.is_empty() {
        println!("  enumerations: {}", component.enumerations.join(", "));
    }

    if !component.references.is_empty() {
        println!("references:");
        for reference in &component.references {
            let status = if reference.resolution.is_builtin {
                "builtin".to_string()
            } else {
                match session.resolve_target(&reference.resolution, id) {
                    Some(target) if reference.resolution.ambiguous => {
                        format!("{target} (ambiguous)")
                    }
                    Some(target) => target.to_string(),
                    None => "unresolved".to_string(),
                }
            };
            println!(
                "  {}={} [{}] -> {}",
                reference.attr_name, reference.raw_value, reference.context, status
            );
        }
    }

    if !component.used_by.is_empty() {
        println!("used by:");
        for inbound in &component.used_by {
            println!(
                "  {} ({}={})",
                inbound.source_id, inbound.attr_name, inbound.raw_value
            );
        }
    }

    Ok(())
}
