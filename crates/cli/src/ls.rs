use anyhow::anyhow;
use tabled::{Table, Tabled};
use xsdscope_core::ExplorerSession;
use xsdscope_core::features::query::ComponentFilter;
use xsdscope_core::model::ComponentKind;

#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "SCHEMA")]
    schema: String,
    #[tabled(rename = "FIELDS")]
    fields: usize,
    #[tabled(rename = "VARIANT")]
    variant: String,
}

pub fn run(
    session: &ExplorerSession,
    pattern: Option<String>,
    kind: Vec<String>,
    schema: Option<String>,
    limit: usize,
) -> anyhow::Result<()> {
    let kinds = kind
        .iter()
        .map(|k| {
            k.parse::<ComponentKind>()
                .map_err(|e| anyhow!("--kind {k}: {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let filter = ComponentFilter {
        pattern,
        kinds,
        schema_id: schema,
        limit,
    };
    let hits = session.search(&filter)?;

    let rows: Vec<ComponentRow> = hits
        .iter()
        .map(|c| ComponentRow {
            id: c.id.clone(),
            kind: c.kind.to_string(),
            name: c.name.clone(),
            schema: c.schema_file_name.clone(),
            fields: c.field_count(),
            variant: session
                .variant(&c.id)
                .filter(|v| !v.is_solo())
                .map(|v| format!("{}/{}", v.position, v.total))
                .unwrap_or_default(),
        })
        .collect();

    if rows.is_empty() {
        println!("no components matched");
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}
