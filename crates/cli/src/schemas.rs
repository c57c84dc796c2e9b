use tabled::{Table, Tabled};
use xsdscope_core::ExplorerSession;

#[derive(Tabled)]
struct SchemaRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "FILE")]
    file: String,
    #[tabled(rename = "NAMESPACE")]
    namespace: String,
    #[tabled(rename = "COMPONENTS")]
    components: usize,
    #[tabled(rename = "MISSING DEPS")]
    missing_deps: usize,
}

pub fn run(session: &ExplorerSession) -> anyhow::Result<()> {
    let rows: Vec<SchemaRow> = session
        .schemas()
        .iter()
        .map(|s| SchemaRow {
            id: s.id.clone(),
            file: s.file_name.clone(),
            namespace: s.target_namespace.clone(),
            components: s.component_ids.len(),
            missing_deps: s.missing_dependencies().count(),
        })
        .collect();

    println!("{}", Table::new(rows));
    println!(
        "{} schemas, {} components, {} warnings",
        session.schemas().len(),
        session.components().len(),
        session.warnings().len()
    );
    Ok(())
}
