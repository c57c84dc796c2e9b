use anyhow::anyhow;
use tabled::{Table, Tabled};
use xsdscope_core::ExplorerSession;

#[derive(Tabled)]
struct WarningRow {
    #[tabled(rename = "CODE")]
    code: String,
    #[tabled(rename = "SCHEMA")]
    schema: String,
    #[tabled(rename = "MESSAGE")]
    message: String,
}

pub fn run(session: &ExplorerSession, code: Option<String>) -> anyhow::Result<()> {
    if let Some(code) = &code {
        let known = ["MISSING_DEPENDENCY", "UNRESOLVED_REFERENCE"];
        if !known.contains(&code.as_str()) {
            return Err(anyhow!("unknown warning code '{code}'"));
        }
    }

    let rows: Vec<WarningRow> = session
        .warnings()
        .iter()
        .filter(|w| {
            code.as_deref()
                .is_none_or(|c| w.code.as_str() == c)
        })
        .map(|w| WarningRow {
            code: w.code.as_str().to_string(),
            schema: w.schema_file_name.clone().unwrap_or_default(),
            message: w.message.clone(),
        })
        .collect();

    if rows.is_empty() {
        println!("no warnings");
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}
