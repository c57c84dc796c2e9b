mod ls;
mod schemas;
mod show;
mod tree;
mod warnings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xsdscope_core::ExplorerSession;

#[derive(Parser)]
#[command(
    name = "xsdscope",
    version,
    about = "Browse a corpus of XSD files as one cross-file component catalog",
    long_about = "Xsdscope loads the JSON index produced by the schema indexer and lets you \
                  list schemas and components, inspect a component's documentation and \
                  references, and render its field tree — either the component's own direct \
                  tree or the fully expanded tree with every resolvable type reference \
                  recursively inlined."
)]
pub struct Cli {
    /// Path to the index JSON document produced by the indexer
    #[arg(short, long, value_name = "INDEX_JSON", default_value = "xsd-index.json")]
    pub index: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the schema files of the loaded index
    Schemas,
    /// List components, optionally filtered by pattern, kind, or schema
    Ls {
        /// Case-insensitive regex matched against component name and id
        #[arg(value_name = "PATTERN")]
        pattern: Option<String>,
        /// Restrict to component kinds (element, complexType, simpleType,
        /// attribute, attributeGroup, group); repeatable
        #[arg(long, value_name = "KIND")]
        kind: Vec<String>,
        /// Restrict to a schema id
        #[arg(long, value_name = "SCHEMA_ID")]
        schema: Option<String>,
        /// Maximum number of rows
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Show one component: documentation, restrictions, references, variants
    Show {
        #[arg(value_name = "COMPONENT_ID")]
        id: String,
    },
    /// Render a component's field tree
    Tree {
        #[arg(value_name = "COMPONENT_ID")]
        id: String,
        /// Recursively inline the trees of resolvable type references
        #[arg(long)]
        expand: bool,
        /// Emit the tree model as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List indexer warnings
    Warnings {
        /// Restrict to one warning code (MISSING_DEPENDENCY, UNRESOLVED_REFERENCE)
        #[arg(long, value_name = "CODE")]
        code: Option<String>,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = xsdscope_core::logging::init_logging("cli", false);

    let index = xsdscope_core::ingest::load_index(&cli.index)?;
    tracing::info!(
        schemas = index.schemas.len(),
        components = index.components.len(),
        "index ready"
    );
    let session = ExplorerSession::new(index);

    match cli.command {
        Commands::Schemas => schemas::run(&session),
        Commands::Ls {
            pattern,
            kind,
            schema,
            limit,
        } => ls::run(&session, pattern, kind, schema, limit),
        Commands::Show { id } => show::run(&session, &id),
        Commands::Tree { id, expand, json } => tree::run(&session, &id, expand, json),
        Commands::Warnings { code } => warnings::run(&session, code),
    }
}
