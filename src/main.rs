use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use php_enum_gen::config::{DEFAULT_INPUT, GeneratorConfig};

/// Generate PHP enum classes from protoc-gen-doc JSON output.
///
/// Reads the JSON document written by protoc-gen-doc and writes one PHP
/// class per enum under ./src, mirroring the protobuf package hierarchy.
#[derive(Parser)]
#[command(name = "php-enum-gen", version, about)]
struct Cli {
    /// Path of the protoc-gen-doc JSON document.
    #[arg(long, default_value = DEFAULT_INPUT, env = "PHP_ENUM_GEN_DOC")]
    doc: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");

        // Print cause chain.
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }

        process::exit(1);
    }
}

fn run(cli: Cli) -> php_enum_gen::error::Result<()> {
    let config = GeneratorConfig::default().with_input(cli.doc);

    println!("use doc file: [{}]", config.input.display());

    let document = php_enum_gen::schema::load_document(&config.input)?;
    tracing::debug!(files = document.files.len(), "loaded schema document");

    php_enum_gen::codegen::generate_with(&document, &config, |class| {
        println!("[{}] was created.", class.identity.qualified_name);
    })?;

    Ok(())
}
