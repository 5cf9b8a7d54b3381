use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use openapi_proto_gen::error::Error;

/// Generate a Protocol Buffer v3 schema from an OpenAPI definition.
///
/// Reads a Swagger 2.0 / OpenAPI document (YAML or JSON) and writes an
/// equivalent .proto schema to a file or stdout.
#[derive(Parser)]
#[command(name = "openapi-proto-gen", version, about)]
struct Cli {
    /// Path to the OpenAPI definition (YAML, or JSON with a .json extension).
    #[arg(long, short)]
    spec: PathBuf,

    /// Output .proto file. Writes to stdout when omitted.
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Suppress non-error output.
    #[arg(long, short)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

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

fn run(cli: Cli) -> openapi_proto_gen::error::Result<()> {
    if !cli.quiet {
        eprintln!("Loading OpenAPI definition from {}", cli.spec.display());
    }
    let api = openapi_proto_gen::api::load_definition(&cli.spec)?;
    if !cli.quiet {
        eprintln!(
            "Loaded '{}': {} paths, {} definitions",
            api.info.title,
            api.paths.len(),
            api.definitions.len()
        );
    }

    let proto = openapi_proto_gen::codegen::generate(&api)?;

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &proto).map_err(|e| Error::Write {
                path: path.clone(),
                source: e,
            })?;
            if !cli.quiet {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => {
            std::io::stdout().write_all(&proto).map_err(|e| Error::Write {
                path: PathBuf::from("<stdout>"),
                source: e,
            })?;
        }
    }

    Ok(())
}
