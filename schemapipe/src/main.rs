// schemapipe/src/main.rs

mod cli;

use clap::Parser;
use std::path::PathBuf;

use cli::Cli;

// Infrastructure (Adapters)
use schemapipe_core::infrastructure::adapters::psql::PsqlConnector;

// Domain (Rewrite rule)
use schemapipe_core::domain::rewrite::SchemaRewrite;

// Application (Use Cases)
use schemapipe_core::application::load_script;

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug schemapipe ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let start = std::time::Instant::now();

    // The usage check is advisory only: on a missing argument the load still
    // runs with an empty path and fails at the read step, so the error the
    // user sees is the same one the underlying tools would report.
    let sql_file = match cli.sql_file {
        Some(path) => path,
        None => {
            println!("Usage: schemapipe <path-to-sql-file>");
            PathBuf::new()
        }
    };

    let rewrite = SchemaRewrite::new(cli.from_schema, cli.to_schema);

    // The '?' propagates automatically InfrastructureError -> anyhow::Error
    let connector = PsqlConnector::new(&cli.dbname)?;

    match load_script(&connector, &rewrite, &sql_file) {
        Ok(status) if status.success() => {
            tracing::debug!(elapsed = ?start.elapsed(), "Script loaded");
            Ok(())
        }
        Ok(status) => {
            eprintln!("❌ Database client exited with {}", status);
            // Exit with the client's code for CI/CD
            std::process::exit(status.code().unwrap_or(1));
        }
        Err(e) => {
            eprintln!("💥 Load failed: {}", e);
            std::process::exit(1);
        }
    }
}
