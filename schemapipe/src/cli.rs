// schemapipe/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemapipe")]
#[command(about = "Rewrites schema names in a SQL script and streams it to psql", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the SQL script to load
    pub sql_file: Option<PathBuf>,

    /// Schema token to replace in the script
    #[arg(long, default_value = "mimiciii")]
    pub from_schema: String,

    /// Replacement schema token
    #[arg(long, default_value = "public")]
    pub to_schema: String,

    /// Target database name passed to the client
    #[arg(long, default_value = "mimicpeine")]
    pub dbname: String,
}
