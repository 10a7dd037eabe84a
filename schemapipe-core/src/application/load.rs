// schemapipe-core/src/application/load.rs

use crate::domain::rewrite::SchemaRewrite;
use crate::error::SchemaPipeError;
use crate::infrastructure::fs::read_script;
use crate::ports::sink::SqlSink;
use std::path::Path;
use std::process::ExitStatus;

/// USE CASE: load one SQL script into the target database.
///
/// Reads the script, applies the schema rewrite, and streams the result to
/// the sink without any further processing. The sink's exit status is
/// returned untouched so the caller can propagate it.
pub fn load_script(
    sink: &dyn SqlSink,
    rewrite: &SchemaRewrite,
    path: &Path,
) -> Result<ExitStatus, SchemaPipeError> {
    let raw = read_script(path)?;
    tracing::info!(path = ?path, bytes = raw.len(), "Loaded SQL script");

    let sql = rewrite.apply(&raw)?;
    tracing::debug!(from = %rewrite.from, to = %rewrite.to, "Applied schema rewrite");

    sink.execute_script(&sql)
}
