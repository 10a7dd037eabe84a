// schemapipe-core/src/ports/sink.rs

// This file defines what the application needs, without knowing how it's done.
// The sink is anything that consumes a SQL script and reports how the
// consumer exited.

use crate::error::SchemaPipeError;
use std::process::ExitStatus;

pub trait SqlSink: Send + Sync {
    /// Feed a full SQL script to the sink and wait for it to finish.
    fn execute_script(&self, sql: &str) -> Result<ExitStatus, SchemaPipeError>;
}
