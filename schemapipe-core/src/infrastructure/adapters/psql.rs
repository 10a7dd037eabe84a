// schemapipe-core/src/infrastructure/adapters/psql.rs

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

// Hexagonal imports
use crate::error::SchemaPipeError;
use crate::infrastructure::error::{ClientError, InfrastructureError};
use crate::ports::sink::SqlSink;

/// Adapter around the `psql` command-line client.
///
/// Connection parameters and authentication stay implicit: the client picks
/// them up from its own environment, exactly as a manual `psql <dbname>`
/// invocation would. Only the database name is passed.
pub struct PsqlConnector {
    program: PathBuf,
    dbname: String,
}

impl PsqlConnector {
    /// Locate `psql` on PATH and bind the connector to a database name.
    pub fn new(dbname: &str) -> Result<Self, InfrastructureError> {
        let program = which::which("psql")?;
        Ok(Self::with_program(program, dbname))
    }

    /// Bind to an explicit client executable (used by tests).
    pub fn with_program(program: impl Into<PathBuf>, dbname: &str) -> Self {
        Self {
            program: program.into(),
            dbname: dbname.to_string(),
        }
    }
}

impl SqlSink for PsqlConnector {
    fn execute_script(&self, sql: &str) -> Result<ExitStatus, SchemaPipeError> {
        tracing::debug!(program = ?self.program, dbname = %self.dbname, "Spawning database client");

        // stdout/stderr stay inherited: query results and client errors are
        // surfaced verbatim on the invoking terminal.
        let mut child = Command::new(&self.program)
            .arg(&self.dbname)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| InfrastructureError::Client(ClientError::Spawn(e)))?;

        {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                SchemaPipeError::InternalError("Client stdin handle missing".to_string())
            })?;

            if let Err(err) = stdin.write_all(sql.as_bytes()) {
                // A client that exits before draining its input closes the
                // pipe; its exit status carries the failure, like in a shell
                // pipeline. Anything else is a real streaming error.
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(InfrastructureError::Client(ClientError::Pipe(err)).into());
                }
            }
            // stdin drops here, signalling EOF to the client
        }

        let status = child.wait().map_err(InfrastructureError::Io)?;
        Ok(status)
    }
}
