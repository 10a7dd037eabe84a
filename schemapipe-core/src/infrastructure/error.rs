// schemapipe-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ClientError {
    #[error("Database client not found: {0}")]
    #[diagnostic(
        code(schemapipe::infra::client::missing),
        help("Install the PostgreSQL client tools and make sure 'psql' is in your PATH.")
    )]
    NotFound(#[from] which::Error),

    #[error("Failed to spawn database client: {0}")]
    #[diagnostic(code(schemapipe::infra::client::spawn))]
    Spawn(#[source] std::io::Error),

    #[error("Broken pipe while streaming SQL to the database client: {0}")]
    #[diagnostic(
        code(schemapipe::infra::client::pipe),
        help("The client exited before reading its whole input.")
    )]
    Pipe(#[source] std::io::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE CLIENT (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] ClientError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(schemapipe::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),
}

// Manual implementation for shortcuts (e.g. `?` operator on which() calls)
impl From<which::Error> for InfrastructureError {
    fn from(err: which::Error) -> Self {
        InfrastructureError::Client(ClientError::NotFound(err))
    }
}
