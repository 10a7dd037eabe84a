// schemapipe-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Source schema token is empty")]
    #[diagnostic(
        code(schemapipe::domain::rewrite),
        help("Provide a non-empty --from-schema token.")
    )]
    EmptySourceSchema,
}
