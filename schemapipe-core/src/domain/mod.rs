pub mod error;
pub mod rewrite;

// Convenience re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use rewrite::SchemaRewrite;
