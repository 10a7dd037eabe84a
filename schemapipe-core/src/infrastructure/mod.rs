pub mod adapters;
pub mod error;
pub mod fs;
