//! Infrastructure adapters for gomason.
//!
//! This crate implements the ports defined in `gomason_core::application::ports`.
//! It contains all external dependencies and I/O operations: the builtin
//! template renderer, the local/in-memory filesystems, and the GitHub CLI
//! integration.

pub mod filesystem;
pub mod github;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use github::GhCli;
pub use renderer::BuiltinRenderer;
