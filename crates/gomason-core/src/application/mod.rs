//! Application layer: orchestration over the domain, reached through ports.

pub mod error;
pub mod generator;
pub mod ports;

pub use error::AppError;
pub use generator::{CONFIG_FILE_NAME, GenerateService, GeneratedProject};
