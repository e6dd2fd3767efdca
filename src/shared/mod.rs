// Shared kernel used by every module

pub mod config;  // Application configuration
pub mod errors;  // Shared error types
pub mod utils;   // Logging helpers

// Re-exports for convenience
pub use config::{CutterConfig, CutterConfigBuilder};
pub use errors::{AppError, AppResult};
