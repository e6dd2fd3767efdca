pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{LookupOutcome, LookupService};
pub use domain::LookupMode;
