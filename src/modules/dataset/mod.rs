pub mod infrastructure;

// Re-exports for easy external access
pub use infrastructure::{load_table, parse_table};
