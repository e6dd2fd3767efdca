pub mod dto;
pub mod service;

pub use dto::LookupOutcome;
pub use service::LookupService;
