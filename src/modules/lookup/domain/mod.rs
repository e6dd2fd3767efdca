pub mod lookup_mode;

pub use lookup_mode::{LookupMode, TITLE_PREFIX};
