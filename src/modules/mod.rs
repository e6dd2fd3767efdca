pub mod dataset;
pub mod lookup;
pub mod matcher;
pub mod normalizer;
