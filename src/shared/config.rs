use crate::modules::matcher::DEFAULT_NEIGHBOR_RADIUS;
use crate::modules::normalizer::NormalizerConfig;
use crate::shared::errors::{AppError, AppResult};
use std::path::PathBuf;

pub const DATASET_ENV: &str = "CUTTER_DATASET";
pub const NEIGHBOR_RADIUS_ENV: &str = "CUTTER_NEIGHBOR_RADIUS";
pub const MAX_KEY_LEN_ENV: &str = "CUTTER_MAX_KEY_LEN";

/// Upper bound on the neighbor window radius
pub const MAX_NEIGHBOR_RADIUS: usize = 50;

/// Application configuration
///
/// Externalizes the dataset location, the display window and the normalizer
/// constants so the lookup can be set up from the environment or in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutterConfig {
    /// JSON table to load at startup
    pub dataset_path: Option<PathBuf>,

    /// Entries shown on each side of a match
    pub neighbor_radius: usize,

    pub normalizer: NormalizerConfig,
}

impl CutterConfig {
    pub fn new() -> Self {
        Self {
            dataset_path: None,
            neighbor_radius: DEFAULT_NEIGHBOR_RADIUS,
            normalizer: NormalizerConfig::default(),
        }
    }

    /// Loads `.env` if present, then applies the `CUTTER_*` variables on top
    /// of the defaults.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup(DATASET_ENV).filter(|p| !p.trim().is_empty()) {
            config.dataset_path = Some(PathBuf::from(path));
        }
        if let Some(radius) = lookup(NEIGHBOR_RADIUS_ENV) {
            config.neighbor_radius = radius.trim().parse()?;
        }
        if let Some(max_len) = lookup(MAX_KEY_LEN_ENV) {
            config.normalizer.max_len = max_len.trim().parse()?;
        }

        config.validate().map_err(AppError::InvalidConfig)?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.neighbor_radius > MAX_NEIGHBOR_RADIUS {
            return Err(format!(
                "neighbor_radius must be at most {}, got {}",
                MAX_NEIGHBOR_RADIUS, self.neighbor_radius
            ));
        }

        self.normalizer.validate()
    }
}

impl Default for CutterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for CutterConfig to make test setup easier
#[derive(Default)]
pub struct CutterConfigBuilder {
    config: CutterConfig,
}

impl CutterConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CutterConfig::new(),
        }
    }

    pub fn dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dataset_path = Some(path.into());
        self
    }

    pub fn neighbor_radius(mut self, radius: usize) -> Self {
        self.config.neighbor_radius = radius;
        self
    }

    pub fn max_key_len(mut self, max_len: usize) -> Self {
        self.config.normalizer.max_len = max_len;
        self
    }

    pub fn leading_articles(mut self, articles: Vec<String>) -> Self {
        self.config.normalizer.leading_articles = articles;
        self
    }

    pub fn build(self) -> Result<CutterConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
