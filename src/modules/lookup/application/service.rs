use super::dto::LookupOutcome;
use crate::modules::dataset::load_table;
use crate::modules::lookup::domain::LookupMode;
use crate::modules::matcher::CutterIndex;
use crate::modules::normalizer::KeyNormalizer;
use crate::shared::config::CutterConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use serde_json::Value;

/// Front-end agnostic Cutter lookup
///
/// Owns the normalizer and the frozen index. Table headings are normalized
/// with the author pipeline, since the table lists standardized headings.
pub struct LookupService {
    normalizer: KeyNormalizer,
    index: CutterIndex,
    neighbor_radius: usize,
}

impl LookupService {
    /// Build the service from an already loaded table
    ///
    /// # Errors
    /// Returns [`AppError::InvalidConfig`] for an invalid configuration and
    /// [`AppError::DatasetFormat`] if `table` is not an array of rows.
    pub fn new(config: &CutterConfig, table: &Value) -> AppResult<Self> {
        config.validate().map_err(AppError::InvalidConfig)?;

        let normalizer = KeyNormalizer::canonical(config.normalizer.clone());
        let index = CutterIndex::build(table, |header| normalizer.from_author(header))?;

        Ok(Self {
            normalizer,
            index,
            neighbor_radius: config.neighbor_radius,
        })
    }

    /// Load the configured dataset and build the service
    ///
    /// # Errors
    /// Fails if no dataset path is configured or the table cannot be loaded.
    pub fn from_config(config: &CutterConfig) -> AppResult<Self> {
        let path = config.dataset_path.as_deref().ok_or_else(|| {
            AppError::InvalidConfig("no dataset configured (set CUTTER_DATASET)".to_string())
        })?;

        let table = load_table(path)?;
        Self::new(config, &table)
    }

    /// Canonical key of `raw` under the given mode
    pub fn normalize(&self, raw: &str, mode: LookupMode) -> String {
        match mode {
            LookupMode::Author => self.normalizer.from_author(raw),
            LookupMode::Title => self.normalizer.from_title(raw),
        }
    }

    /// Look up `raw` with an explicit mode
    pub fn lookup(&self, raw: &str, mode: LookupMode) -> LookupOutcome<'_> {
        let input = raw.trim();
        let normalized_key = self.normalize(input, mode);
        let best = self.index.find_best(&normalized_key);
        let neighbors = self
            .index
            .get_neighbors(best.map(|m| m.position), self.neighbor_radius);

        LogContext::lookup(input, &normalized_key, best.map(|m| m.entry.code.as_str()));

        LookupOutcome {
            input: input.to_string(),
            mode,
            normalized_key,
            best,
            neighbors,
            total_entries: self.index.len(),
        }
    }

    /// Look up single-field input, guessing the mode from its shape
    pub fn quick_lookup(&self, raw: &str) -> LookupOutcome<'_> {
        let (mode, text) = LookupMode::detect(raw, self.normalizer.config());
        self.lookup(text, mode)
    }

    pub fn index(&self) -> &CutterIndex {
        &self.index
    }

    pub fn neighbor_radius(&self) -> usize {
        self.neighbor_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::matcher::MatchKind;
    use crate::shared::config::CutterConfigBuilder;
    use serde_json::json;

    fn service() -> LookupService {
        let table = json!([
            { "headerText": "Amado", "code": "A481" },
            { "headerText": "Assis", "code": "A848" },
            { "headerText": "Cervantes", "code": "C419" },
            { "headerText": "Great", "code": "G786" },
            { "headerText": "MacDonald", "code": "M135" },
            { "headerText": "Saint", "code": "S136" },
            { "headerText": "Zola", "code": "Z86" }
        ]);
        LookupService::new(&CutterConfig::default(), &table).unwrap()
    }

    #[test]
    fn test_lookup_author_exact() {
        let service = service();
        let outcome = service.lookup("  Cervantes, Miguel de ", LookupMode::Author);

        assert_eq!(outcome.input, "Cervantes, Miguel de");
        assert_eq!(outcome.normalized_key, "cervantes");
        assert_eq!(outcome.code(), Some("C419"));
        assert_eq!(outcome.explanation(), "Exact match");
    }

    #[test]
    fn test_lookup_author_preceding_reports_position() {
        let service = service();
        let outcome = service.lookup("Borges, Jorge Luis", LookupMode::Author);

        assert_eq!(outcome.code(), Some("A848"));
        assert_eq!(outcome.best.unwrap().kind, MatchKind::Preceding);
        assert_eq!(
            outcome.explanation(),
            "Immediately preceding entry (largest key <= query). Position: 2 of 7"
        );
    }

    #[test]
    fn test_lookup_title_strips_article() {
        let service = service();
        let outcome = service.lookup("The Great Gatsby", LookupMode::Title);

        assert_eq!(outcome.normalized_key, "greatgatsby");
        assert_eq!(outcome.code(), Some("G786"));
    }

    #[test]
    fn test_lookup_honorifics_match_table_headings() {
        let service = service();
        assert_eq!(service.lookup("McDonald, Ross", LookupMode::Author).code(), Some("M135"));
        assert_eq!(service.lookup("St. Clair", LookupMode::Author).code(), Some("S136"));
    }

    #[test]
    fn test_lookup_without_correspondence() {
        let service = service();
        let outcome = service.lookup("Abbot", LookupMode::Author);

        assert!(outcome.best.is_none());
        assert!(outcome.neighbors.is_empty());
        assert_eq!(
            outcome.explanation(),
            "No entry <= normalized key. Check spelling/normalization."
        );
    }

    #[test]
    fn test_lookup_blank_input() {
        let service = service();
        let outcome = service.lookup("   ", LookupMode::Title);

        assert_eq!(outcome.normalized_key, "");
        assert!(outcome.best.is_none());
    }

    #[test]
    fn test_neighbors_use_configured_radius() {
        let table = json!([
            { "headerText": "Amado", "code": "A481" },
            { "headerText": "Borges", "code": "B732" },
            { "headerText": "Cervantes", "code": "C419" }
        ]);
        let config = CutterConfigBuilder::new().neighbor_radius(1).build().unwrap();
        let service = LookupService::new(&config, &table).unwrap();
        assert_eq!(service.neighbor_radius(), 1);

        let outcome = service.lookup("Amado", LookupMode::Author);
        let codes: Vec<&str> = outcome.neighbors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["A481", "B732"]);
    }

    #[test]
    fn test_quick_lookup_detects_mode() {
        let service = service();

        let title = service.quick_lookup("t:Great Expectations");
        assert_eq!(title.mode, LookupMode::Title);
        assert_eq!(title.input, "Great Expectations");

        let author = service.quick_lookup("Zola, Émile");
        assert_eq!(author.mode, LookupMode::Author);
        assert_eq!(author.code(), Some("Z86"));
    }

    #[test]
    fn test_new_rejects_non_array_table() {
        let result = LookupService::new(&CutterConfig::default(), &json!({ "rows": [] }));
        assert!(matches!(result, Err(AppError::DatasetFormat(_))));
    }

    #[test]
    fn test_from_config_requires_dataset_path() {
        let result = LookupService::from_config(&CutterConfig::default());
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }
}
