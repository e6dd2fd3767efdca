mod utils;

use cutter_lib::modules::dataset::load_table;
use cutter_lib::modules::lookup::{LookupMode, LookupService};
use cutter_lib::modules::matcher::{CutterIndex, MatchKind};
use cutter_lib::modules::normalizer::from_author;
use cutter_lib::shared::config::{CutterConfig, CutterConfigBuilder};
use cutter_lib::shared::errors::AppError;
use utils::factories::{sample_table_path, SAMPLE_ENTRY_COUNT};

fn sample_service() -> LookupService {
    let config = CutterConfigBuilder::new()
        .dataset_path(sample_table_path())
        .build()
        .unwrap();
    LookupService::from_config(&config).unwrap()
}

#[test]
fn test_sample_table_builds_without_bad_rows() {
    let table = load_table(&sample_table_path()).unwrap();
    assert_eq!(table.as_array().map(Vec::len), Some(SAMPLE_ENTRY_COUNT + 2));

    let index = CutterIndex::build(&table, from_author).unwrap();
    assert_eq!(index.len(), SAMPLE_ENTRY_COUNT);
    assert!(index.entries().iter().all(|e| e.code != "X00"));
}

#[test]
fn test_legacy_key_rows_are_indexed() {
    let service = sample_service();
    let outcome = service.lookup("Bandeira, Manuel", LookupMode::Author);
    assert_eq!(outcome.code(), Some("B214"));
}

#[test]
fn test_exact_author_lookup() {
    let service = sample_service();
    let outcome = service.lookup("Amado, Jorge", LookupMode::Author);

    assert_eq!(outcome.normalized_key, "amado");
    assert_eq!(outcome.best.unwrap().kind, MatchKind::Exact);
    assert_eq!(outcome.code(), Some("A481"));
}

#[test]
fn test_diacritics_are_ignored() {
    let service = sample_service();
    assert_eq!(service.lookup("Eça de Queirós", LookupMode::Author).code(), Some("E17"));
    assert_eq!(service.lookup("Veríssimo, Érico", LookupMode::Author).code(), Some("V517"));
}

#[test]
fn test_preceding_author_lookup_with_context() {
    let service = sample_service();
    let outcome = service.lookup("Azevedo, Aluísio", LookupMode::Author);

    let best = outcome.best.unwrap();
    assert_eq!(best.kind, MatchKind::Preceding);
    assert_eq!(best.entry.code, "A848");
    assert_eq!(best.position, 4);
    assert_eq!(outcome.total_entries, SAMPLE_ENTRY_COUNT);

    let codes: Vec<&str> = outcome.neighbors.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["A368", "A481", "A553", "A848", "B214", "B273", "B732"]
    );
}

#[test]
fn test_title_lookup() {
    let service = sample_service();
    let outcome = service.lookup("The Great Gatsby", LookupMode::Title);

    assert_eq!(outcome.normalized_key, "greatgatsby");
    assert_eq!(outcome.code(), Some("G786"));
}

#[test]
fn test_numeric_title_lookup() {
    let service = sample_service();
    let outcome = service.lookup("1984", LookupMode::Title);

    assert_eq!(outcome.normalized_key, "onenineeightf");
    assert_eq!(outcome.best.unwrap().kind, MatchKind::Exact);
    assert_eq!(outcome.code(), Some("O58"));
}

#[test]
fn test_saint_and_sainte_are_distinct() {
    let service = sample_service();
    assert_eq!(service.lookup("St. Pierre", LookupMode::Author).code(), Some("S136"));
    assert_eq!(service.lookup("Ste. Beuve", LookupMode::Author).code(), Some("S137"));
}

#[test]
fn test_quick_lookup_modes() {
    let service = sample_service();

    let title = service.quick_lookup("O Grande Gatsby");
    assert_eq!(title.mode, LookupMode::Title);
    assert_eq!(title.normalized_key, "grandegatsby");
    assert_eq!(title.code(), Some("G216"));

    let author = service.quick_lookup("Rosa, Guimarães");
    assert_eq!(author.mode, LookupMode::Author);
    assert_eq!(author.code(), Some("R788"));
}

#[test]
fn test_outcome_serializes_for_front_ends() {
    let service = sample_service();
    let outcome = service.lookup("Zola, Émile", LookupMode::Author);
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["mode"], "author");
    assert_eq!(value["normalizedKey"], "zola");
    assert_eq!(value["best"]["kind"], "exact");
    assert_eq!(value["best"]["entry"]["code"], "Z86");
    assert_eq!(value["neighbors"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_missing_dataset_file() {
    let config = CutterConfigBuilder::new()
        .dataset_path("/nonexistent/cutter.json")
        .build()
        .unwrap();
    let result = LookupService::from_config(&config);
    assert!(matches!(result, Err(AppError::DatasetNotFound(_))));
}

#[test]
fn test_unconfigured_dataset() {
    let result = LookupService::from_config(&CutterConfig::default());
    assert!(matches!(result, Err(AppError::InvalidConfig(_))));
}
