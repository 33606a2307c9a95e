// Card Editor - tests/e2e_pipeline.rs
//
// End-to-end tests for the card file pipeline.
//
// These tests exercise the real filesystem and the full path from a card
// file on disk, through load and normalisation, to an exported JSON file:
// no mocks, no stubs.

use card_editor::app::state::{export_file, AppState};
use card_editor::core::collection::CardCollection;
use card_editor::core::export::{ExportLayout, ExportOptions};
use card_editor::core::model::{CardId, Language, LanguageBlock};
use card_editor::core::normalize::BackfillMode;
use card_editor::platform::config::{load_config, AppConfig};
use card_editor::platform::fs::{read_card_file, write_atomic};
use card_editor::util::constants::DEFAULT_MAX_FILE_SIZE;
use card_editor::util::error::{CardEditorError, ParseError, ReadError};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    read_card_file(&fixture(name), DEFAULT_MAX_FILE_SIZE).unwrap()
}

fn load_fixture(name: &str, mode: BackfillMode) -> CardCollection {
    let mut collection = CardCollection::new(mode);
    collection.load(&read_fixture(name)).unwrap();
    collection
}

fn placeholder() -> LanguageBlock {
    LanguageBlock::new("Test", vec!["test".to_string(), "test2".to_string()])
}

// =============================================================================
// Load
// =============================================================================

/// A complete file loads every card unchanged.
#[test]
fn e2e_loads_complete_fixture() {
    let collection = load_fixture("b2_complete.json", BackfillMode::Chained);

    assert_eq!(collection.len(), 3);
    let first = &collection.cards()[0];
    assert_eq!(first.id, CardId::from(1));
    assert_eq!(
        first.block(Language::En).unwrap().words,
        vec!["luggage", "boarding pass", "itinerary"]
    );
    assert_eq!(first.block(Language::Uk).unwrap().topic, "Подорожі");
}

/// Sparse cards are backfilled per the chained rules; unknown keys survive.
#[test]
fn e2e_sparse_fixture_chained_backfill() {
    let collection = load_fixture("b2_sparse.json", BackfillMode::Chained);
    let cards = collection.cards();

    // No languages at all: both blocks.
    assert_eq!(cards[0].block(Language::En), Some(&placeholder()));
    assert_eq!(cards[0].block(Language::Uk), Some(&placeholder()));

    // Empty languages object: en only.
    assert_eq!(cards[1].block(Language::En), Some(&placeholder()));
    assert!(cards[1].block(Language::Uk).is_none());

    // en present: uk filled.
    assert_eq!(cards[2].block(Language::En).unwrap().topic, "Weather");
    assert_eq!(cards[2].block(Language::Uk), Some(&placeholder()));

    // uk present, en missing: en filled; extra fields and languages kept.
    assert_eq!(cards[3].block(Language::En), Some(&placeholder()));
    assert_eq!(cards[3].block(Language::Uk).unwrap().topic, "Їжа");
    assert_eq!(cards[3].extra.get("level"), Some(&Value::from("B2")));
    assert!(cards[3].languages.as_ref().unwrap().other.contains_key("pl"));
}

/// Independent backfill leaves no card without either block.
#[test]
fn e2e_sparse_fixture_independent_backfill() {
    let collection = load_fixture("b2_sparse.json", BackfillMode::Independent);
    for card in collection.cards() {
        for &language in Language::all() {
            assert!(
                card.block(language).is_some(),
                "card {} missing {language}",
                card.id
            );
        }
    }
}

/// A bare array root and truncated JSON are both rejected, keeping prior state.
#[test]
fn e2e_malformed_files_are_rejected() {
    let mut collection = load_fixture("b2_complete.json", BackfillMode::Chained);

    let bare = collection.load(&read_fixture("bare_array.json"));
    assert!(matches!(bare, Err(ParseError::MissingCards)));

    let truncated = collection.load(&read_fixture("truncated.json"));
    assert!(matches!(truncated, Err(ParseError::InvalidJson { .. })));

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.snapshot().len(), 3);
}

/// Loading a second file replaces the first entirely.
#[test]
fn e2e_second_load_replaces_first() {
    let mut collection = load_fixture("b2_complete.json", BackfillMode::Chained);
    collection.load(&read_fixture("b2_sparse.json")).unwrap();

    let ids: Vec<_> = collection.cards().iter().map(|c| c.id.as_i64()).collect();
    assert_eq!(ids, vec![Some(10), Some(11), Some(12), Some(13)]);
    assert_eq!(
        collection.snapshot(),
        load_fixture("b2_sparse.json", BackfillMode::Chained).cards()
    );
}

// =============================================================================
// Export
// =============================================================================

/// Export → write → read → rewrap → load gives back the same collection.
#[test]
fn e2e_export_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("test.json");

    let original = load_fixture("b2_complete.json", BackfillMode::Chained);
    let json = original.export(&ExportOptions::default()).unwrap();
    write_atomic(&out, json.as_bytes()).unwrap();

    let written = read_card_file(&out, DEFAULT_MAX_FILE_SIZE).unwrap();
    let value: Value = serde_json::from_str(&written).unwrap();
    assert!(value.is_array(), "default export must be a bare array");

    let mut reloaded = CardCollection::default();
    reloaded
        .load(&format!("{{\"cards\": {written}}}"))
        .unwrap();
    assert_eq!(reloaded.cards(), original.cards());
}

/// With the envelope layout an exported file loads directly.
#[test]
fn e2e_envelope_export_reloads_without_rewrap() {
    let original = load_fixture("b2_complete.json", BackfillMode::Chained);
    let options = ExportOptions {
        layout: ExportLayout::Envelope,
        pretty: true,
    };
    let json = original.export(&options).unwrap();

    let mut reloaded = CardCollection::default();
    reloaded.load(&json).unwrap();
    assert_eq!(reloaded.cards(), original.cards());
}

/// Chained backfill fills one block per load, so a card with an empty
/// `languages` object picks up `uk` on the second load of its export.
#[test]
fn e2e_chained_gap_card_gains_uk_on_reload() {
    let original = load_fixture("b2_sparse.json", BackfillMode::Chained);
    assert!(original.cards()[1].block(Language::Uk).is_none());

    let options = ExportOptions {
        layout: ExportLayout::Envelope,
        pretty: false,
    };
    let mut reloaded = CardCollection::new(BackfillMode::Chained);
    reloaded.load(&original.export(&options).unwrap()).unwrap();

    assert_eq!(reloaded.cards()[1].block(Language::Uk), Some(&placeholder()));
    assert_eq!(reloaded.cards()[1].block(Language::En), Some(&placeholder()));
    for index in [0, 2, 3] {
        assert_eq!(reloaded.cards()[index], original.cards()[index]);
    }
}

/// Independent backfill leaves nothing to fill on reload.
#[test]
fn e2e_independent_export_reloads_unchanged() {
    let original = load_fixture("b2_sparse.json", BackfillMode::Independent);
    let options = ExportOptions {
        layout: ExportLayout::Envelope,
        pretty: false,
    };
    let mut reloaded = CardCollection::new(BackfillMode::Independent);
    reloaded.load(&original.export(&options).unwrap()).unwrap();
    assert_eq!(reloaded.cards(), original.cards());
}

/// Edits reach source state, while the exported file is the load snapshot.
#[test]
fn e2e_edits_do_not_leak_into_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("test.json");

    let mut state = AppState::new(AppConfig::default(), false);
    state
        .apply_loaded(fixture("b2_complete.json"), &read_fixture("b2_complete.json"))
        .unwrap();

    state.drafts[0].id = "abc".to_string();
    state.edit_id(0);
    state.drafts[0].en.as_mut().unwrap().words = "a/b/c".to_string();
    state.edit_words(0, Language::En);

    let edited = &state.collection.cards()[0];
    assert!(edited.id.is_nan());
    assert_eq!(edited.block(Language::En).unwrap().words, vec!["a", "b", "c"]);

    state.export_to(&out).unwrap();
    let value: Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["languages"]["en"]["words"][0], "luggage");
}

// =============================================================================
// Config + file limits
// =============================================================================

/// Config options flow through to loading and exporting.
#[test]
fn e2e_config_drives_pipeline() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[export]\nenvelope = true\n[normalize]\nbackfill = \"independent\"\n",
    )
    .unwrap();
    let (config, warnings) = load_config(&config_path);
    assert!(warnings.is_empty());

    let mut collection = CardCollection::new(config.backfill);
    collection.load(&read_fixture("b2_sparse.json")).unwrap();
    let value: Value =
        serde_json::from_str(&collection.export(&config.export).unwrap()).unwrap();

    assert_eq!(value["cards"][1]["languages"]["uk"]["topic"], "Test");
}

/// Files over the size limit are rejected before parsing.
#[test]
fn e2e_oversized_file_is_rejected() {
    let result = read_card_file(&fixture("b2_complete.json"), 16);
    assert!(matches!(result, Err(ReadError::FileTooLarge { .. })));
}

// =============================================================================
// Headless export
// =============================================================================

/// The headless path writes the normalised cards of the input file.
#[test]
fn e2e_export_file_writes_normalised_cards() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("test.json");

    let count = export_file(&fixture("b2_sparse.json"), &out, &AppConfig::default()).unwrap();
    assert_eq!(count, 4);

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let cards = value.as_array().unwrap();
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0]["languages"]["uk"]["topic"], "Test");
    assert_eq!(cards[3]["level"], "B2");
}

/// A rejected input leaves no output file behind.
#[test]
fn e2e_export_file_rejects_malformed_input() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("test.json");

    let result = export_file(&fixture("bare_array.json"), &out, &AppConfig::default());
    assert!(matches!(
        result,
        Err(CardEditorError::Parse(ParseError::MissingCards))
    ));
    assert!(!out.exists());

    let result = export_file(&dir.path().join("missing.json"), &out, &AppConfig::default());
    assert!(matches!(result, Err(CardEditorError::Read(ReadError::Io { .. }))));
}

