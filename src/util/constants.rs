// Card Editor - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Card Editor";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CardEditor";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Card file format
// =============================================================================

/// Name of the root field holding the card array in an input file.
pub const CARDS_FIELD: &str = "cards";

/// Topic written into a language block that had to be backfilled.
pub const DEFAULT_TOPIC: &str = "Test";

/// Word list written into a language block that had to be backfilled.
pub const DEFAULT_WORDS: &[&str] = &["test", "test2"];

/// Separator between words in the word-list text field.
pub const WORD_DELIMITER: char = '/';

/// Text shown in an id field whose value is not a number.
pub const NOT_A_NUMBER_LABEL: &str = "NaN";

// =============================================================================
// Load limits
// =============================================================================

/// Default maximum size of a card file accepted for loading.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

/// Smallest configurable maximum file size.
pub const MIN_MAX_FILE_SIZE: u64 = 1024; // 1 KB

/// Hard upper bound on the configurable maximum file size.
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 512 * 1024 * 1024; // 512 MB

// =============================================================================
// Export
// =============================================================================

/// File name suggested in the export dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "test.json";

/// Extension filter offered by the open and export dialogs.
pub const CARD_FILE_EXTENSIONS: &[&str] = &["json"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum number of non-fatal warnings kept in application state.
pub const MAX_WARNINGS: usize = 100;
