// Card Editor - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::export::{ExportLayout, ExportOptions};
use crate::core::normalize::BackfillMode;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Card Editor configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/cardeditor/ or %APPDATA%\CardEditor\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works
/// with an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[export]` section.
    pub export: ExportSection,
    /// `[normalize]` section.
    pub normalize: NormalizeSection,
    /// `[load]` section.
    pub load: LoadSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// File name suggested in the export dialog.
    pub file_name: Option<String>,
    /// Wrap exported cards in a `{"cards": [...]}` object.
    pub envelope: Option<bool>,
    /// Indent exported JSON.
    pub pretty: Option<bool>,
}

/// `[normalize]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct NormalizeSection {
    /// "chained" or "independent".
    pub backfill: Option<String>,
}

/// `[load]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoadSection {
    /// Largest card file accepted, in bytes.
    pub max_file_size_bytes: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce a warning and fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// File name suggested when exporting.
    pub export_file_name: String,
    /// Layout and formatting of exported JSON.
    pub export: ExportOptions,
    /// How missing language blocks are backfilled on load.
    pub backfill: BackfillMode,
    /// Largest card file accepted, in bytes.
    pub max_file_size: u64,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_file_name: constants::DEFAULT_EXPORT_FILE_NAME.to_string(),
            export: ExportOptions::default(),
            backfill: BackfillMode::default(),
            max_file_size: constants::DEFAULT_MAX_FILE_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns the validated config and a list of non-fatal problems.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a single
/// error so the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);
    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }
    (config, warnings)
}

/// Validate each raw field, accumulating one warning per rejected value.
fn validate(raw: RawConfig, warnings: &mut Vec<ConfigError>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Export: file_name --
    if let Some(name) = raw.export.file_name {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[export] file_name".to_string(),
                value: name.clone(),
                expected: format!(
                    "a non-empty file name without path separators (default \"{}\")",
                    constants::DEFAULT_EXPORT_FILE_NAME
                ),
            });
        } else {
            config.export_file_name = trimmed.to_string();
        }
    }

    // -- Export: envelope / pretty --
    if let Some(true) = raw.export.envelope {
        config.export.layout = ExportLayout::Envelope;
    }
    if let Some(pretty) = raw.export.pretty {
        config.export.pretty = pretty;
    }

    // -- Normalize: backfill --
    if let Some(ref mode) = raw.normalize.backfill {
        match BackfillMode::from_name(mode) {
            Some(m) => config.backfill = m,
            None => warnings.push(ConfigError::ValueOutOfRange {
                field: "[normalize] backfill".to_string(),
                value: mode.clone(),
                expected: "\"chained\" or \"independent\" (default \"chained\")".to_string(),
            }),
        }
    }

    // -- Load: max_file_size_bytes --
    if let Some(size) = raw.load.max_file_size_bytes {
        if (constants::MIN_MAX_FILE_SIZE..=constants::ABSOLUTE_MAX_FILE_SIZE).contains(&size) {
            config.max_file_size = size;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[load] max_file_size_bytes".to_string(),
                value: size.to_string(),
                expected: format!(
                    "{}-{} (default {})",
                    constants::MIN_MAX_FILE_SIZE,
                    constants::ABSOLUTE_MAX_FILE_SIZE,
                    constants::DEFAULT_MAX_FILE_SIZE,
                ),
            });
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: format!(
                    "one of {} (default {})",
                    constants::VALID_LOG_LEVELS.join(", "),
                    constants::DEFAULT_LOG_LEVEL
                ),
            });
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file);
        }
    }

    config
}
