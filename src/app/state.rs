// Card Editor - app/state.rs
//
// Application state management. Holds the card collection, the text the
// user is typing into each card's fields, the current file, and status.
// Owned by the eframe::App implementation.
//
// Panels write field text into `drafts` and then call the matching
// `edit_*` method, which pushes the text through the collection's edit
// operations. Drafts are rebuilt from the collection after every load.

use crate::core::collection::CardCollection;
use crate::core::edit::join_words;
use crate::core::model::{Card, Language};
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants::MAX_WARNINGS;
use crate::util::error::{self, EditError, ExportError, ParseError, ReadError};
use std::path::{Path, PathBuf};

/// Editable text for one language block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockDraft {
    pub topic: String,
    /// Words joined with `/`.
    pub words: String,
}

/// Editable text for one card's fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDraft {
    pub id: String,
    /// `None` when the card has no block for the language.
    pub en: Option<BlockDraft>,
    pub uk: Option<BlockDraft>,
}

impl CardDraft {
    /// Build field text from a card's current values.
    pub fn from_card(card: &Card) -> Self {
        let block = |language| {
            card.block(language).map(|b| BlockDraft {
                topic: b.topic.clone(),
                words: join_words(&b.words),
            })
        };
        Self {
            id: card.id.to_string(),
            en: block(Language::En),
            uk: block(Language::Uk),
        }
    }

    pub fn block(&self, language: Language) -> Option<&BlockDraft> {
        match language {
            Language::En => self.en.as_ref(),
            Language::Uk => self.uk.as_ref(),
        }
    }

    pub fn block_mut(&mut self, language: Language) -> Option<&mut BlockDraft> {
        match language {
            Language::En => self.en.as_mut(),
            Language::Uk => self.uk.as_mut(),
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration.
    pub config: AppConfig,

    /// The loaded cards and their export snapshot.
    pub collection: CardCollection,

    /// Field text per card, index-aligned with `collection.cards()`.
    pub drafts: Vec<CardDraft>,

    /// File the collection was last loaded from.
    pub current_file: Option<PathBuf>,

    /// File a panel or the CLI asked to open; consumed by gui.rs each frame.
    pub pending_load: Option<PathBuf>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config problems, failed loads).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with an empty collection.
    pub fn new(config: AppConfig, debug_mode: bool) -> Self {
        let collection = CardCollection::new(config.backfill);
        Self {
            config,
            collection,
            drafts: Vec::new(),
            current_file: None,
            pending_load: None,
            status_message: "Ready. Open a card file to begin editing.".to_string(),
            warnings: Vec::new(),
            show_about: false,
            debug_mode,
        }
    }

    /// Load file text read from `path` into the collection.
    ///
    /// On failure the previous collection, drafts and current file are kept.
    pub fn apply_loaded(&mut self, path: PathBuf, contents: &str) -> Result<(), ParseError> {
        if let Err(e) = self.collection.load(contents) {
            tracing::warn!(path = %path.display(), error = %e, "Card file rejected");
            self.status_message = format!("Cannot load '{}': {e}", path.display());
            self.push_warning(self.status_message.clone());
            return Err(e);
        }

        self.rebuild_drafts();
        self.status_message = format!(
            "Loaded {} cards from '{}'.",
            self.collection.len(),
            path.display()
        );
        self.current_file = Some(path);
        Ok(())
    }

    /// Record a failed background read.
    pub fn apply_read_failure(&mut self, error: &ReadError) {
        tracing::warn!(error = %error, "Card file read failed");
        self.status_message = error.to_string();
        self.push_warning(error.to_string());
    }

    /// Push the draft id text of card `index` into the collection.
    pub fn edit_id(&mut self, index: usize) {
        let Some(raw) = self.drafts.get(index).map(|d| d.id.clone()) else {
            self.report_edit_error(EditError::NoSuchCard {
                index,
                len: self.drafts.len(),
            });
            return;
        };
        if let Err(e) = self.collection.set_id(index, &raw) {
            self.report_edit_error(e);
        }
    }

    /// Push the draft topic text of card `index` for `language`.
    pub fn edit_topic(&mut self, index: usize, language: Language) {
        let raw = self.draft_text(index, language, |b| &b.topic);
        let result = match raw {
            Ok(raw) => self.collection.set_topic(index, language, &raw),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            self.report_edit_error(e);
        }
    }

    /// Push the draft words text of card `index` for `language`.
    pub fn edit_words(&mut self, index: usize, language: Language) {
        let raw = self.draft_text(index, language, |b| &b.words);
        let result = match raw {
            Ok(raw) => self.collection.set_words(index, language, &raw),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            self.report_edit_error(e);
        }
    }

    /// Export the snapshot and write it to `path`. Returns the card count.
    pub fn export_to(&mut self, path: &Path) -> Result<usize, ExportError> {
        let result = self
            .collection
            .export(&self.config.export)
            .and_then(|json| {
                fs::write_atomic(path, json.as_bytes()).map_err(|e| ExportError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            })
            .map(|()| self.collection.snapshot().len());

        match &result {
            Ok(n) => {
                tracing::info!(path = %path.display(), cards = n, "Cards exported");
                self.status_message = format!("Exported {n} cards to '{}'.", path.display());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Export failed");
                self.status_message = format!("Export failed: {e}");
            }
        }
        result
    }

    /// Record a non-fatal warning, keeping at most `MAX_WARNINGS`.
    pub fn push_warning(&mut self, message: String) {
        if self.warnings.len() < MAX_WARNINGS {
            self.warnings.push(message);
        }
    }

    fn rebuild_drafts(&mut self) {
        self.drafts = self
            .collection
            .cards()
            .iter()
            .map(CardDraft::from_card)
            .collect();
    }

    fn draft_text(
        &self,
        index: usize,
        language: Language,
        field: impl Fn(&BlockDraft) -> &String,
    ) -> Result<String, EditError> {
        let draft = self.drafts.get(index).ok_or(EditError::NoSuchCard {
            index,
            len: self.drafts.len(),
        })?;
        draft
            .block(language)
            .map(|b| field(b).clone())
            .ok_or(EditError::MissingLanguageBlock { language })
    }

    fn report_edit_error(&mut self, error: EditError) {
        tracing::warn!(error = %error, "Edit rejected");
        self.status_message = format!("Edit rejected: {error}");
    }
}

/// Read, load and export a card file without the GUI. Returns the number of
/// cards written.
pub fn export_file(input: &Path, output: &Path, config: &AppConfig) -> error::Result<usize> {
    let contents = fs::read_card_file(input, config.max_file_size)?;

    let mut collection = CardCollection::new(config.backfill);
    collection.load(&contents)?;

    let json = collection.export(&config.export)?;
    fs::write_atomic(output, json.as_bytes()).map_err(|e| ExportError::Io {
        path: output.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        cards = collection.len(),
        "Headless export complete"
    );
    Ok(collection.len())
}
