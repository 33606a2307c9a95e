// Card Editor - core/collection.rs
//
// The card collection pipeline: load, normalise, edit, export.
//
// Two copies of the card list are held:
// - `source`: the cards as loaded, mutated in place by edits.
// - `snapshot`: a deep copy of `source` taken right after each load. This is
//   what Export serialises, so exports reflect the collection as it was
//   loaded and normalised.
//
// Load is all-or-nothing: the whole document is parsed and validated before
// either copy is replaced, so a failed load leaves the previous collection
// untouched.

use crate::core::export::{self, ExportOptions};
use crate::core::model::{Card, Language};
use crate::core::normalize::{self, BackfillMode};
use crate::util::constants::CARDS_FIELD;
use crate::util::error::{EditError, ExportError, ParseError};
use serde_json::Value;

/// In-memory card collection with its export snapshot.
#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    source: Vec<Card>,
    snapshot: Vec<Card>,
    backfill: BackfillMode,
}

impl CardCollection {
    /// Create an empty collection that normalises with `backfill`.
    pub fn new(backfill: BackfillMode) -> Self {
        Self {
            source: Vec::new(),
            snapshot: Vec::new(),
            backfill,
        }
    }

    pub fn backfill_mode(&self) -> BackfillMode {
        self.backfill
    }

    /// Replace the collection with the cards in `contents`.
    ///
    /// `contents` must be a JSON object with a `cards` array. On success the
    /// cards are normalised and the snapshot is rebuilt from them.
    pub fn load(&mut self, contents: &str) -> Result<(), ParseError> {
        let mut cards = parse_card_document(contents)?;
        let filled = normalize::normalize_cards(&mut cards, self.backfill);

        self.snapshot = cards.clone();
        self.source = cards;

        tracing::info!(
            cards = self.source.len(),
            backfilled_blocks = filled,
            "Card collection loaded"
        );
        Ok(())
    }

    /// Cards in source state, including any edits.
    pub fn cards(&self) -> &[Card] {
        &self.source
    }

    /// The snapshot taken at the last load.
    pub fn snapshot(&self) -> &[Card] {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Mutable access to a card in source state.
    pub fn card_mut(&mut self, index: usize) -> Result<&mut Card, EditError> {
        let len = self.source.len();
        self.source
            .get_mut(index)
            .ok_or(EditError::NoSuchCard { index, len })
    }

    /// Set the id of card `index` from raw text.
    pub fn set_id(&mut self, index: usize, raw: &str) -> Result<(), EditError> {
        self.card_mut(index)?.set_id(raw);
        Ok(())
    }

    /// Set the topic of card `index` for `language`.
    pub fn set_topic(
        &mut self,
        index: usize,
        language: Language,
        raw: &str,
    ) -> Result<(), EditError> {
        self.card_mut(index)?.set_topic(language, raw)
    }

    /// Set the word list of card `index` for `language`.
    pub fn set_words(
        &mut self,
        index: usize,
        language: Language,
        raw: &str,
    ) -> Result<(), EditError> {
        self.card_mut(index)?.set_words(language, raw)
    }

    /// Serialise the snapshot for export.
    pub fn export(&self, options: &ExportOptions) -> Result<String, ExportError> {
        let output = export::render(&self.snapshot, options)?;
        tracing::debug!(
            cards = self.snapshot.len(),
            bytes = output.len(),
            "Card collection exported"
        );
        Ok(output)
    }
}

/// Parse a card document into cards, without normalising them.
pub fn parse_card_document(contents: &str) -> Result<Vec<Card>, ParseError> {
    let root: Value =
        serde_json::from_str(contents).map_err(|e| ParseError::InvalidJson { source: e })?;

    let items = match root {
        Value::Object(mut map) => match map.remove(CARDS_FIELD) {
            Some(Value::Array(items)) => items,
            _ => return Err(ParseError::MissingCards),
        },
        _ => return Err(ParseError::MissingCards),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| ParseError::InvalidCard { index, source: e })
        })
        .collect()
}
