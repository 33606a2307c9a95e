// Card Editor - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. Their serde
// shape is the card file format: unknown keys on a card or inside its
// `languages` object are carried through untouched.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// =============================================================================
// Card
// =============================================================================

/// One flashcard record: an id plus per-language content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Card {
    /// Numeric identifier. Not unique-checked.
    #[serde(default)]
    pub id: CardId,

    /// Per-language blocks. `None` until normalisation backfills it when the
    /// source record had no (or a null) `languages` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Languages>,

    /// Any other fields present on the record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Block for `language`, if present.
    pub fn block(&self, language: Language) -> Option<&LanguageBlock> {
        self.languages.as_ref().and_then(|l| l.block(language))
    }

    /// Mutable block for `language`, if present.
    pub fn block_mut(&mut self, language: Language) -> Option<&mut LanguageBlock> {
        self.languages.as_mut().and_then(|l| l.block_mut(language))
    }
}

// =============================================================================
// Card id
// =============================================================================

/// A card id: a JSON number, or the not-a-number sentinel produced when an
/// id field is edited with non-numeric text.
///
/// The sentinel is written as `null`, and `null` (or a missing id) reads
/// back as the sentinel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CardId {
    Number(serde_json::Number),
    #[default]
    NotANumber,
}

impl CardId {
    /// True for the not-a-number sentinel.
    pub fn is_nan(&self) -> bool {
        matches!(self, CardId::NotANumber)
    }

    /// Integer value, when the id is a whole number within `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CardId::Number(n) => n.as_i64(),
            CardId::NotANumber => None,
        }
    }
}

impl From<i64> for CardId {
    fn from(value: i64) -> Self {
        CardId::Number(value.into())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardId::Number(n) => write!(f, "{n}"),
            CardId::NotANumber => f.write_str(crate::util::constants::NOT_A_NUMBER_LABEL),
        }
    }
}

impl Serialize for CardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardId::Number(n) => n.serialize(serializer),
            CardId::NotANumber => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<serde_json::Number>::deserialize(deserializer)? {
            Some(n) => CardId::Number(n),
            None => CardId::NotANumber,
        })
    }
}

// =============================================================================
// Languages
// =============================================================================

/// Languages whose blocks the editor can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Uk,
}

impl Language {
    /// All editable languages in display order.
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Uk]
    }

    /// Key used for this language inside a card's `languages` object.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uk => "uk",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Uk => "Ukrainian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The `languages` object of a card.
///
/// `en` and `uk` are typed; any other language keys are kept as raw JSON so
/// they survive a load/export cycle without being editable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Languages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<LanguageBlock>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uk: Option<LanguageBlock>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Languages {
    pub fn block(&self, language: Language) -> Option<&LanguageBlock> {
        match language {
            Language::En => self.en.as_ref(),
            Language::Uk => self.uk.as_ref(),
        }
    }

    pub fn block_mut(&mut self, language: Language) -> Option<&mut LanguageBlock> {
        match language {
            Language::En => self.en.as_mut(),
            Language::Uk => self.uk.as_mut(),
        }
    }

    /// Slot for `language`, for callers that need to fill an absent block.
    pub fn slot_mut(&mut self, language: Language) -> &mut Option<LanguageBlock> {
        match language {
            Language::En => &mut self.en,
            Language::Uk => &mut self.uk,
        }
    }
}

/// Topic and word list for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageBlock {
    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub words: Vec<String>,
}

impl LanguageBlock {
    pub fn new(topic: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            topic: topic.into(),
            words,
        }
    }
}
