// Card Editor - core/edit.rs
//
// Field-level edits applied to a single card from raw form text.
// Edits never create missing language blocks; they report them instead.

use crate::core::model::{Card, CardId, Language, LanguageBlock};
use crate::util::constants::WORD_DELIMITER;
use crate::util::error::EditError;

impl Card {
    /// Set the id from raw text. Never fails: unparseable text stores the
    /// not-a-number sentinel.
    pub fn set_id(&mut self, raw: &str) {
        self.id = parse_id(raw);
    }

    /// Set the topic of `language` to `raw`, verbatim.
    pub fn set_topic(&mut self, language: Language, raw: &str) -> Result<(), EditError> {
        self.require_block(language)?.topic = raw.to_string();
        Ok(())
    }

    /// Replace the word list of `language` with `raw` split on `/`.
    pub fn set_words(&mut self, language: Language, raw: &str) -> Result<(), EditError> {
        self.require_block(language)?.words = split_words(raw);
        Ok(())
    }

    fn require_block(&mut self, language: Language) -> Result<&mut LanguageBlock, EditError> {
        self.block_mut(language)
            .ok_or(EditError::MissingLanguageBlock { language })
    }
}

/// Coerce form text to a card id.
///
/// Surrounding whitespace is ignored and blank text counts as zero. Decimal,
/// fractional and exponent forms are accepted; anything else, or a value
/// that is not finite, yields [`CardId::NotANumber`]. Whole numbers that fit
/// in `i64` are stored as integers so they serialise without a fraction.
pub fn parse_id(raw: &str) -> CardId {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CardId::from(0);
    }
    // `f64::from_str` also accepts "inf" and "NaN"; both end up non-finite
    // and fall through to the sentinel below.
    let Ok(value) = trimmed.parse::<f64>() else {
        return CardId::NotANumber;
    };
    if !value.is_finite() {
        return CardId::NotANumber;
    }
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return CardId::from(value as i64);
    }
    serde_json::Number::from_f64(value)
        .map(CardId::Number)
        .unwrap_or(CardId::NotANumber)
}

/// Split word-list text on `/`. Segments are kept as typed: no trimming, and
/// empty segments stay, so `""` yields a single empty word.
pub fn split_words(raw: &str) -> Vec<String> {
    raw.split(WORD_DELIMITER).map(str::to_string).collect()
}

/// Inverse of [`split_words`] for display in a text field.
pub fn join_words(words: &[String]) -> String {
    let mut buf = [0u8; 4];
    let delimiter: &str = WORD_DELIMITER.encode_utf8(&mut buf);
    words.join(delimiter)
}
