// Card Editor - core/normalize.rs
//
// Post-load normalisation: guarantees every card carries the editable
// language blocks, backfilling absent ones with a placeholder block.
//
// Two backfill modes exist. `Chained` checks, in order, "no languages
// object", "no en block", "no uk block" and applies only the first rule that
// matches, so a card with a `languages` object but neither block ends up
// with `en` only. `Independent` fills each missing block on its own.

use crate::core::model::{Card, Language, LanguageBlock, Languages};
use crate::util::constants::{DEFAULT_TOPIC, DEFAULT_WORDS};

/// How absent language blocks are filled after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackfillMode {
    /// First matching rule only (at most one fill per card).
    #[default]
    Chained,
    /// Every missing editable block is filled.
    Independent,
}

impl BackfillMode {
    /// Parse a config value ("chained" / "independent"). Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "chained" => Some(BackfillMode::Chained),
            "independent" => Some(BackfillMode::Independent),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BackfillMode::Chained => "chained",
            BackfillMode::Independent => "independent",
        }
    }
}

/// A new placeholder block. Each call returns an independent instance.
pub fn default_block() -> LanguageBlock {
    LanguageBlock::new(
        DEFAULT_TOPIC,
        DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
    )
}

/// A `languages` object holding a placeholder block for every editable language.
pub fn default_languages() -> Languages {
    Languages {
        en: Some(default_block()),
        uk: Some(default_block()),
        ..Default::default()
    }
}

/// Normalise one card in place. Returns the number of blocks backfilled.
pub fn normalize_card(card: &mut Card, mode: BackfillMode) -> usize {
    let languages = match card.languages {
        Some(ref mut languages) => languages,
        None => {
            card.languages = Some(default_languages());
            return Language::all().len();
        }
    };

    match mode {
        BackfillMode::Chained => {
            if languages.en.is_none() {
                languages.en = Some(default_block());
                1
            } else if languages.uk.is_none() {
                languages.uk = Some(default_block());
                1
            } else {
                0
            }
        }
        BackfillMode::Independent => {
            let mut filled = 0;
            for &language in Language::all() {
                let slot = languages.slot_mut(language);
                if slot.is_none() {
                    *slot = Some(default_block());
                    filled += 1;
                }
            }
            filled
        }
    }
}

/// Normalise every card. Returns the total number of blocks backfilled.
pub fn normalize_cards(cards: &mut [Card], mode: BackfillMode) -> usize {
    let filled: usize = cards.iter_mut().map(|c| normalize_card(c, mode)).sum();
    tracing::debug!(
        cards = cards.len(),
        filled,
        mode = mode.name(),
        "Cards normalised"
    );
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder() -> LanguageBlock {
        LanguageBlock::new("Test", vec!["test".to_string(), "test2".to_string()])
    }

    fn card_from(json: &str) -> Card {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_languages_gets_both_blocks() {
        let mut card = card_from(r#"{"id": 1}"#);
        let filled = normalize_card(&mut card, BackfillMode::Chained);

        assert_eq!(filled, 2);
        assert_eq!(card.block(Language::En), Some(&placeholder()));
        assert_eq!(card.block(Language::Uk), Some(&placeholder()));
    }

    #[test]
    fn test_chained_empty_languages_fills_en_only() {
        let mut card = card_from(r#"{"id": 1, "languages": {}}"#);
        normalize_card(&mut card, BackfillMode::Chained);

        assert_eq!(card.block(Language::En), Some(&placeholder()));
        assert!(card.block(Language::Uk).is_none());
    }

    #[test]
    fn test_independent_empty_languages_fills_both() {
        let mut card = card_from(r#"{"id": 1, "languages": {}}"#);
        let filled = normalize_card(&mut card, BackfillMode::Independent);

        assert_eq!(filled, 2);
        assert_eq!(card.block(Language::En), Some(&placeholder()));
        assert_eq!(card.block(Language::Uk), Some(&placeholder()));
    }

    #[test]
    fn test_missing_uk_only() {
        let mut card =
            card_from(r#"{"id": 1, "languages": {"en": {"topic": "A", "words": ["b"]}}}"#);
        normalize_card(&mut card, BackfillMode::Chained);

        assert_eq!(card.block(Language::En).unwrap().topic, "A");
        assert_eq!(card.block(Language::Uk), Some(&placeholder()));
    }

    #[test]
    fn test_complete_card_untouched() {
        let json = r#"{"id": 1, "languages": {
            "en": {"topic": "A", "words": ["a"]},
            "uk": {"topic": "Б", "words": ["б"]}
        }}"#;
        let mut card = card_from(json);
        let before = card.clone();

        assert_eq!(normalize_card(&mut card, BackfillMode::Chained), 0);
        assert_eq!(normalize_card(&mut card, BackfillMode::Independent), 0);
        assert_eq!(card, before);
    }

    #[test]
    fn test_backfilled_blocks_are_not_shared() {
        let mut cards = vec![card_from(r#"{"id": 1}"#), card_from(r#"{"id": 2}"#)];
        normalize_cards(&mut cards, BackfillMode::Chained);

        cards[0]
            .block_mut(Language::En)
            .unwrap()
            .words
            .push("extra".to_string());

        assert_eq!(cards[1].block(Language::En), Some(&placeholder()));
        assert_eq!(cards[0].block(Language::Uk), Some(&placeholder()));
    }

    #[test]
    fn test_backfill_mode_names() {
        assert_eq!(BackfillMode::from_name("Chained"), Some(BackfillMode::Chained));
        assert_eq!(
            BackfillMode::from_name("independent"),
            Some(BackfillMode::Independent)
        );
        assert_eq!(BackfillMode::from_name("both"), None);
    }
}
