// Card Editor - core/export.rs
//
// JSON serialisation of a card list for export.
// Core layer: renders to a String or any Write trait object; the caller
// decides where the bytes go.

use crate::core::model::Card;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;

/// Top-level shape of an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportLayout {
    /// A bare JSON array of cards.
    #[default]
    BareArray,
    /// `{ "cards": [...] }`, the same envelope Load expects.
    Envelope,
}

/// Formatting choices for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub layout: ExportLayout,
    /// Indent the output instead of writing it on one line.
    pub pretty: bool,
}

#[derive(Serialize)]
struct Envelope<'a> {
    cards: &'a [Card],
}

/// Serialise `cards` to a JSON string.
pub fn render(cards: &[Card], options: &ExportOptions) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write(cards, &mut buf, options)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialise `cards` as JSON into `writer`. Returns the number of cards written.
pub fn write<W: Write>(
    cards: &[Card],
    writer: W,
    options: &ExportOptions,
) -> Result<usize, ExportError> {
    let result = match (options.layout, options.pretty) {
        (ExportLayout::BareArray, false) => serde_json::to_writer(writer, cards),
        (ExportLayout::BareArray, true) => serde_json::to_writer_pretty(writer, cards),
        (ExportLayout::Envelope, false) => serde_json::to_writer(writer, &Envelope { cards }),
        (ExportLayout::Envelope, true) => {
            serde_json::to_writer_pretty(writer, &Envelope { cards })
        }
    };
    result.map_err(|e| ExportError::Json { source: e })?;
    Ok(cards.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CardId;
    use crate::core::normalize::default_languages;

    fn make_card(id: i64) -> Card {
        Card {
            id: CardId::from(id),
            languages: Some(default_languages()),
            ..Default::default()
        }
    }

    #[test]
    fn test_bare_array_export() {
        let cards = vec![make_card(1), make_card(2)];
        let output = render(&cards, &ExportOptions::default()).unwrap();

        assert!(output.starts_with('['));
        assert!(!output.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[1]["languages"]["uk"]["words"][1], "test2");
    }

    #[test]
    fn test_envelope_export() {
        let cards = vec![make_card(5)];
        let options = ExportOptions {
            layout: ExportLayout::Envelope,
            pretty: false,
        };
        let output = render(&cards, &options).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["cards"][0]["id"], 5);
    }

    #[test]
    fn test_pretty_export_is_indented() {
        let options = ExportOptions {
            pretty: true,
            ..Default::default()
        };
        let output = render(&[make_card(1)], &options).unwrap();
        assert!(output.contains("\n  {"));
    }

    #[test]
    fn test_empty_collection_exports_empty_array() {
        assert_eq!(render(&[], &ExportOptions::default()).unwrap(), "[]");
    }

    #[test]
    fn test_write_reports_card_count() {
        let mut buf = Vec::new();
        let count = write(
            &[make_card(1), make_card(2), make_card(3)],
            &mut buf,
            &ExportOptions::default(),
        )
        .unwrap();
        assert_eq!(count, 3);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_key_order_is_typed_fields_then_extras_in_input_order() {
        let card: Card = serde_json::from_str(
            r#"{"zeta": 1, "level": "B2", "id": 9, "alpha": true, "languages": {
                "pl": {"topic": "p", "words": []},
                "uk": {"topic": "u", "words": []},
                "en": {"topic": "e", "words": []}
            }}"#,
        )
        .unwrap();
        let output = render(&[card], &ExportOptions::default()).unwrap();

        let order = |keys: &[&str]| {
            let positions: Vec<usize> = keys
                .iter()
                .map(|k| output.find(&format!("\"{k}\"")).unwrap())
                .collect();
            positions.windows(2).all(|w| w[0] < w[1])
        };
        assert!(order(&["id", "languages", "zeta", "level", "alpha"]));
        assert!(order(&["en", "uk", "pl"]));
    }
}
