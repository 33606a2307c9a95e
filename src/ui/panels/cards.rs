// Card Editor - ui/panels/cards.rs
//
// Central card list: one group per card with an id field and, for each
// editable language, a topic field and a `/`-separated words field.
//
// Field text lives in `state.drafts`. Changed fields are collected while
// rendering and applied through `AppState::edit_*` afterwards, so the
// collection is only touched through its edit operations.

use crate::app::state::AppState;
use crate::core::model::Language;
use crate::ui::theme;

/// A field whose text changed this frame.
enum FieldEdit {
    Id(usize),
    Topic(usize, Language),
    Words(usize, Language),
}

/// Render the card list (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.drafts.is_empty() {
        ui.centered_and_justified(|ui| {
            let message = if state.current_file.is_some() {
                "The loaded file contains no cards."
            } else {
                "Open a card file (File > Open\u{2026}) to start editing."
            };
            ui.label(message);
        });
        return;
    }

    ui.horizontal(|ui| {
        ui.label(format!("{} cards", state.drafts.len()));
        ui.label(
            egui::RichText::new("Export writes the cards as they were loaded.")
                .small()
                .color(theme::MUTED_TEXT),
        );
    });
    ui.separator();

    let mut edits = Vec::new();
    let collection = &state.collection;
    let drafts = &mut state.drafts;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for (index, draft) in drafts.iter_mut().enumerate() {
                let id_invalid = collection
                    .cards()
                    .get(index)
                    .is_some_and(|c| c.id.is_nan());

                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("#{}", index + 1))
                                .color(theme::MUTED_TEXT),
                        );
                        ui.label("Id:");
                        let resp = ui.add(
                            egui::TextEdit::singleline(&mut draft.id)
                                .desired_width(theme::ID_FIELD_WIDTH),
                        );
                        if resp.changed() {
                            edits.push(FieldEdit::Id(index));
                        }
                        if id_invalid {
                            ui.colored_label(theme::INVALID_ID, "not a number");
                        }
                    });

                    egui::Grid::new(("card_fields", index))
                        .num_columns(3)
                        .spacing([8.0, 4.0])
                        .min_col_width(theme::LABEL_COLUMN_WIDTH)
                        .show(ui, |ui| {
                            for &language in Language::all() {
                                ui.label(egui::RichText::new(language.code()).strong())
                                    .on_hover_text(language.label());

                                match draft.block_mut(language) {
                                    Some(block) => {
                                        let topic = ui.add(
                                            egui::TextEdit::singleline(&mut block.topic)
                                                .hint_text("topic")
                                                .desired_width(theme::TOPIC_FIELD_WIDTH),
                                        );
                                        if topic.changed() {
                                            edits.push(FieldEdit::Topic(index, language));
                                        }
                                        let words = ui.add(
                                            egui::TextEdit::singleline(&mut block.words)
                                                .hint_text("word/word/\u{2026}")
                                                .desired_width(ui.available_width()),
                                        );
                                        if words.changed() {
                                            edits.push(FieldEdit::Words(index, language));
                                        }
                                    }
                                    None => {
                                        ui.colored_label(
                                            theme::MISSING_BLOCK,
                                            format!("No {} block", language.label()),
                                        );
                                        ui.label("");
                                    }
                                }
                                ui.end_row();
                            }
                        });
                });
                ui.add_space(theme::CARD_SPACING);
            }
        });

    for edit in edits {
        match edit {
            FieldEdit::Id(index) => state.edit_id(index),
            FieldEdit::Topic(index, language) => state.edit_topic(index, language),
            FieldEdit::Words(index, language) => state.edit_words(index, language),
        }
    }
}
