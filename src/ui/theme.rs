// Card Editor - ui/theme.rs
//
// Colours and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for the not-a-number marker next to an id field.
pub const INVALID_ID: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Colour for the note shown in place of a missing language block.
pub const MISSING_BLOCK: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Colour for secondary labels (language codes, counts).
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Layout constants.
pub const ID_FIELD_WIDTH: f32 = 80.0;
pub const TOPIC_FIELD_WIDTH: f32 = 220.0;
pub const LABEL_COLUMN_WIDTH: f32 = 70.0;
pub const CARD_SPACING: f32 = 6.0;
