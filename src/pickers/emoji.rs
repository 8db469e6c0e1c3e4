use eframe::egui;

use crate::command::EditorCommand;
use crate::overlay::OverlayState;

/// A small starter set; hosts with bigger ambitions insert any text they
/// like through [`EditorCommand::InsertText`].
pub const EMOJIS: &[&str] = &[
    "😀", "😂", "😍", "😎", "😢", "😮", "🙏", "👍", "👎", "👏", "💪", "🙌", "❤", "🔥", "✨", "🎉",
    "⭐", "💡", "✅", "❌", "☕", "🍕", "🚀", "🌈",
];

const COLUMNS: usize = 8;

pub fn show(ctx: &egui::Context, overlay: &mut OverlayState) -> Option<EditorCommand> {
    let mut open = overlay.show_emoji_picker;
    let mut picked = None;

    egui::Window::new("Insert Emoji")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("emoji_grid")
                .num_columns(COLUMNS)
                .show(ui, |ui| {
                    for (i, emoji) in EMOJIS.iter().enumerate() {
                        if ui.button(*emoji).clicked() {
                            picked = Some(EditorCommand::InsertText((*emoji).to_owned()));
                        }
                        if (i + 1) % COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    // Picking closes the window, like the close button does.
    overlay.show_emoji_picker = open && picked.is_none();
    picked
}
