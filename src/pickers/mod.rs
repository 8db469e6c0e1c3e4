mod color;
mod emoji;
mod image;
mod link;

use eframe::egui;

use crate::command::EditorCommand;
use crate::overlay::OverlayState;

pub use color::PRESET_COLORS;
pub use emoji::EMOJIS;

/// Draws whichever overlays are open and translates a pick into a command.
/// At most one command is produced per frame.
pub fn show_overlays(ctx: &egui::Context, overlay: &mut OverlayState) -> Option<EditorCommand> {
    let mut command = None;
    if overlay.show_emoji_picker {
        command = command.or(emoji::show(ctx, overlay));
    }
    if overlay.show_color_picker {
        command = command.or(color::show(ctx, overlay));
    }
    if overlay.show_link_dialog {
        command = command.or(link::show(ctx, overlay));
    }
    if overlay.show_image_dialog {
        command = command.or(image::show(ctx, overlay));
    }
    if overlay.show_import_hint {
        import_hint(ctx, overlay);
    }
    command
}

fn import_hint(ctx: &egui::Context, overlay: &mut OverlayState) {
    let mut open = overlay.show_import_hint;
    egui::Window::new("Import Content")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Drop an .html or .txt file onto the editor to import it.");
            ui.label("The file replaces the current document and is recorded in the history.");
        });
    overlay.show_import_hint = open;
}
