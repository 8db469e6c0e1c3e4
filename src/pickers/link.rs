use eframe::egui;

use crate::command::EditorCommand;
use crate::overlay::OverlayState;

/// The insert-link dialog. The URL is required; submission stays blocked
/// until one is entered. Display text is optional — without it the current
/// selection is wrapped instead.
pub fn show(ctx: &egui::Context, overlay: &mut OverlayState) -> Option<EditorCommand> {
    let mut open = overlay.show_link_dialog;
    let mut inserted = None;
    let mut cancelled = false;

    egui::Window::new("Insert Link")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("link_fields").num_columns(2).show(ui, |ui| {
                ui.label("URL *");
                ui.text_edit_singleline(&mut overlay.link_url);
                ui.end_row();
                ui.label("Display text");
                ui.text_edit_singleline(&mut overlay.link_text);
                ui.end_row();
            });

            let url_ok = !overlay.link_url.trim().is_empty();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(url_ok, egui::Button::new("Insert Link"))
                    .clicked()
                {
                    inserted = Some(EditorCommand::InsertLink {
                        url: overlay.link_url.trim().to_owned(),
                        text: overlay.link_text.trim().to_owned(),
                    });
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if inserted.is_some() {
        overlay.clear_link_draft();
    }
    overlay.show_link_dialog = open && inserted.is_none() && !cancelled;
    inserted
}
