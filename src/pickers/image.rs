use eframe::egui;

use crate::command::EditorCommand;
use crate::overlay::OverlayState;

/// The insert-image dialog. The URL is required; alt text is optional.
pub fn show(ctx: &egui::Context, overlay: &mut OverlayState) -> Option<EditorCommand> {
    let mut open = overlay.show_image_dialog;
    let mut inserted = None;
    let mut cancelled = false;

    egui::Window::new("Insert Image")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("image_fields").num_columns(2).show(ui, |ui| {
                ui.label("Image URL *");
                ui.text_edit_singleline(&mut overlay.image_url);
                ui.end_row();
                ui.label("Alt text");
                ui.text_edit_singleline(&mut overlay.image_alt);
                ui.end_row();
            });

            let url_ok = !overlay.image_url.trim().is_empty();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(url_ok, egui::Button::new("Insert Image"))
                    .clicked()
                {
                    inserted = Some(EditorCommand::InsertImage {
                        url: overlay.image_url.trim().to_owned(),
                        alt: overlay.image_alt.trim().to_owned(),
                    });
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if inserted.is_some() {
        overlay.clear_image_draft();
    }
    overlay.show_image_dialog = open && inserted.is_none() && !cancelled;
    inserted
}
