use eframe::egui;

/// The hint line under the content area.
pub fn status_bar(ui: &mut egui::Ui) {
    ui.separator();
    ui.label(
        egui::RichText::new(
            "Use Ctrl+Z to undo, Ctrl+Y to redo • Drop an .html or .txt file onto the editor to import",
        )
        .weak()
        .small(),
    );
}
