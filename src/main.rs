#![warn(clippy::all, rust_2018_idioms)]

use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "eframe wysiwyg",
        native_options,
        Box::new(|cc| Ok(Box::new(eframe_wysiwyg::EditorApp::new(cc)))),
    )
}
