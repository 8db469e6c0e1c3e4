use std::sync::Arc;

use parking_lot::Mutex;

use crate::editor::Editor;
use crate::event::EditorContent;
use crate::options::EditorOptions;

const DEMO_CONTENT: &str = "<h2>Welcome to the WYSIWYG Editor!</h2>\
<p>Start typing to see the magic happen. You can format text, add links, images, emojis and much more!</p>";

/// Demo shell hosting the editor widget next to a live output preview.
///
/// We derive Deserialize/Serialize so the document survives restarts.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorApp {
    document_html: String,
    // The widget holds callbacks and transient UI state; it is rebuilt from
    // the persisted document instead of being serialized.
    #[serde(skip)]
    editor: Option<Editor>,
    #[serde(skip)]
    preview: Arc<Mutex<EditorContent>>,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self {
            document_html: DEMO_CONTENT.to_owned(),
            editor: None,
            preview: Arc::new(Mutex::new(EditorContent::default())),
        }
    }
}

impl EditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.rebuild_editor();
        app
    }

    fn rebuild_editor(&mut self) {
        let editor = Editor::new(EditorOptions {
            initial_content: self.document_html.clone(),
            ..EditorOptions::default()
        });

        let preview = Arc::clone(&self.preview);
        editor.on_change(move |content| {
            *preview.lock() = content.clone();
        });
        *self.preview.lock() = editor.content();

        self.editor = Some(editor);
    }
}

impl eframe::App for EditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.editor.is_none() {
            self.rebuild_editor();
        }

        egui::SidePanel::right("output_preview")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.heading("Live Preview");
                let content = self.preview.lock().clone();

                ui.label("HTML output:");
                egui::ScrollArea::vertical()
                    .id_salt("html_output")
                    .max_height(240.0)
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(egui::RichText::new(content.html).monospace()).wrap());
                    });

                ui.separator();
                ui.label("Plain text:");
                egui::ScrollArea::vertical()
                    .id_salt("text_output")
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(content.text).wrap());
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("WYSIWYG Editor Demo");
            if let Some(editor) = self.editor.as_mut() {
                editor.show(ui);
                self.document_html = editor.html();
            }
        });
    }
}
