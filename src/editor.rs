use eframe::egui;

use crate::command::{CommandDispatcher, CommandResult, EditorCommand};
use crate::event::{ChangeListener, EditorContent, EditorEvent, EventHandler};
use crate::file_handler::FileHandler;
use crate::history::History;
use crate::options::EditorOptions;
use crate::overlay::OverlayState;
use crate::panels;
use crate::pickers;
use crate::surface::{EditSurface, TextSurface};

#[cfg(not(target_arch = "wasm32"))]
use crate::file_handler::{self as files, FileError};
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// The embeddable rich-text editing widget.
///
/// Owns the content surface, the snapshot history and the transient
/// overlay state; the host embeds it by calling [`Editor::show`] every
/// frame. One editor instance owns one history log — nothing is shared
/// between instances, including the undo/redo shortcuts, which are only
/// handled while this editor's content area has focus.
pub struct Editor {
    options: EditorOptions,
    surface: TextSurface,
    dispatcher: CommandDispatcher,
    overlay: OverlayState,
    files: FileHandler,
    content_focused: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl Editor {
    pub fn new(options: EditorOptions) -> Self {
        let surface = TextSurface::new(options.initial_content.clone());
        let dispatcher = CommandDispatcher::new(options.initial_content.clone());
        Self {
            options,
            surface,
            dispatcher,
            overlay: OverlayState::default(),
            files: FileHandler::new(),
            content_focused: false,
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    pub fn overlay_mut(&mut self) -> &mut OverlayState {
        &mut self.overlay
    }

    /// Subscribes a callback receiving the serialized content and its
    /// plain-text projection on every recorded change, undo and redo.
    pub fn on_change(&self, callback: impl FnMut(&EditorContent) + Send + 'static) {
        self.dispatcher
            .subscribe(Box::new(ChangeListener::new(callback)));
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.dispatcher.subscribe(handler);
    }

    /// Serialized markup of the current document.
    pub fn html(&self) -> String {
        self.surface.snapshot()
    }

    /// Plain-text projection of the current document.
    pub fn text(&self) -> String {
        self.surface.plain_text()
    }

    pub fn content(&self) -> EditorContent {
        EditorContent {
            html: self.html(),
            text: self.text(),
        }
    }

    pub fn history(&self) -> &History {
        self.dispatcher.history()
    }

    pub fn can_undo(&self) -> bool {
        self.dispatcher.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.dispatcher.can_redo()
    }

    /// Executes a command against the surface and records the result.
    /// A no-op while the editor is disabled.
    pub fn apply(&mut self, command: EditorCommand) -> CommandResult {
        if self.options.disabled {
            return Ok(());
        }
        let result = self.dispatcher.apply(&mut self.surface, command);
        if let Err(err) = &result {
            log::warn!("command rejected: {err}");
        }
        result
    }

    /// Steps the history back and restores the snapshot onto the surface.
    /// Returns whether anything happened.
    pub fn undo(&mut self) -> bool {
        !self.options.disabled && self.dispatcher.undo(&mut self.surface)
    }

    /// Steps the history forward and restores the snapshot onto the
    /// surface. Returns whether anything happened.
    pub fn redo(&mut self) -> bool {
        !self.options.disabled && self.dispatcher.redo(&mut self.surface)
    }

    /// Replaces the whole document and records it as a new history entry.
    pub fn set_content(&mut self, html: impl Into<String>) {
        let _ = self.apply(EditorCommand::ReplaceContent(html.into()));
    }

    /// Imports already-read file contents as the new document.
    pub fn import(&mut self, name: &str, contents: String) {
        if self.options.disabled {
            log::debug!("ignoring import of {name} while the editor is disabled");
            return;
        }
        log::info!("importing {name}");
        if self
            .apply(EditorCommand::ReplaceContent(contents))
            .is_ok()
        {
            self.dispatcher.emit(EditorEvent::DocumentImported {
                name: name.to_owned(),
            });
        }
    }

    /// Reads and imports a document from disk.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let document = files::read_document(path.as_ref())?;
        self.import(&document.name, document.contents);
        Ok(())
    }

    /// Writes the current document to `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        files::export(path, &self.surface.snapshot())?;
        self.dispatcher.emit(EditorEvent::DocumentExported {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Draws the whole widget: toolbar, content area, overlays, status bar.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.handle_shortcuts(ui);

        if self.options.show_toolbar {
            panels::toolbar(self, ui);
            ui.separator();
        }

        self.content_area(ui);

        if self.options.show_status_bar {
            panels::status_bar(ui);
        }

        if let Some(command) = pickers::show_overlays(ui.ctx(), &mut self.overlay) {
            let _ = self.apply(command);
        }

        self.poll_dropped_files(ui.ctx());
    }

    // Consumed before the text widget runs so its built-in history never
    // sees the shortcuts; gated on focus so a second editor on the same
    // screen is left alone.
    fn handle_shortcuts(&mut self, ui: &mut egui::Ui) {
        if self.options.disabled || !self.content_focused {
            return;
        }
        let (undo, redo) = ui.input_mut(|input| {
            let redo = input.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z)
                || input.consume_key(egui::Modifiers::COMMAND, egui::Key::Y);
            let undo = input.consume_key(egui::Modifiers::COMMAND, egui::Key::Z);
            (undo, redo)
        });
        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
    }

    fn content_area(&mut self, ui: &mut egui::Ui) {
        let mut buffer = self.surface.snapshot();
        let content_id = ui.id().with("content");
        let text_edit = egui::TextEdit::multiline(&mut buffer)
            .id(content_id)
            .hint_text(self.options.placeholder.as_str())
            .desired_width(f32::INFINITY)
            .min_size(egui::vec2(0.0, self.options.min_height))
            .interactive(!self.options.disabled)
            .lock_focus(true);

        let response = match self.options.max_height {
            Some(max_height) => {
                egui::ScrollArea::vertical()
                    .max_height(max_height)
                    .show(ui, |ui| ui.add(text_edit))
                    .inner
            }
            None => ui.add(text_edit),
        };

        self.content_focused = response.has_focus();
        if response.changed() && !self.options.disabled {
            self.surface.set_snapshot(&buffer);
            self.dispatcher.record_edit(&self.surface);
        }
    }

    fn poll_dropped_files(&mut self, ctx: &egui::Context) {
        self.files.preview_files_being_dropped(ctx);
        if !self.files.check_for_dropped_files(ctx) {
            return;
        }
        if self.options.disabled {
            log::warn!("ignoring dropped files while the editor is disabled");
            self.files.clear();
            return;
        }
        if let Some(document) = self.files.take_import() {
            self.import(&document.name, document.contents);
        }
    }
}
