use crate::command::{CommandError, CommandResult, EditorCommand};
use crate::event::{EditorContent, EditorEvent, EventBus, EventHandler};
use crate::history::History;
use crate::surface::EditSurface;

/// Executes editor commands against a content surface and keeps the
/// snapshot history and change subscribers in sync.
///
/// The surface is mutated first; only then is its serialized state read
/// back and recorded. Undo and redo run the other way around: the history
/// cursor moves and the restored snapshot is pushed onto the surface.
#[derive(Debug)]
pub struct CommandDispatcher {
    history: History,
    bus: EventBus,
}

impl CommandDispatcher {
    /// Creates a dispatcher whose history is seeded with `initial_snapshot`.
    pub fn new(initial_snapshot: impl Into<String>) -> Self {
        Self::with_history(History::new(initial_snapshot))
    }

    /// Creates a dispatcher over an existing history log.
    pub fn with_history(history: History) -> Self {
        Self {
            history,
            bus: EventBus::new(),
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Executes `command` against `surface`, then records the resulting
    /// snapshot and notifies subscribers.
    pub fn apply(&mut self, surface: &mut dyn EditSurface, command: EditorCommand) -> CommandResult {
        log::debug!("applying {} command", command.describe());
        match command {
            EditorCommand::Format { name, value } => {
                surface.execute_command(&name, value.as_deref());
            }
            EditorCommand::InsertText(text) => {
                surface.execute_command("insertText", Some(&text));
            }
            EditorCommand::InsertHtml(html) => {
                surface.execute_command("insertHTML", Some(&html));
            }
            EditorCommand::InsertLink { url, text } => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(CommandError::MissingUrl);
                }
                if text.is_empty() {
                    surface.execute_command("createLink", Some(url));
                } else {
                    let anchor = format!("<a href=\"{url}\" target=\"_blank\">{text}</a>");
                    surface.execute_command("insertHTML", Some(&anchor));
                }
            }
            EditorCommand::InsertImage { url, alt } => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(CommandError::MissingUrl);
                }
                let image =
                    format!("<img src=\"{url}\" alt=\"{alt}\" style=\"max-width: 100%; height: auto;\" />");
                surface.execute_command("insertHTML", Some(&image));
            }
            EditorCommand::ReplaceContent(html) => {
                surface.set_snapshot(&html);
            }
        }
        self.record_edit(surface);
        Ok(())
    }

    /// Records a mutation that already happened on the surface (direct
    /// typing). The surface is the canonical state, so this only snapshots
    /// it and notifies subscribers.
    pub fn record_edit(&mut self, surface: &dyn EditSurface) {
        let html = surface.snapshot();
        self.history.record(html.clone());
        self.broadcast(html, surface.plain_text());
    }

    /// Moves back one snapshot and restores it onto the surface. Returns
    /// false (and emits nothing) when already at the oldest entry.
    pub fn undo(&mut self, surface: &mut dyn EditSurface) -> bool {
        let Some(snapshot) = self.history.undo().map(str::to_owned) else {
            return false;
        };
        surface.set_snapshot(&snapshot);
        self.broadcast(snapshot, surface.plain_text());
        true
    }

    /// Moves forward one snapshot and restores it onto the surface. Returns
    /// false (and emits nothing) when already at the newest entry.
    pub fn redo(&mut self, surface: &mut dyn EditSurface) -> bool {
        let Some(snapshot) = self.history.redo().map(str::to_owned) else {
            return false;
        };
        surface.set_snapshot(&snapshot);
        self.broadcast(snapshot, surface.plain_text());
        true
    }

    pub(crate) fn emit(&self, event: EditorEvent) {
        self.bus.emit(event);
    }

    fn broadcast(&self, html: String, text: String) {
        self.bus
            .emit(EditorEvent::ContentChanged(EditorContent { html, text }));
        self.bus.emit(EditorEvent::HistoryMoved {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }
}
