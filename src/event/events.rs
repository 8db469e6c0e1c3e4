use std::path::PathBuf;

/// Serialized content paired with its plain-text projection, as handed to
/// change subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContent {
    pub html: String,
    pub text: String,
}

/// Events broadcast by the command dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The document changed: a recorded edit, an undo or a redo.
    ContentChanged(EditorContent),
    /// Undo/redo availability after a history move; toolbars re-check
    /// their buttons on this.
    HistoryMoved { can_undo: bool, can_redo: bool },
    /// A document was imported and recorded as a new history entry.
    DocumentImported { name: String },
    /// The current document was written out.
    DocumentExported { path: PathBuf },
}
