/// A toolbar or dialog action, translated into an operation against the
/// content surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// A named formatting command executed by the platform's rich-text
    /// primitive against the current selection (bold, justifyLeft,
    /// insertOrderedList, fontName, foreColor, ...).
    Format {
        name: String,
        value: Option<String>,
    },
    /// Insert literal text at the caret (emoji picker, programmatic
    /// insertion). The text is escaped, not interpreted as markup.
    InsertText(String),
    /// Insert raw markup at the caret.
    InsertHtml(String),
    /// Insert a hyperlink. With display text, a new anchor opening in a new
    /// tab is inserted; without it the current selection is wrapped as a
    /// link instead.
    InsertLink { url: String, text: String },
    /// Insert an image sized to its container (width bounded, height auto).
    InsertImage { url: String, alt: String },
    /// Replace the whole document (file import, programmatic set).
    ReplaceContent(String),
}

impl EditorCommand {
    /// A formatting command with no argument.
    pub fn format(name: impl Into<String>) -> Self {
        Self::Format {
            name: name.into(),
            value: None,
        }
    }

    /// A formatting command carrying an argument.
    pub fn format_with(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Format {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Short label for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::InsertText(_) => "insert text",
            Self::InsertHtml(_) => "insert markup",
            Self::InsertLink { .. } => "insert link",
            Self::InsertImage { .. } => "insert image",
            Self::ReplaceContent(_) => "replace content",
        }
    }
}
