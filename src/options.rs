use serde::{Deserialize, Serialize};

/// Visibility of each toolbar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub show_history: bool,
    pub show_formatting: bool,
    pub show_alignment: bool,
    pub show_lists: bool,
    pub show_headers: bool,
    pub show_colors: bool,
    pub show_insert: bool,
    pub show_utility: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            show_history: true,
            show_formatting: true,
            show_alignment: true,
            show_lists: true,
            show_headers: true,
            show_colors: true,
            show_insert: true,
            show_utility: true,
        }
    }
}

/// Construction parameters for the editor widget. Everything is optional
/// and defaults to the stock configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorOptions {
    /// Initial document markup.
    pub initial_content: String,
    /// Hint shown while the document is empty.
    pub placeholder: String,
    pub show_toolbar: bool,
    pub show_status_bar: bool,
    pub toolbar: ToolbarConfig,
    /// Minimum height of the content area, in points.
    pub min_height: f32,
    /// Maximum height of the content area; content scrolls beyond it.
    pub max_height: Option<f32>,
    /// When set, the surface is read-only and every mutating operation is
    /// a no-op.
    pub disabled: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_content: String::new(),
            placeholder: "Start typing your content here...".to_owned(),
            show_toolbar: true,
            show_status_bar: true,
            toolbar: ToolbarConfig::default(),
            min_height: 384.0,
            max_height: None,
            disabled: false,
        }
    }
}
