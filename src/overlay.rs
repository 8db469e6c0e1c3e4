use eframe::egui::Color32;

/// Which color the picker is currently choosing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTarget {
    #[default]
    Text,
    Background,
}

impl ColorTarget {
    /// The formatting command the picked color is applied with.
    pub fn command_name(self) -> &'static str {
        match self {
            Self::Text => "foreColor",
            Self::Background => "backColor",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Text => "Text Color",
            Self::Background => "Background Color",
        }
    }
}

/// Transient UI state for the pickers and dialogs.
///
/// Passed by value between the toolbar and the overlay views; nothing here
/// is shared or global, one record per editor instance.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    pub show_emoji_picker: bool,
    pub show_color_picker: bool,
    pub show_link_dialog: bool,
    pub show_image_dialog: bool,
    pub show_import_hint: bool,
    pub color_target: ColorTarget,
    pub custom_color: Color32,
    pub link_url: String,
    pub link_text: String,
    pub image_url: String,
    pub image_alt: String,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            show_emoji_picker: false,
            show_color_picker: false,
            show_link_dialog: false,
            show_image_dialog: false,
            show_import_hint: false,
            color_target: ColorTarget::Text,
            custom_color: Color32::BLACK,
            link_url: String::new(),
            link_text: String::new(),
            image_url: String::new(),
            image_alt: String::new(),
        }
    }
}

impl OverlayState {
    pub fn close_all(&mut self) {
        self.show_emoji_picker = false;
        self.show_color_picker = false;
        self.show_link_dialog = false;
        self.show_image_dialog = false;
        self.show_import_hint = false;
    }

    pub(crate) fn clear_link_draft(&mut self) {
        self.link_url.clear();
        self.link_text.clear();
    }

    pub(crate) fn clear_image_draft(&mut self) {
        self.image_url.clear();
        self.image_alt.clear();
    }
}
