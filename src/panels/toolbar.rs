use eframe::egui;

use crate::command::EditorCommand;
use crate::editor::Editor;
use crate::overlay::ColorTarget;

#[cfg(not(target_arch = "wasm32"))]
use crate::file_handler::DEFAULT_EXPORT_NAME;

const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Georgia",
    "Times New Roman",
    "Courier New",
    "Verdana",
    "Helvetica",
];

// execCommand font sizes 1-7 and the point sizes they render as.
const FONT_SIZES: &[(&str, &str)] = &[
    ("1", "8pt"),
    ("2", "10pt"),
    ("3", "12pt"),
    ("4", "14pt"),
    ("5", "18pt"),
    ("6", "24pt"),
    ("7", "36pt"),
];

const BLOCK_FORMATS: &[(&str, &str)] = &[
    ("h1", "Heading 1"),
    ("h2", "Heading 2"),
    ("h3", "Heading 3"),
    ("h4", "Heading 4"),
    ("h5", "Heading 5"),
    ("h6", "Heading 6"),
    ("p", "Paragraph"),
];

/// The sectioned formatting toolbar. Sections are gated by the editor's
/// [`ToolbarConfig`](crate::options::ToolbarConfig); buttons go inert when
/// the editor is disabled.
pub fn toolbar(editor: &mut Editor, ui: &mut egui::Ui) {
    let config = editor.options().toolbar;
    let enabled = !editor.options().disabled;

    ui.horizontal_wrapped(|ui| {
        if config.show_history {
            if ui
                .add_enabled(enabled && editor.can_undo(), egui::Button::new("Undo"))
                .on_hover_text("Undo (Ctrl+Z)")
                .clicked()
            {
                editor.undo();
            }
            if ui
                .add_enabled(enabled && editor.can_redo(), egui::Button::new("Redo"))
                .on_hover_text("Redo (Ctrl+Y)")
                .clicked()
            {
                editor.redo();
            }
            ui.separator();
        }

        if config.show_formatting {
            ui.add_enabled_ui(enabled, |ui| {
                ui.menu_button("Font", |ui| {
                    for family in FONT_FAMILIES {
                        if ui.button(*family).clicked() {
                            let _ = editor.apply(EditorCommand::format_with("fontName", *family));
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("Size", |ui| {
                    for (value, label) in FONT_SIZES {
                        if ui.button(*label).clicked() {
                            let _ = editor.apply(EditorCommand::format_with("fontSize", *value));
                            ui.close_menu();
                        }
                    }
                });
            });

            command_button(
                editor,
                ui,
                egui::RichText::new("B").strong(),
                "Bold (Ctrl+B)",
                EditorCommand::format("bold"),
            );
            command_button(
                editor,
                ui,
                egui::RichText::new("I").italics(),
                "Italic (Ctrl+I)",
                EditorCommand::format("italic"),
            );
            command_button(
                editor,
                ui,
                egui::RichText::new("U").underline(),
                "Underline (Ctrl+U)",
                EditorCommand::format("underline"),
            );
            command_button(
                editor,
                ui,
                egui::RichText::new("S").strikethrough(),
                "Strikethrough",
                EditorCommand::format("strikeThrough"),
            );
            ui.separator();
        }

        if config.show_alignment {
            command_button(editor, ui, "Left", "Align Left", EditorCommand::format("justifyLeft"));
            command_button(
                editor,
                ui,
                "Center",
                "Align Center",
                EditorCommand::format("justifyCenter"),
            );
            command_button(
                editor,
                ui,
                "Right",
                "Align Right",
                EditorCommand::format("justifyRight"),
            );
            command_button(editor, ui, "Justify", "Justify", EditorCommand::format("justifyFull"));
            ui.separator();
        }

        if config.show_lists {
            command_button(
                editor,
                ui,
                "• List",
                "Bulleted List",
                EditorCommand::format("insertUnorderedList"),
            );
            command_button(
                editor,
                ui,
                "1. List",
                "Numbered List",
                EditorCommand::format("insertOrderedList"),
            );
            command_button(editor, ui, "Indent", "Increase Indent", EditorCommand::format("indent"));
            command_button(
                editor,
                ui,
                "Outdent",
                "Decrease Indent",
                EditorCommand::format("outdent"),
            );
            ui.separator();
        }

        if config.show_headers {
            ui.add_enabled_ui(enabled, |ui| {
                ui.menu_button("Format", |ui| {
                    for (value, label) in BLOCK_FORMATS {
                        if ui.button(*label).clicked() {
                            let _ = editor.apply(EditorCommand::format_with("formatBlock", *value));
                            ui.close_menu();
                        }
                    }
                });
            });
            ui.separator();
        }

        if config.show_colors {
            if ui
                .add_enabled(enabled, egui::Button::new("Text color"))
                .on_hover_text("Text Color")
                .clicked()
            {
                let overlay = editor.overlay_mut();
                overlay.color_target = ColorTarget::Text;
                overlay.show_color_picker = !overlay.show_color_picker;
            }
            if ui
                .add_enabled(enabled, egui::Button::new("Highlight"))
                .on_hover_text("Background Color")
                .clicked()
            {
                let overlay = editor.overlay_mut();
                overlay.color_target = ColorTarget::Background;
                overlay.show_color_picker = !overlay.show_color_picker;
            }
            ui.separator();
        }

        if config.show_insert {
            if ui
                .add_enabled(enabled, egui::Button::new("Link"))
                .on_hover_text("Insert Link")
                .clicked()
            {
                let overlay = editor.overlay_mut();
                overlay.show_link_dialog = !overlay.show_link_dialog;
            }
            if ui
                .add_enabled(enabled, egui::Button::new("Image"))
                .on_hover_text("Insert Image")
                .clicked()
            {
                let overlay = editor.overlay_mut();
                overlay.show_image_dialog = !overlay.show_image_dialog;
            }
            if ui
                .add_enabled(enabled, egui::Button::new("Emoji"))
                .on_hover_text("Insert Emoji")
                .clicked()
            {
                let overlay = editor.overlay_mut();
                overlay.show_emoji_picker = !overlay.show_emoji_picker;
            }
            ui.separator();
        }

        if config.show_utility {
            command_button(
                editor,
                ui,
                "Clear",
                "Clear Format",
                EditorCommand::format("removeFormat"),
            );
            #[cfg(not(target_arch = "wasm32"))]
            if ui
                .add_enabled(enabled, egui::Button::new("Export"))
                .on_hover_text("Export Content")
                .clicked()
            {
                if let Err(err) = editor.export_to(DEFAULT_EXPORT_NAME) {
                    log::error!("export failed: {err}");
                }
            }
            if ui
                .add_enabled(enabled, egui::Button::new("Import"))
                .on_hover_text("Import Content")
                .clicked()
            {
                let overlay = editor.overlay_mut();
                overlay.show_import_hint = !overlay.show_import_hint;
            }
        }
    });
}

fn command_button(
    editor: &mut Editor,
    ui: &mut egui::Ui,
    label: impl Into<egui::WidgetText>,
    hover: &str,
    command: EditorCommand,
) {
    let enabled = !editor.options().disabled;
    if ui
        .add_enabled(enabled, egui::Button::new(label))
        .on_hover_text(hover)
        .clicked()
    {
        let _ = editor.apply(command);
    }
}
