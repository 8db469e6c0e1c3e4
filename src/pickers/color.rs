use eframe::egui;
use eframe::egui::Color32;

use crate::command::EditorCommand;
use crate::overlay::OverlayState;

/// Preset swatches, grays first, then the color wheel.
pub const PRESET_COLORS: &[Color32] = &[
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0x33, 0x33, 0x33),
    Color32::from_rgb(0x66, 0x66, 0x66),
    Color32::from_rgb(0x99, 0x99, 0x99),
    Color32::from_rgb(0xCC, 0xCC, 0xCC),
    Color32::from_rgb(0xFF, 0xFF, 0xFF),
    Color32::from_rgb(0xFF, 0x00, 0x00),
    Color32::from_rgb(0xFF, 0x66, 0x00),
    Color32::from_rgb(0xFF, 0xCC, 0x00),
    Color32::from_rgb(0xFF, 0xFF, 0x00),
    Color32::from_rgb(0xCC, 0xFF, 0x00),
    Color32::from_rgb(0x66, 0xFF, 0x00),
    Color32::from_rgb(0x00, 0xFF, 0x00),
    Color32::from_rgb(0x00, 0xFF, 0x66),
    Color32::from_rgb(0x00, 0xFF, 0xCC),
    Color32::from_rgb(0x00, 0xFF, 0xFF),
    Color32::from_rgb(0x00, 0xCC, 0xFF),
    Color32::from_rgb(0x00, 0x66, 0xFF),
    Color32::from_rgb(0x00, 0x00, 0xFF),
    Color32::from_rgb(0x66, 0x00, 0xFF),
    Color32::from_rgb(0xCC, 0x00, 0xFF),
    Color32::from_rgb(0xFF, 0x00, 0xFF),
    Color32::from_rgb(0xFF, 0x00, 0xCC),
    Color32::from_rgb(0xFF, 0x00, 0x66),
];

const COLUMNS: usize = 6;

pub fn show(ctx: &egui::Context, overlay: &mut OverlayState) -> Option<EditorCommand> {
    let mut open = overlay.show_color_picker;
    let mut picked = None;
    let target = overlay.color_target;

    egui::Window::new(target.title())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("color_swatches")
                .num_columns(COLUMNS)
                .show(ui, |ui| {
                    for (i, &color) in PRESET_COLORS.iter().enumerate() {
                        let swatch = egui::Button::new("")
                            .fill(color)
                            .min_size(egui::vec2(24.0, 24.0));
                        if ui.add(swatch).on_hover_text(hex(color)).clicked() {
                            picked = Some(color);
                        }
                        if (i + 1) % COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Custom");
                ui.color_edit_button_srgba(&mut overlay.custom_color);
                if ui.button("Apply").clicked() {
                    picked = Some(overlay.custom_color);
                }
            });
        });

    let command = picked
        .map(|color| EditorCommand::format_with(target.command_name(), hex(color)));
    overlay.show_color_picker = open && command.is_none();
    command
}

fn hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}
