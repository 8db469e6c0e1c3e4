#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use eframe::egui;
use thiserror::Error;

/// File name the export button writes to.
pub const DEFAULT_EXPORT_NAME: &str = "document.html";

/// Errors from document import and export.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("failed to read document: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write document: {0}")]
    Write(#[source] std::io::Error),
}

/// A document picked up from a drop or a path, decoded as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedDocument {
    pub name: String,
    pub contents: String,
}

/// Collects files dropped onto the application and turns the newest
/// supported one into an import.
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up newly dropped files from the UI context.
    /// Returns true if there is a fresh batch to process.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_files = false;
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_files = true;
            }
        });
        new_files
    }

    /// Resolves the pending batch into a single document, newest wins.
    pub fn take_import(&mut self) -> Option<ImportedDocument> {
        resolve_drop(std::mem::take(&mut self.dropped_files))
    }

    pub fn clear(&mut self) {
        self.dropped_files.clear();
    }

    /// Overlay shown while files hover over the window.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop to import:".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                } else {
                    text += "\n(unknown file)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

/// Resolves a batch of dropped files into at most one imported document.
///
/// Only `.html` and `.txt` documents are accepted; anything else is skipped
/// with a warning. When several supported files land in one batch, a later
/// file supersedes an earlier one, so a stale read never overwrites a newer
/// drop.
pub fn resolve_drop(dropped: Vec<egui::DroppedFile>) -> Option<ImportedDocument> {
    let mut import: Option<ImportedDocument> = None;
    for file in &dropped {
        if !is_text_document(file) {
            log::warn!("dropped file is not a supported type: {}", display_name(file));
            continue;
        }
        let Some(document) = read_dropped(file) else {
            continue;
        };
        if let Some(stale) = import.replace(document) {
            log::debug!("import of {} superseded by a newer drop", stale.name);
        }
    }
    import
}

fn read_dropped(file: &egui::DroppedFile) -> Option<ImportedDocument> {
    let name = display_name(file);
    if let Some(bytes) = &file.bytes {
        return Some(ImportedDocument {
            name,
            contents: String::from_utf8_lossy(bytes).into_owned(),
        });
    }

    if let Some(path) = &file.path {
        #[cfg(not(target_arch = "wasm32"))]
        {
            return match std::fs::read(path) {
                Ok(bytes) => Some(ImportedDocument {
                    name,
                    contents: String::from_utf8_lossy(&bytes).into_owned(),
                }),
                Err(err) => {
                    log::error!("failed to read dropped file {}: {err}", path.display());
                    None
                }
            };
        }
        #[cfg(target_arch = "wasm32")]
        {
            log::warn!("file path access not supported on this platform: {name}");
            return None;
        }
    }

    log::warn!("dropped file has no accessible data: {name}");
    None
}

/// Checks the MIME type when one is present, the extension otherwise.
fn is_text_document(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return matches!(file.mime.as_str(), "text/html" | "text/plain");
    }
    let name = if let Some(path) = &file.path {
        path.to_string_lossy().into_owned()
    } else {
        file.name.clone()
    };
    has_supported_extension(&name)
}

fn has_supported_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".html") || lower.ends_with(".htm") || lower.ends_with(".txt")
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Writes `html` to `path` as the exported document.
#[cfg(not(target_arch = "wasm32"))]
pub fn export(path: &Path, html: &str) -> Result<(), FileError> {
    std::fs::write(path, html).map_err(FileError::Write)?;
    log::info!("exported document to {}", path.display());
    Ok(())
}

/// Reads a document from disk for import; the type check mirrors the
/// drop path.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_document(path: &Path) -> Result<ImportedDocument, FileError> {
    let name = path.display().to_string();
    if !has_supported_extension(&name) {
        return Err(FileError::UnsupportedType(name));
    }
    let bytes = std::fs::read(path).map_err(FileError::Read)?;
    Ok(ImportedDocument {
        name,
        contents: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
