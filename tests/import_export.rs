use std::sync::Arc;

use eframe::egui;

use eframe_wysiwyg::file_handler::{self, resolve_drop};
use eframe_wysiwyg::{Editor, EditorCommand, FileError};

fn dropped(name: &str, mime: &str, contents: &[u8]) -> egui::DroppedFile {
    egui::DroppedFile {
        name: name.to_owned(),
        mime: mime.to_owned(),
        bytes: Some(Arc::from(contents)),
        ..Default::default()
    }
}

fn temp_path(file_name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("eframe_wysiwyg_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(file_name)
}

#[test]
fn resolve_drop_reads_html_by_mime() {
    let import = resolve_drop(vec![dropped("page.html", "text/html", b"<p>hi</p>")]).unwrap();
    assert_eq!(import.name, "page.html");
    assert_eq!(import.contents, "<p>hi</p>");
}

#[test]
fn resolve_drop_accepts_txt_by_extension() {
    let import = resolve_drop(vec![dropped("notes.txt", "", b"plain words")]).unwrap();
    assert_eq!(import.contents, "plain words");
}

#[test]
fn resolve_drop_skips_unsupported_files() {
    assert!(resolve_drop(vec![dropped("photo.png", "image/png", b"\x89PNG")]).is_none());
}

#[test]
fn newest_supported_drop_supersedes_older_ones() {
    let import = resolve_drop(vec![
        dropped("stale.html", "text/html", b"<p>stale</p>"),
        dropped("photo.png", "image/png", b"\x89PNG"),
        dropped("fresh.txt", "text/plain", b"fresh"),
    ])
    .unwrap();

    assert_eq!(import.name, "fresh.txt");
    assert_eq!(import.contents, "fresh");
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let import = resolve_drop(vec![dropped("odd.txt", "text/plain", b"ok\xFFok")]).unwrap();
    assert_eq!(import.contents, "ok\u{FFFD}ok");
}

#[test]
fn export_writes_the_current_document() {
    let mut editor = Editor::default();
    editor
        .apply(EditorCommand::InsertHtml("<p>saved</p>".into()))
        .unwrap();

    let path = temp_path("document.html");
    editor.export_to(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>saved</p>");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn import_file_round_trips_through_disk() {
    let path = temp_path("roundtrip.html");
    std::fs::write(&path, "<p>from disk</p>").unwrap();

    let mut editor = Editor::default();
    editor.import_file(&path).unwrap();

    assert_eq!(editor.html(), "<p>from disk</p>");
    assert!(editor.can_undo());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn import_file_rejects_unsupported_extensions() {
    let path = temp_path("binary.bin");
    std::fs::write(&path, b"data").unwrap();

    let mut editor = Editor::default();
    let err = editor.import_file(&path).unwrap_err();
    assert!(matches!(err, FileError::UnsupportedType(_)));
    assert_eq!(editor.html(), "");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn read_document_reports_missing_files() {
    let err = file_handler::read_document(std::path::Path::new("/nonexistent/x.html")).unwrap_err();
    assert!(matches!(err, FileError::Read(_)));
}
