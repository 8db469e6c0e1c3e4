use std::sync::Arc;

use parking_lot::Mutex;

use eframe_wysiwyg::{
    Editor, EditorCommand, EditorContent, EditorEvent, EditorOptions, EventHandler,
};

#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<EditorEvent>>>);

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.0.lock().push(event.clone());
    }
}

fn editor_with(options: EditorOptions) -> Editor {
    Editor::new(options)
}

#[test]
fn new_editor_seeds_surface_and_history() {
    let editor = editor_with(EditorOptions {
        initial_content: "<p>seed</p>".into(),
        ..EditorOptions::default()
    });

    assert_eq!(editor.html(), "<p>seed</p>");
    assert_eq!(editor.text(), "seed");
    assert_eq!(editor.history().len(), 1);
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn apply_and_undo_flow_through_the_widget() {
    let mut editor = Editor::default();

    editor
        .apply(EditorCommand::InsertHtml("<p>one</p>".into()))
        .unwrap();
    editor
        .apply(EditorCommand::InsertHtml("<p>two</p>".into()))
        .unwrap();

    assert!(editor.undo());
    assert_eq!(editor.html(), "<p>one</p>");
    assert!(editor.redo());
    assert_eq!(editor.html(), "<p>one</p><p>two</p>");
}

#[test]
fn on_change_receives_html_and_projection() {
    let editor = Editor::default();
    let seen: Arc<Mutex<Vec<EditorContent>>> = Arc::default();
    let sink = Arc::clone(&seen);
    editor.on_change(move |content| sink.lock().push(content.clone()));

    let mut editor = editor;
    editor
        .apply(EditorCommand::InsertHtml("<p>hi <b>you</b></p>".into()))
        .unwrap();

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].html, "<p>hi <b>you</b></p>");
    assert_eq!(seen[0].text, "hi you");
}

#[test]
fn set_content_records_a_history_entry() {
    let mut editor = Editor::default();
    editor.set_content("<p>replaced</p>");

    assert_eq!(editor.html(), "<p>replaced</p>");
    assert_eq!(editor.history().len(), 2);
    assert!(editor.can_undo());
}

#[test]
fn import_replaces_content_and_announces_the_document() {
    let mut editor = Editor::default();
    let log = EventLog::default();
    editor.subscribe(Box::new(log.clone()));

    editor.import("notes.txt", "<p>imported</p>".into());

    assert_eq!(editor.html(), "<p>imported</p>");
    assert_eq!(editor.history().len(), 2);

    let events = log.0.lock();
    assert!(events
        .iter()
        .any(|event| matches!(event, EditorEvent::ContentChanged(_))));
    assert!(events.iter().any(|event| matches!(
        event,
        EditorEvent::DocumentImported { name } if name == "notes.txt"
    )));
}

#[test]
fn disabled_editor_ignores_every_mutation() {
    let mut editor = editor_with(EditorOptions {
        initial_content: "<p>locked</p>".into(),
        disabled: true,
        ..EditorOptions::default()
    });
    let log = EventLog::default();
    editor.subscribe(Box::new(log.clone()));

    assert!(editor.apply(EditorCommand::format("bold")).is_ok());
    assert!(editor
        .apply(EditorCommand::InsertText("nope".into()))
        .is_ok());
    editor.import("late.html", "<p>nope</p>".into());
    assert!(!editor.undo());
    assert!(!editor.redo());

    assert_eq!(editor.html(), "<p>locked</p>");
    assert_eq!(editor.history().len(), 1);
    assert!(log.0.lock().is_empty());
}

#[test]
fn reenabling_restores_normal_operation() {
    let mut editor = editor_with(EditorOptions {
        disabled: true,
        ..EditorOptions::default()
    });

    editor.set_content("<p>blocked</p>");
    assert_eq!(editor.html(), "");

    editor.set_disabled(false);
    editor.set_content("<p>allowed</p>");
    assert_eq!(editor.html(), "<p>allowed</p>");
}

#[test]
fn undo_and_redo_events_carry_the_restored_content() {
    let mut editor = Editor::default();
    let seen: Arc<Mutex<Vec<EditorContent>>> = Arc::default();
    let sink = Arc::clone(&seen);
    editor.on_change(move |content| sink.lock().push(content.clone()));

    editor
        .apply(EditorCommand::InsertHtml("<p>a</p>".into()))
        .unwrap();
    editor.undo();
    editor.redo();

    let seen = seen.lock();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1].html, "");
    assert_eq!(seen[2].html, "<p>a</p>");
}
