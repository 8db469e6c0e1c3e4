use std::sync::Arc;

use parking_lot::Mutex;

use eframe_wysiwyg::{EditSurface, TextSurface};

#[test]
fn snapshot_round_trips() {
    let mut surface = TextSurface::new("<p>Hello <b>world</b></p>");
    let snapshot = surface.snapshot();
    surface.set_snapshot(&snapshot);
    assert_eq!(surface.snapshot(), snapshot);
}

#[test]
fn insert_text_lands_at_the_caret() {
    let mut surface = TextSurface::new("");
    surface.set_snapshot("<p>ab</p>");
    surface.set_caret(4); // between 'a' and 'b'

    assert!(surface.execute_command("insertText", Some("X")));
    assert_eq!(surface.snapshot(), "<p>aXb</p>");
    assert_eq!(surface.caret(), 5);
}

#[test]
fn insert_text_escapes_markup_characters() {
    let mut surface = TextSurface::new("");
    surface.execute_command("insertText", Some("a<b&c>d"));
    assert_eq!(surface.snapshot(), "a&lt;b&amp;c&gt;d");
    assert_eq!(surface.plain_text(), "a<b&c>d");
}

#[test]
fn insert_html_is_not_escaped() {
    let mut surface = TextSurface::new("");
    surface.execute_command("insertHTML", Some("<em>hi</em>"));
    assert_eq!(surface.snapshot(), "<em>hi</em>");
}

#[test]
fn set_snapshot_moves_caret_to_the_end() {
    let mut surface = TextSurface::new("");
    surface.set_snapshot("<p>ab</p>");
    surface.execute_command("insertText", Some("!"));
    assert_eq!(surface.snapshot(), "<p>ab</p>!");
}

#[test]
fn caret_clamps_to_char_boundaries() {
    let mut surface = TextSurface::new("aé"); // 'é' is two bytes
    surface.set_caret(2); // inside 'é'
    assert_eq!(surface.caret(), 1);

    surface.set_caret(999);
    assert_eq!(surface.caret(), 3);
}

#[test]
fn plain_text_strips_tags() {
    let surface = TextSurface::new("<p>Hello <b>world</b></p>");
    assert_eq!(surface.plain_text(), "Hello world");
}

#[test]
fn plain_text_decodes_common_entities() {
    let surface = TextSurface::new("a &amp; b &lt;tag&gt; &quot;q&quot; &#39;s&#39;&nbsp;!");
    assert_eq!(surface.plain_text(), "a & b <tag> \"q\" 's' !");
}

#[test]
fn plain_text_passes_unknown_entities_through() {
    let surface = TextSurface::new("&copy; 2024, AT&T");
    assert_eq!(surface.plain_text(), "&copy; 2024, AT&T");
}

#[test]
fn unhandled_commands_go_to_the_host_hook() {
    let mut surface = TextSurface::new("");
    let calls: Arc<Mutex<Vec<(String, Option<String>)>>> = Arc::default();
    let seen = Arc::clone(&calls);
    surface.set_host_command(move |name, value| {
        seen.lock().push((name.to_owned(), value.map(str::to_owned)));
        name == "bold"
    });

    assert!(surface.execute_command("bold", None));
    assert!(!surface.execute_command("justifyLeft", None));

    let calls = calls.lock();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], ("bold".to_owned(), None));
    assert_eq!(calls[1], ("justifyLeft".to_owned(), None));
}

#[test]
fn unhandled_commands_without_a_hook_leave_content_alone() {
    let mut surface = TextSurface::new("<p>x</p>");
    assert!(!surface.execute_command("bold", None));
    assert_eq!(surface.snapshot(), "<p>x</p>");
}
