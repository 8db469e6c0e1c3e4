use std::fmt;

/// The seam between the editor core and whatever actually renders rich
/// content.
///
/// The surface is the canonical document state; the history engine only
/// ever stores serialized copies of it. Implementations must guarantee
/// that `set_snapshot` of a value returned by `snapshot` round-trips to an
/// equivalent surface.
pub trait EditSurface {
    /// Executes a named formatting command against the current selection.
    /// Returns whether the surface (or its host primitive) handled it.
    fn execute_command(&mut self, name: &str, value: Option<&str>) -> bool;

    /// Full serialized snapshot of the content.
    fn snapshot(&self) -> String;

    /// Replaces the entire content with a previously taken snapshot.
    fn set_snapshot(&mut self, snapshot: &str);

    /// Plain-text projection of the content.
    fn plain_text(&self) -> String;
}

type HostCommandFn = Box<dyn FnMut(&str, Option<&str>) -> bool + Send>;

/// An in-memory surface backed by a single HTML string and an insertion
/// caret.
///
/// The insert family of commands (`insertText`, `insertHTML`) is handled
/// here; everything else (bold, lists, alignment, `createLink` against a
/// selection, ...) is the business of the platform's rich-text primitive
/// and is forwarded to the host hook when one is installed.
pub struct TextSurface {
    buffer: String,
    caret: usize,
    host: Option<HostCommandFn>,
}

impl TextSurface {
    pub fn new(initial: impl Into<String>) -> Self {
        let buffer = initial.into();
        let caret = buffer.len();
        Self {
            buffer,
            caret,
            host: None,
        }
    }

    /// Installs the hook that receives formatting commands the surface does
    /// not model itself. Returns whether the host handled the command.
    pub fn set_host_command(&mut self, host: impl FnMut(&str, Option<&str>) -> bool + Send + 'static) {
        self.host = Some(Box::new(host));
    }

    /// Byte offset of the insertion caret.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Moves the caret, clamping to the buffer and snapping down to the
    /// nearest character boundary.
    pub fn set_caret(&mut self, byte_offset: usize) {
        let mut pos = byte_offset.min(self.buffer.len());
        while pos > 0 && !self.buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        self.caret = pos;
    }

    fn insert(&mut self, markup: &str) {
        self.buffer.insert_str(self.caret, markup);
        self.caret += markup.len();
    }
}

impl fmt::Debug for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSurface")
            .field("buffer", &self.buffer)
            .field("caret", &self.caret)
            .field("host", &self.host.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

impl EditSurface for TextSurface {
    fn execute_command(&mut self, name: &str, value: Option<&str>) -> bool {
        match name {
            "insertText" => {
                self.insert(&escape_text(value.unwrap_or_default()));
                true
            }
            "insertHTML" => {
                self.insert(value.unwrap_or_default());
                true
            }
            _ => match self.host.as_mut() {
                Some(host) => host(name, value),
                None => {
                    log::debug!("formatting command {name:?} left to the host primitive");
                    false
                }
            },
        }
    }

    fn snapshot(&self) -> String {
        self.buffer.clone()
    }

    fn set_snapshot(&mut self, snapshot: &str) {
        self.buffer.clear();
        self.buffer.push_str(snapshot);
        self.caret = self.buffer.len();
    }

    fn plain_text(&self) -> String {
        strip_markup(&self.buffer)
    }
}

/// Escapes literal text for insertion into the HTML buffer.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Projects HTML markup to plain text: tags are dropped and the handful of
/// entities the editor itself produces are decoded. Anything unrecognized
/// passes through verbatim.
pub fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    // Pending entity body, without the leading '&'.
    let mut entity: Option<String> = None;

    for ch in html.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
            }
            continue;
        }

        if let Some(body) = entity.as_mut() {
            if ch == ';' {
                match decode_entity(body) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('&');
                        out.push_str(body);
                        out.push(';');
                    }
                }
                entity = None;
                continue;
            }
            if (ch.is_ascii_alphanumeric() || ch == '#') && body.len() < 8 {
                body.push(ch);
                continue;
            }
            // Not an entity after all; flush and fall through to normal
            // handling of the current character.
            out.push('&');
            out.push_str(body);
            entity = None;
        }

        match ch {
            '<' => in_tag = true,
            '&' => entity = Some(String::new()),
            _ => out.push(ch),
        }
    }

    if let Some(body) = entity {
        out.push('&');
        out.push_str(&body);
    }
    out
}

fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" | "#160" => Some(' '),
        _ => None,
    }
}
