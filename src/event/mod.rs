mod bus;
mod events;

pub use bus::EventBus;
pub use events::{EditorContent, EditorEvent};

/// Receives events broadcast on an [`EventBus`].
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}

/// Adapts a closure into a content-change subscriber. Events other than
/// [`EditorEvent::ContentChanged`] are ignored.
pub struct ChangeListener<F> {
    callback: F,
}

impl<F> ChangeListener<F>
where
    F: FnMut(&EditorContent) + Send,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> EventHandler for ChangeListener<F>
where
    F: FnMut(&EditorContent) + Send,
{
    fn handle_event(&mut self, event: &EditorEvent) {
        if let EditorEvent::ContentChanged(content) = event {
            (self.callback)(content);
        }
    }
}
