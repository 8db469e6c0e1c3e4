mod commands;
mod dispatcher;

pub use commands::EditorCommand;
pub use dispatcher::CommandDispatcher;

use thiserror::Error;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command dispatch.
///
/// Bad dialog input is normally rejected by the dialogs themselves before a
/// command is ever built; these are the backstop for programmatic callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// A link or image command was issued without a URL.
    #[error("a URL is required")]
    MissingUrl,
}
