pub mod app;
pub mod prompt;
pub mod render;

pub use app::{App, AppExit};
pub use prompt::{PromptError, Prompter, TerminalPrompter};
