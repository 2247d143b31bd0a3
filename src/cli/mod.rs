//! Terminal front end

pub mod prompt;
pub mod session;
pub mod setup;
pub mod ui;

pub use prompt::TerminalPrompter;
pub use session::{Session, SessionSettings};
