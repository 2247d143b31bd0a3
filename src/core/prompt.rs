//! Line-oriented user interaction

use anyhow::Result;
use async_trait::async_trait;

/// Request/response access to the user.
///
/// `ask` suspends until one line of input is available. `Ok(None)` signals that
/// the input stream is closed and no further answers will arrive.
#[async_trait]
pub trait Prompter: Send {
    async fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Prints one line of output.
    fn say(&mut self, text: &str);

    fn clear(&mut self) {}

    /// Marks the start of a remote call that may take a while.
    fn begin_fetch(&mut self, message: &str) {
        self.say(message);
    }

    fn end_fetch(&mut self) {}
}
