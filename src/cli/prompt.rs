use super::ui;
use crate::core::Prompter;
use anyhow::{Context, Result};
use async_trait::async_trait;
use console::Term;
use indicatif::ProgressBar;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Prompter reading answers from `reader` and writing everything else to `writer`.
/// Defaults to the process' standard input and output.
pub struct TerminalPrompter<R = BufReader<Stdin>, W = std::io::Stdout> {
    reader: R,
    writer: W,
    term: Term,
    spinner: Option<ProgressBar>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter::with_io(BufReader::new(tokio::io::stdin()), std::io::stdout())
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn with_io(reader: R, writer: W) -> Self {
        TerminalPrompter {
            reader,
            writer,
            term: Term::stdout(),
            spinner: None,
        }
    }

    /// Reads one line without its terminator. Bytes that are not valid UTF-8
    /// are replaced rather than rejected; `None` means end of input.
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn show_spinner(&mut self, spinner: ProgressBar, message: &str) {
        // Spinner draws nothing off a terminal
        if spinner.is_hidden() {
            self.say(message);
        }
        self.spinner = Some(spinner);
    }
}

#[async_trait]
impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.writer
            .write_all(question.as_bytes())
            .and_then(|_| self.writer.flush())
            .context("Failed to write prompt")?;

        self.read_line().await
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            tracing::debug!("Could not write output: {e}");
        }
    }

    fn clear(&mut self) {
        ui::clear_screen(&self.term);
    }

    fn begin_fetch(&mut self, message: &str) {
        self.show_spinner(ui::new_spinner(message), message);
    }

    fn end_fetch(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ask_returns_raw_lines_until_end_of_input() {
        let input: &[u8] = b"  12 \ncaf\xe9\r\nlast";
        let mut prompter = TerminalPrompter::with_io(input, Vec::new());

        assert_eq!(
            prompter.ask("amount? ").await.unwrap(),
            Some("  12 ".to_string())
        );
        assert_eq!(
            prompter.ask("code? ").await.unwrap(),
            Some("caf\u{FFFD}".to_string())
        );
        assert_eq!(
            prompter.ask("more? ").await.unwrap(),
            Some("last".to_string())
        );
        assert_eq!(prompter.ask("again? ").await.unwrap(), None);

        assert_eq!(
            String::from_utf8(prompter.writer).unwrap(),
            "amount? code? more? again? "
        );
    }

    #[tokio::test]
    async fn test_empty_line_is_not_end_of_input() {
        let input: &[u8] = b"\n";
        let mut prompter = TerminalPrompter::with_io(input, Vec::new());

        assert_eq!(prompter.ask("").await.unwrap(), Some(String::new()));
        assert_eq!(prompter.ask("").await.unwrap(), None);
    }

    #[test]
    fn test_hidden_spinner_prints_fetch_message() {
        let input: &[u8] = b"";
        let mut prompter = TerminalPrompter::with_io(input, Vec::new());

        prompter.show_spinner(ProgressBar::hidden(), "Fetching rates...");
        prompter.end_fetch();
        prompter.say("done");

        assert_eq!(
            String::from_utf8(prompter.writer).unwrap(),
            "Fetching rates...\ndone\n"
        );
    }
}
