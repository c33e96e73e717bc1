use crate::error::StaffError;
use crate::line_editor::LineEditor;
use crate::table::{Table, TableRow};
use std::fmt::Display;
use std::future::Future;
use std::io;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Stdout};

/// Where answers come from. `None` means the input is exhausted.
pub trait Input: Send {
    /// Sources that render the prompt themselves (a line editor) return true.
    fn draws_prompt(&self) -> bool {
        false
    }

    fn next_line(&mut self, prompt: &str)
    -> impl Future<Output = io::Result<Option<String>>> + Send;
}

impl<T: AsyncBufRead + Unpin + Send> Input for T {
    fn next_line(
        &mut self,
        _prompt: &str,
    ) -> impl Future<Output = io::Result<Option<String>>> + Send {
        async move {
            let mut line = String::new();
            if AsyncBufReadExt::read_line(self, &mut line).await? == 0 {
                return Ok(None);
            }
            Ok(Some(line))
        }
    }
}

pub trait Output: AsyncWrite + Unpin + Send {}
impl<T: AsyncWrite + Unpin + Send> Output for T {}

/// Line-oriented prompt session over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<LineEditor, Stdout> {
    pub fn stdio() -> Result<Self, StaffError> {
        Ok(Self::new(LineEditor::spawn()?, tokio::io::stdout()))
    }
}

impl<R: Input, W: Output> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub async fn say(&mut self, line: &str) -> Result<(), StaffError> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub async fn show_table<T: TableRow>(&mut self, rows: &[T]) -> Result<(), StaffError> {
        let rendered = Table::from_rows(rows).render();
        self.writer.write_all(rendered.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Print `message` and read one trimmed line. End of input is `InputClosed`.
    pub async fn prompt(&mut self, message: &str) -> Result<String, StaffError> {
        let prompt = format!("{message} ");
        if !self.reader.draws_prompt() {
            self.writer.write_all(prompt.as_bytes()).await?;
        }
        self.writer.flush().await?;

        let line = self
            .reader
            .next_line(&prompt)
            .await?
            .ok_or(StaffError::InputClosed)?;
        Ok(line.trim().to_string())
    }

    /// Like `prompt`, but an empty answer is rejected.
    pub async fn prompt_text(
        &mut self,
        message: &str,
        field: &'static str,
    ) -> Result<String, StaffError> {
        let answer = self.prompt(message).await?;
        if answer.is_empty() {
            return Err(StaffError::invalid(field, "must not be empty"));
        }
        Ok(answer)
    }

    pub async fn prompt_parsed<T>(
        &mut self,
        message: &str,
        field: &'static str,
    ) -> Result<T, StaffError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.prompt(message).await?;
        answer
            .parse::<T>()
            .map_err(|e| StaffError::invalid(field, format!("{answer:?}: {e}")))
    }

    /// A finite, non-negative amount such as a salary.
    pub async fn prompt_amount(
        &mut self,
        message: &str,
        field: &'static str,
    ) -> Result<f64, StaffError> {
        let amount: f64 = self.prompt_parsed(message, field).await?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(StaffError::invalid(
                field,
                format!("{amount} is not a usable amount"),
            ));
        }
        Ok(amount)
    }

    /// Show a numbered list and re-ask until one of `choices` is picked.
    pub async fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, StaffError> {
        loop {
            self.say(message).await?;
            for (i, choice) in choices.iter().enumerate() {
                self.say(&format!("  {}) {}", i + 1, choice)).await?;
            }
            let answer = self.prompt(">").await?;
            if let Some(index) = parse_choice(&answer, choices) {
                return Ok(index);
            }
            self.say("Please pick one of the listed choices.").await?;
        }
    }
}

/// Accepts a 1-based position or a label, case-insensitively.
pub fn parse_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&n).then(|| n - 1);
    }
    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(answer))
}
