use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use crate::error::SessionError;

/// A source of user-entered lines.
///
/// Each call shows `prompt`, blocks until a full line is available and
/// returns it without its line terminator. No validation happens here.
pub trait LineReader {
    /// Shows `prompt` and returns the next line of input.
    ///
    /// # Errors
    /// Returns [`SessionError::EndOfInput`] when no more lines can arrive, or
    /// [`SessionError::Io`] if reading fails.
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError>;
}

/// A sink for lines of output. Writing never fails from the caller's point
/// of view.
pub trait LineWriter {
    /// Appends `text` followed by a line break.
    fn write_line(&mut self, text: &str);
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        (**self).read_line(prompt)
    }
}

impl<T: LineWriter + ?Sized> LineWriter for &mut T {
    fn write_line(&mut self, text: &str) {
        (**self).write_line(text);
    }
}

impl LineWriter for Vec<String> {
    fn write_line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Reads lines from a buffered input, echoing prompts to a separate output.
pub struct PromptReader<R, W> {
    input:  R,
    output: W,
}

impl PromptReader<io::StdinLock<'static>, io::Stdout> {
    /// Creates a reader over standard input that prompts on standard output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    /// Creates a reader over `input` that writes prompts to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineReader for PromptReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput { prompt: prompt.to_string() });
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

/// Writes lines to any [`Write`] implementation.
///
/// Write failures are logged and otherwise ignored.
pub struct StreamWriter<W> {
    output: W,
}

impl StreamWriter<io::Stdout> {
    /// Creates a writer over standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamWriter<W> {
    /// Creates a writer over `output`.
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Consumes the writer and returns the underlying output.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> LineWriter for StreamWriter<W> {
    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            log::warn!("Failed to write output line: {e}");
        }
    }
}

/// Replays a fixed list of answers, recording every prompt it is shown.
///
/// Once the answers run out, every further read fails with
/// [`SessionError::EndOfInput`].
///
/// # Example
/// ```
/// use calcalyzer::terminal::{LineReader, ScriptedReader};
///
/// let mut reader = ScriptedReader::new(["42"]);
/// assert_eq!(reader.read_line("Number: ").unwrap(), "42");
/// assert!(reader.read_line("Number: ").is_err());
/// assert_eq!(reader.prompts(), ["Number: ", "Number: "]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedReader {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedReader {
    /// Creates a reader that answers with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { answers: answers.into_iter().map(Into::into).collect(),
               prompts: Vec::new(), }
    }

    /// Returns every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns the number of answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| SessionError::EndOfInput { prompt: prompt.to_string() })
    }
}
