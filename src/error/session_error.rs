#[derive(Debug)]
/// Represents all errors that can end a session early.
pub enum SessionError {
    /// The input stream closed while a line was expected.
    EndOfInput {
        /// The prompt that was waiting for an answer.
        prompt: String,
    },
    /// Reading from the terminal failed.
    Io(std::io::Error),
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput { prompt } => {
                write!(f, "Input ended while waiting for: {}", prompt.trim_end())
            },
            Self::Io(e) => write!(f, "Failed to read input: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::EndOfInput { .. } => None,
        }
    }
}
