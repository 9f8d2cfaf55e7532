#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all reasons a line of user input can be rejected.
pub enum InputError {
    /// The line was empty after trimming whitespace.
    Empty,
    /// The line is not a numeric literal.
    NotANumber {
        /// The rejected text.
        text: String,
    },
    /// The line is a numeric literal, but its value is not finite.
    NotFinite {
        /// The rejected text.
        text: String,
    },
    /// The line is not one of the recognized operator tokens.
    UnknownOperator {
        /// The rejected text.
        text: String,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Input is empty."),
            Self::NotANumber { text } => write!(f, "'{text}' is not a number."),
            Self::NotFinite { text } => write!(f, "'{text}' is not a finite number."),
            Self::UnknownOperator { text } => write!(f, "'{text}' is not a known operator."),
        }
    }
}

impl std::error::Error for InputError {}
