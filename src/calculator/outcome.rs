use crate::util::num::format_number;

/// Message produced when dividing by zero.
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero!";
/// Message produced when dispatching an unrecognized operator.
pub const UNKNOWN_OPERATOR: &str = "Error: Unknown operator!";

/// Represents the outcome of one calculation.
///
/// An outcome is exactly one of three kinds, and the result classifier
/// decides what to report purely from the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A real number. Never NaN; infinities are allowed.
    Numeric(f64),
    /// The operation refused to produce a number.
    ErrorMessage(String),
    /// The operation produced no real number (NaN).
    Other,
}

impl From<f64> for Outcome {
    /// Wraps a computed value, routing NaN to [`Outcome::Other`].
    fn from(v: f64) -> Self {
        if v.is_nan() { Self::Other } else { Self::Numeric(v) }
    }
}

impl Outcome {
    /// Builds an [`Outcome::ErrorMessage`] from any text.
    pub fn error(message: impl Into<String>) -> Self {
        Self::ErrorMessage(message.into())
    }

    /// Returns the type label printed in the data analysis section.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::calculator::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::Numeric(8.0).type_label(), "number");
    /// assert_eq!(Outcome::error("Error: Division by zero!").type_label(), "string");
    /// assert_eq!(Outcome::Other.type_label(), "undefined");
    /// ```
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "number",
            Self::ErrorMessage(_) => "string",
            Self::Other => "undefined",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{}", format_number(*v)),
            Self::ErrorMessage(message) => write!(f, "{message}"),
            Self::Other => write!(f, "NaN"),
        }
    }
}
