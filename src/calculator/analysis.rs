use crate::{
    calculator::{operator::Operator, outcome::Outcome},
    terminal::LineWriter,
    util::num::{format_number, is_even, is_integral},
};

/// Magnitude from which a result counts as large.
pub const LARGE_MAGNITUDE: f64 = 100.0;
/// Message shown for results that are neither numbers nor error messages.
pub const UNDEFINED_RESULT: &str = "Result is undefined or null, something went wrong!";

/// The sign of a numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Strictly greater than zero.
    Positive,
    /// Strictly less than zero.
    Negative,
    /// Zero of either sign.
    Zero,
}

/// The parity of an integral result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Divisible by two.
    Even,
    /// Not divisible by two.
    Odd,
}

/// Everything the classifier reports about a numeric result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericAnalysis {
    /// Sign of the value.
    pub sign:    Sign,
    /// Whether the value has no fractional part.
    pub integer: bool,
    /// Parity of the value; only present for integers.
    pub parity:  Option<Parity>,
    /// Whether the magnitude is at least [`LARGE_MAGNITUDE`].
    pub large:   bool,
}

impl NumericAnalysis {
    /// Classifies a number.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::calculator::analysis::{NumericAnalysis, Parity, Sign};
    ///
    /// let a = NumericAnalysis::of(-150.0);
    /// assert_eq!(a.sign, Sign::Negative);
    /// assert!(a.integer);
    /// assert_eq!(a.parity, Some(Parity::Even));
    /// assert!(a.large);
    /// assert_eq!(a.special(), None);
    /// ```
    #[must_use]
    pub fn of(value: f64) -> Self {
        let sign = if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        };
        let integer = is_integral(value);
        let parity = integer.then(|| if is_even(value) { Parity::Even } else { Parity::Odd });

        Self { sign,
               integer,
               parity,
               large: value >= LARGE_MAGNITUDE || value <= -LARGE_MAGNITUDE }
    }

    /// Returns the special tag for positive integers.
    ///
    /// Negative values and zero never receive a tag.
    #[must_use]
    pub const fn special(&self) -> Option<&'static str> {
        match (self.sign, self.integer, self.parity) {
            (Sign::Positive, true, Some(Parity::Even)) => {
                Some("Special: The result is Positive and Even!")
            },
            (Sign::Positive, true, Some(Parity::Odd)) => {
                Some("Special: The result is Positive and Odd!")
            },
            _ => None,
        }
    }

    /// Returns the report lines, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(match self.sign {
                       Sign::Positive => "The result is Positive.",
                       Sign::Negative => "The result is Negative.",
                       Sign::Zero => "The result is Zero.",
                   }.to_string());

        lines.push(if self.integer {
                       "The result is an Integer."
                   } else {
                       "The result is a Floating-point number."
                   }.to_string());

        match self.parity {
            Some(Parity::Even) => lines.push("The result is Even.".to_string()),
            Some(Parity::Odd) => lines.push("The result is Odd.".to_string()),
            None => {},
        }

        if let Some(special) = self.special() {
            lines.push(special.to_string());
        }

        if self.large {
            lines.push("The result is a large number (|value| >= 100).".to_string());
        }

        lines
    }
}

/// The classification of a calculation outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// The outcome was a number.
    Numeric(NumericAnalysis),
    /// The outcome was an error message.
    Error(String),
    /// The outcome was neither.
    Other,
}

impl Analysis {
    /// Classifies an outcome.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::calculator::{analysis::Analysis, outcome::Outcome};
    ///
    /// assert!(matches!(Analysis::of(&Outcome::Numeric(8.0)), Analysis::Numeric(_)));
    /// assert_eq!(Analysis::of(&Outcome::Other), Analysis::Other);
    /// ```
    #[must_use]
    pub fn of(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Numeric(v) => Self::Numeric(NumericAnalysis::of(*v)),
            Outcome::ErrorMessage(message) => Self::Error(message.clone()),
            Outcome::Other => Self::Other,
        }
    }

    /// Returns the report lines following the type label.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::calculator::{analysis::Analysis, outcome::Outcome};
    ///
    /// let analysis = Analysis::of(&Outcome::error("Error: Division by zero!"));
    /// assert_eq!(analysis.lines(), ["Error occurred: Error: Division by zero!"]);
    /// ```
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Numeric(numeric) => numeric.lines(),
            Self::Error(message) => vec![format!("Error occurred: {message}")],
            Self::Other => vec![UNDEFINED_RESULT.to_string()],
        }
    }
}

/// One completed calculation: both operands, the operator and the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// The first operand.
    pub lhs:      f64,
    /// The selected operator.
    pub operator: Operator,
    /// The second operand.
    pub rhs:      f64,
    /// What the operator produced.
    pub outcome:  Outcome,
}

impl Calculation {
    /// Applies `operator` to the operands and records the outcome.
    #[must_use]
    pub fn new(lhs: f64, operator: Operator, rhs: f64) -> Self {
        let outcome = operator.apply(lhs, rhs);
        Self { lhs,
               operator,
               rhs,
               outcome }
    }

    /// Returns the echo line, such as `5 + 3 = 8`.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::calculator::{analysis::Calculation, operator::Operator};
    ///
    /// let calc = Calculation::new(7.0, Operator::Divide, 2.0);
    /// assert_eq!(calc.equation(), "7 / 2 = 3.5");
    /// ```
    #[must_use]
    pub fn equation(&self) -> String {
        format!("{} {} {} = {}",
                format_number(self.lhs),
                self.operator,
                format_number(self.rhs),
                self.outcome)
    }
}

/// Writes the result and data analysis sections for a calculation.
///
/// # Example
/// ```
/// use calcalyzer::calculator::{
///     analysis::{Calculation, report},
///     operator::Operator,
/// };
///
/// let mut output: Vec<String> = Vec::new();
/// report(&mut output, &Calculation::new(5.0, Operator::Add, 3.0));
///
/// assert_eq!(output,
///            ["",
///             "--- Result ---",
///             "5 + 3 = 8",
///             "",
///             "--- Data Analysis ---",
///             "Result type: number",
///             "The result is Positive.",
///             "The result is an Integer.",
///             "The result is Even.",
///             "Special: The result is Positive and Even!"]);
/// ```
pub fn report<W: LineWriter + ?Sized>(writer: &mut W, calculation: &Calculation) {
    let analysis = Analysis::of(&calculation.outcome);
    log::debug!("{} classified as {analysis:?}", calculation.equation());

    writer.write_line("");
    writer.write_line("--- Result ---");
    writer.write_line(&calculation.equation());

    writer.write_line("");
    writer.write_line("--- Data Analysis ---");
    writer.write_line(&format!("Result type: {}", calculation.outcome.type_label()));

    for line in analysis.lines() {
        writer.write_line(&line);
    }
}
