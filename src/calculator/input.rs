use crate::{
    calculator::{
        lexer::{NumberToken, lex_single},
        operator::{Operator, operator_list},
    },
    error::{InputError, SessionError},
    terminal::{LineReader, LineWriter},
};

/// Message shown when an operand is rejected.
pub const INVALID_NUMBER: &str = "Invalid input! Please enter a valid number.";

/// Parses operand text into a finite number.
///
/// Leading and trailing whitespace is ignored. The remaining text must be a
/// single numeric literal whose value is finite.
///
/// # Errors
/// - [`InputError::Empty`] if nothing but whitespace was entered.
/// - [`InputError::NotANumber`] if the text is not a numeric literal.
/// - [`InputError::NotFinite`] if the literal overflows to infinity.
///
/// # Example
/// ```
/// use calcalyzer::{calculator::input::parse_number, error::InputError};
///
/// assert_eq!(parse_number("  -2.5 "), Ok(-2.5));
/// assert_eq!(parse_number("1e3"), Ok(1000.0));
/// assert_eq!(parse_number("0b101"), Ok(5.0));
/// assert_eq!(parse_number("   "), Err(InputError::Empty));
/// assert!(matches!(parse_number("abc"), Err(InputError::NotANumber { .. })));
/// assert!(matches!(parse_number("1e400"), Err(InputError::NotFinite { .. })));
/// ```
pub fn parse_number(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value = lex_single::<NumberToken>(trimmed).map(NumberToken::value)
                                                 .ok_or_else(|| InputError::NotANumber { text: trimmed.to_string() })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite { text: trimmed.to_string() });
    }

    Ok(value)
}

/// Returns the message shown when an operator is rejected.
#[must_use]
pub fn invalid_operator_message() -> String {
    format!("Invalid operator! Please enter one of: {}", operator_list())
}

/// Prompts until the user enters a valid operand.
///
/// Every rejected line is answered with [`INVALID_NUMBER`] and the prompt is
/// shown again. There is no retry limit.
///
/// # Errors
/// Only fails if the reader fails; rejected input is never an error here.
///
/// # Example
/// ```
/// use calcalyzer::{calculator::input::read_number, terminal::ScriptedReader};
///
/// let mut reader = ScriptedReader::new(["", "five", "5"]);
/// let mut output: Vec<String> = Vec::new();
///
/// let n = read_number(&mut reader, &mut output, "Enter the first number: ").unwrap();
/// assert_eq!(n, 5.0);
/// assert_eq!(output.len(), 2);
/// ```
pub fn read_number<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<f64, SessionError>
    where R: LineReader + ?Sized,
          W: LineWriter + ?Sized
{
    loop {
        let line = reader.read_line(prompt)?;
        match parse_number(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::trace!("Rejected operand: {e}");
                writer.write_line(INVALID_NUMBER);
            },
        }
    }
}

/// Prompts until the user enters one of the operator tokens.
///
/// The line must match a token exactly. Every rejected line is answered with
/// the list of valid tokens and the prompt is shown again.
///
/// # Errors
/// Only fails if the reader fails; rejected input is never an error here.
pub fn read_operator<R, W>(reader: &mut R,
                           writer: &mut W,
                           prompt: &str)
                           -> Result<Operator, SessionError>
    where R: LineReader + ?Sized,
          W: LineWriter + ?Sized
{
    loop {
        let line = reader.read_line(prompt)?;
        match line.parse::<Operator>() {
            Ok(operator) => return Ok(operator),
            Err(e) => {
                log::trace!("Rejected operator: {e}");
                writer.write_line(&invalid_operator_message());
            },
        }
    }
}
