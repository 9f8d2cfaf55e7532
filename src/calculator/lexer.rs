use logos::Logos;

/// Represents a numeric literal accepted as an operand.
///
/// Decimal literals may carry a sign, a fractional part and an exponent,
/// such as `-2.25`, `5.`, `.5` or `2.5E-4`. Radix literals (`0x1F`, `0o17`,
/// `0b101`) are unsigned.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum NumberToken {
    /// Decimal literal tokens.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_decimal)]
    Decimal(f64),
    /// Hexadecimal, octal and binary literal tokens.
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_radix(lex, 16))]
    #[regex(r"0[oO][0-7]+", |lex| parse_radix(lex, 8))]
    #[regex(r"0[bB][01]+", |lex| parse_radix(lex, 2))]
    Radix(f64),
}

impl NumberToken {
    /// Returns the numeric value carried by the token.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Decimal(v) | Self::Radix(v) => v,
        }
    }
}

/// Represents one of the operator tokens a user may enter.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum OperatorToken {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    StarStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
}

/// Lexes `source` as exactly one token.
///
/// Nothing is skipped, so leading or trailing characters of any kind make
/// the whole input invalid.
///
/// # Parameters
/// - `source`: The text to tokenize.
///
/// # Returns
/// - `Some(token)`: If `source` consists of a single complete token.
/// - `None`: If `source` is empty, contains an invalid token, or contains
///   more than one token.
///
/// # Example
/// ```
/// use calcalyzer::calculator::lexer::{NumberToken, OperatorToken, lex_single};
///
/// assert_eq!(lex_single::<OperatorToken>("**"), Some(OperatorToken::StarStar));
/// assert_eq!(lex_single::<OperatorToken>("***"), None);
/// assert_eq!(lex_single::<NumberToken>("0x10"), Some(NumberToken::Radix(16.0)));
/// assert_eq!(lex_single::<NumberToken>("1 2"), None);
/// ```
pub fn lex_single<'s, T>(source: &'s str) -> Option<T>
    where T: Logos<'s, Source = str>,
          T::Extras: Default
{
    let mut lexer = T::lexer(source);
    let token = lexer.next()?.ok()?;

    if lexer.next().is_some() {
        return None;
    }

    Some(token)
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Overflowing literals become infinite.
/// - `None`: If the slice is not a valid float.
fn parse_decimal(lex: &logos::Lexer<NumberToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a prefixed radix literal such as `0x1F` from the current token
/// slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the digits do not fit in 64 bits.
#[allow(clippy::cast_precision_loss)]
fn parse_radix(lex: &logos::Lexer<NumberToken>, radix: u32) -> Option<f64> {
    let digits = lex.slice().get(2..)?;
    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}
