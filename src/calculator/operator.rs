use std::str::FromStr;

use crate::{
    calculator::{
        lexer::{OperatorToken, lex_single},
        operation::{add, divide, modulo, multiply, power, subtract},
        outcome::{Outcome, UNKNOWN_OPERATOR},
    },
    error::InputError,
};

/// Every operator, in the order they are listed to the user.
pub const OPERATORS: [Operator; 6] = [Operator::Add,
                                      Operator::Subtract,
                                      Operator::Multiply,
                                      Operator::Divide,
                                      Operator::Modulo,
                                      Operator::Power];

/// Represents one of the six supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `**`
    Power,
}

impl From<OperatorToken> for Operator {
    fn from(token: OperatorToken) -> Self {
        match token {
            OperatorToken::Plus => Self::Add,
            OperatorToken::Minus => Self::Subtract,
            OperatorToken::Star => Self::Multiply,
            OperatorToken::Slash => Self::Divide,
            OperatorToken::Percent => Self::Modulo,
            OperatorToken::StarStar => Self::Power,
        }
    }
}

impl FromStr for Operator {
    type Err = InputError;

    /// Parses an operator token.
    ///
    /// The text must be exactly one token; surrounding whitespace is not
    /// removed.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::calculator::operator::Operator;
    ///
    /// assert_eq!("**".parse::<Operator>(), Ok(Operator::Power));
    /// assert!(" +".parse::<Operator>().is_err());
    /// assert!("^".parse::<Operator>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lex_single::<OperatorToken>(s).map(Self::from)
                                      .ok_or_else(|| InputError::UnknownOperator { text: s.to_string() })
    }
}

impl Operator {
    /// Returns the token that selects this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "**",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::calculator::{operator::Operator, outcome::Outcome};
    ///
    /// assert_eq!(Operator::Add.apply(5.0, 3.0), Outcome::Numeric(8.0));
    /// assert_eq!(Operator::Power.apply(2.0, 10.0), Outcome::Numeric(1024.0));
    /// ```
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> Outcome {
        match self {
            Self::Add => add(a, b),
            Self::Subtract => subtract(a, b),
            Self::Multiply => multiply(a, b),
            Self::Divide => divide(a, b),
            Self::Modulo => modulo(a, b),
            Self::Power => power(a, b),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies the operation selected by a raw operator token.
///
/// Tokens outside the supported set produce the unknown-operator error
/// message rather than failing.
///
/// # Example
/// ```
/// use calcalyzer::calculator::{operator::dispatch, outcome::Outcome};
///
/// assert_eq!(dispatch("%", 7.0, 3.0), Outcome::Numeric(1.0));
/// assert_eq!(dispatch("^", 2.0, 3.0), Outcome::error("Error: Unknown operator!"));
/// ```
#[must_use]
pub fn dispatch(token: &str, a: f64, b: f64) -> Outcome {
    token.parse::<Operator>()
         .map_or_else(|_| Outcome::error(UNKNOWN_OPERATOR), |op| op.apply(a, b))
}

/// Lists every operator token, separated by commas.
///
/// # Example
/// ```
/// use calcalyzer::calculator::operator::operator_list;
///
/// assert_eq!(operator_list(), "+, -, *, /, %, **");
/// ```
#[must_use]
pub fn operator_list() -> String {
    OPERATORS.iter()
             .map(|op| op.symbol())
             .collect::<Vec<_>>()
             .join(", ")
}
