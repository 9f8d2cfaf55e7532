//! The six binary operations. All of them are pure.

use crate::calculator::outcome::{DIVISION_BY_ZERO, Outcome};

/// Returns `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> Outcome {
    (a + b).into()
}

/// Returns `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> Outcome {
    (a - b).into()
}

/// Returns `a * b`.
#[must_use]
pub fn multiply(a: f64, b: f64) -> Outcome {
    (a * b).into()
}

/// Returns `a / b`.
///
/// A zero divisor (of either sign) yields the division-by-zero error message
/// instead of an infinity or NaN.
///
/// # Example
/// ```
/// use calcalyzer::calculator::{operation::divide, outcome::Outcome};
///
/// assert_eq!(divide(7.0, 2.0), Outcome::Numeric(3.5));
/// assert_eq!(divide(5.0, 0.0), Outcome::error("Error: Division by zero!"));
/// assert_eq!(divide(0.0, -0.0), Outcome::error("Error: Division by zero!"));
/// ```
#[must_use]
pub fn divide(a: f64, b: f64) -> Outcome {
    if b == 0.0 {
        return Outcome::error(DIVISION_BY_ZERO);
    }
    (a / b).into()
}

/// Returns the floating remainder of `a / b`.
///
/// The sign of a non-zero result follows the dividend. Unlike [`divide`],
/// a zero divisor is not guarded; it produces NaN and therefore
/// [`Outcome::Other`].
///
/// # Example
/// ```
/// use calcalyzer::calculator::{operation::modulo, outcome::Outcome};
///
/// assert_eq!(modulo(-7.0, 3.0), Outcome::Numeric(-1.0));
/// assert_eq!(modulo(7.5, -2.0), Outcome::Numeric(1.5));
/// assert_eq!(modulo(4.0, 0.0), Outcome::Other);
/// ```
#[must_use]
pub fn modulo(a: f64, b: f64) -> Outcome {
    (a % b).into()
}

/// Returns `a` raised to the power `b`.
///
/// Follows real exponentiation: negative and fractional exponents are
/// supported, and a negative base with a fractional exponent has no real
/// result, which yields [`Outcome::Other`].
///
/// # Example
/// ```
/// use calcalyzer::calculator::{operation::power, outcome::Outcome};
///
/// assert_eq!(power(2.0, 10.0), Outcome::Numeric(1024.0));
/// assert_eq!(power(2.0, -1.0), Outcome::Numeric(0.5));
/// assert_eq!(power(-8.0, 1.0 / 3.0), Outcome::Other);
/// ```
#[must_use]
pub fn power(a: f64, b: f64) -> Outcome {
    a.powf(b).into()
}
