/// Numeric formatting and inspection helpers.
///
/// This module renders `f64` values the way the calculator prints them and
/// answers the integrality questions the result classifier asks. All helpers
/// are pure and accept any `f64`, including non-finite values.
pub mod num;
