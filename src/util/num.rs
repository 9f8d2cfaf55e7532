/// Smallest magnitude printed without exponent notation.
pub const MIN_PLAIN_MAGNITUDE: f64 = 1e-6;
/// Magnitude from which values are printed with exponent notation.
pub const MAX_PLAIN_MAGNITUDE: f64 = 1e21;

/// Renders a number for display.
///
/// Integral values are printed without a fractional part, other values with
/// the shortest decimal that round-trips. Magnitudes of at least `1e21` or
/// below `1e-6` switch to exponent notation with an explicit exponent sign.
/// Negative zero prints as `0`.
///
/// # Parameters
/// - `value`: The number to render.
///
/// # Returns
/// The textual form of `value`.
///
/// # Example
/// ```
/// use calcalyzer::util::num::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(-150.0), "-150");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (MIN_PLAIN_MAGNITUDE..MAX_PLAIN_MAGNITUDE).contains(&magnitude) {
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => scientific,
    }
}

/// Returns `true` if `value` is finite and has no fractional part.
///
/// # Example
/// ```
/// use calcalyzer::util::num::is_integral;
///
/// assert!(is_integral(-150.0));
/// assert!(!is_integral(3.5));
/// assert!(!is_integral(f64::INFINITY));
/// assert!(!is_integral(f64::NAN));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Returns `true` if `value` is integral and divisible by two.
///
/// Uses the floating remainder, so the sign of the value does not matter.
///
/// # Example
/// ```
/// use calcalyzer::util::num::is_even;
///
/// assert!(is_even(8.0));
/// assert!(is_even(-150.0));
/// assert!(!is_even(7.0));
/// assert!(!is_even(2.5));
/// ```
#[must_use]
pub fn is_even(value: f64) -> bool {
    is_integral(value) && value % 2.0 == 0.0
}
