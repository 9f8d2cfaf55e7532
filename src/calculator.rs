/// The result classifier.
///
/// Turns a calculation outcome into a typed analysis (sign, integrality,
/// parity, special tags, magnitude) and writes the result and data analysis
/// sections of the report.
pub mod analysis;
/// The input validators.
///
/// Both validators keep prompting until the user enters acceptable text,
/// answering every rejected line with a fixed message.
///
/// # Responsibilities
/// - Parses operands into finite numbers.
/// - Matches operator tokens exactly.
pub mod input;
/// Token grammars for operands and operator tokens.
///
/// Uses logos to decide whether a whole line is one numeric literal or one
/// operator token.
pub mod lexer;
/// The six pure arithmetic operations.
pub mod operation;
/// The operator set and its dispatch to the arithmetic operations.
pub mod operator;
/// The tagged outcome of a calculation.
///
/// An outcome is a number, an error message, or neither. Keeping the three
/// apart lets the classifier pick its branch without inspecting values.
pub mod outcome;
/// The session loop.
///
/// Repeats read, compute and report cycles until the user answers the
/// continue prompt with `no` or `n`.
pub mod session;
