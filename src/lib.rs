//! # calcalyzer
//!
//! calcalyzer is an interactive command-line calculator written in Rust.
//! It reads two operands and an operator, computes the result with one of
//! six arithmetic operations, classifies the result by sign, integrality,
//! parity and magnitude, and repeats until the user stops.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    calculator::session::Session,
    error::SessionError,
    terminal::{LineReader, LineWriter},
};

/// Reads operands and operators, computes results and reports on them.
///
/// This module holds everything between the terminal and the user-visible
/// report: token grammars, input validation, the arithmetic operations, the
/// result classifier and the session loop that ties them together.
///
/// # Responsibilities
/// - Validates user input until it is acceptable.
/// - Dispatches operator tokens to pure arithmetic functions.
/// - Classifies and reports every outcome.
/// - Repeats until the user opts out.
pub mod calculator;
/// Provides the error types used across the crate.
///
/// Input errors describe rejected text and never stop a session. Session
/// errors describe failures of the terminal itself.
pub mod error;
/// Line-oriented terminal input and output.
///
/// Declares the `LineReader` and `LineWriter` traits the session talks to,
/// together with implementations over standard streams and an in-memory
/// scripted reader for tests.
pub mod terminal;
/// General utilities for rendering and inspecting numbers.
pub mod util;

/// Runs a full session between `reader` and `writer`.
///
/// Prints the welcome banner unless `show_banner` is `false`, then repeats
/// calculation cycles until the user answers the continue prompt with `no`
/// or `n`.
///
/// # Returns
/// The number of completed calculations.
///
/// # Errors
/// Returns an error if the reader fails or input ends before the user opts
/// out.
///
/// # Examples
/// ```
/// use calcalyzer::{run_session, terminal::ScriptedReader};
///
/// let reader = ScriptedReader::new(["5", "0", "/", "n"]);
/// let mut output: Vec<String> = Vec::new();
///
/// assert_eq!(run_session(reader, &mut output, true).unwrap(), 1);
/// assert!(output.contains(&"Error occurred: Error: Division by zero!".to_string()));
///
/// // Input that ends before the user opts out is an error.
/// let reader = ScriptedReader::new(["5"]);
/// assert!(run_session(reader, Vec::<String>::new(), false).is_err());
/// ```
pub fn run_session<R, W>(reader: R, writer: W, show_banner: bool) -> Result<usize, SessionError>
    where R: LineReader,
          W: LineWriter
{
    let session = Session::new(reader, writer);
    let mut session = if show_banner { session } else { session.without_banner() };

    session.run()
}
