use crate::{
    calculator::{
        analysis::{Calculation, report},
        input::{read_number, read_operator},
    },
    error::SessionError,
    terminal::{LineReader, LineWriter},
};

/// Prompt for the first operand.
pub const FIRST_NUMBER_PROMPT: &str = "Enter the first number: ";
/// Prompt for the second operand.
pub const SECOND_NUMBER_PROMPT: &str = "Enter the second number: ";
/// Prompt for the operator.
pub const OPERATOR_PROMPT: &str = "Enter an operator (+, -, *, /, %, **): ";
/// Prompt asking whether to run another cycle.
pub const CONTINUE_PROMPT: &str = "Do you want to perform another calculation? (yes/no): ";

const RULE: &str = "===========================================";

/// Lines printed once when a session starts.
pub const WELCOME_BANNER: [&str; 4] =
    [RULE, "Welcome to Interactive Calculator & Data Analyzer!", RULE, ""];
/// Lines printed when the user stops the session.
pub const FAREWELL: [&str; 3] =
    ["", "Thank you for using the Interactive Calculator & Data Analyzer!", "Goodbye! 👋"];

/// The lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Cycles keep running until the user opts out.
    Running,
    /// The user opted out; nothing more is read.
    Terminated,
}

/// Returns `true` if `answer` to [`CONTINUE_PROMPT`] ends the session.
///
/// Only `no` and `n`, in any letter case, stop the loop. Anything else,
/// including an empty answer, continues.
///
/// # Example
/// ```
/// use calcalyzer::calculator::session::wants_to_stop;
///
/// assert!(wants_to_stop("N"));
/// assert!(wants_to_stop("No"));
/// assert!(!wants_to_stop("y"));
/// assert!(!wants_to_stop(""));
/// assert!(!wants_to_stop(" no"));
/// ```
#[must_use]
pub fn wants_to_stop(answer: &str) -> bool {
    let answer = answer.to_lowercase();
    answer == "no" || answer == "n"
}

/// Drives calculation cycles between a line reader and a line writer.
pub struct Session<R, W> {
    reader:      R,
    writer:      W,
    state:       State,
    show_banner: bool,
}

impl<R: LineReader, W: LineWriter> Session<R, W> {
    /// Creates a running session that greets the user with the welcome
    /// banner.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader,
               writer,
               state: State::Running,
               show_banner: true }
    }

    /// Skips the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the current state.
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns the reader and writer, ending the session.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Runs cycles until the user opts out.
    ///
    /// The banner is written before the first cycle, the farewell after the
    /// last one. A session that is already terminated reads nothing.
    ///
    /// # Returns
    /// The number of completed cycles.
    ///
    /// # Errors
    /// Returns an error if the reader fails, including when input ends
    /// before the user opts out. No farewell is written in that case.
    ///
    /// # Example
    /// ```
    /// use calcalyzer::{calculator::session::{Session, State}, terminal::ScriptedReader};
    ///
    /// let reader = ScriptedReader::new(["5", "3", "+", "y", "2", "10", "**", "no"]);
    /// let mut session = Session::new(reader, Vec::<String>::new());
    ///
    /// assert_eq!(session.run().unwrap(), 2);
    /// assert_eq!(session.state(), State::Terminated);
    ///
    /// let (_, output) = session.into_parts();
    /// assert!(output.contains(&"2 ** 10 = 1024".to_string()));
    /// assert_eq!(output.last().map(String::as_str), Some("Goodbye! 👋"));
    /// ```
    pub fn run(&mut self) -> Result<usize, SessionError> {
        if self.state == State::Terminated {
            return Ok(0);
        }

        log::info!("Session started");
        if self.show_banner {
            for line in WELCOME_BANNER {
                self.writer.write_line(line);
            }
        }

        let mut cycles = 0;
        while self.state == State::Running {
            self.cycle()?;
            cycles += 1;

            self.writer.write_line("");
            self.writer.write_line("--- Continue? ---");
            let answer = self.reader.read_line(CONTINUE_PROMPT)?;

            if wants_to_stop(&answer) {
                for line in FAREWELL {
                    self.writer.write_line(line);
                }
                self.state = State::Terminated;
            }
        }

        log::info!("Session finished after {cycles} calculation(s)");
        Ok(cycles)
    }

    /// Runs one calculation: reads both operands and the operator, computes
    /// the outcome and writes its report.
    ///
    /// # Errors
    /// Returns an error if the reader fails.
    pub fn cycle(&mut self) -> Result<Calculation, SessionError> {
        self.writer.write_line("");
        self.writer.write_line("--- New Calculation ---");

        let lhs = read_number(&mut self.reader, &mut self.writer, FIRST_NUMBER_PROMPT)?;
        let rhs = read_number(&mut self.reader, &mut self.writer, SECOND_NUMBER_PROMPT)?;
        let operator = read_operator(&mut self.reader, &mut self.writer, OPERATOR_PROMPT)?;

        let calculation = Calculation::new(lhs, operator, rhs);
        log::debug!("Computed {}", calculation.equation());

        report(&mut self.writer, &calculation);
        Ok(calculation)
    }
}
