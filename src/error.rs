/// Input errors.
///
/// Defines the reasons a line of user text is rejected by one of the input
/// validators. These errors never end a session; the validators report them
/// and ask again.
pub mod input_error;
/// Session errors.
///
/// Contains the errors that can stop a session before the user opts out,
/// such as the input stream closing or the terminal failing to read.
pub mod session_error;

pub use input_error::InputError;
pub use session_error::SessionError;
