use std::io::Cursor;

use calcalyzer::{
    calculator::session::{
        CONTINUE_PROMPT, FAREWELL, FIRST_NUMBER_PROMPT, OPERATOR_PROMPT, SECOND_NUMBER_PROMPT,
        Session, State, WELCOME_BANNER,
    },
    error::SessionError,
    terminal::{LineReader, LineWriter, PromptReader, ScriptedReader, StreamWriter},
};

fn run_script(answers: &[&str]) -> (usize, ScriptedReader, Vec<String>) {
    let mut session = Session::new(ScriptedReader::new(answers.iter().copied()), Vec::<String>::new());
    let cycles = session.run().unwrap_or_else(|e| panic!("Session failed: {e}"));
    let (reader, output) = session.into_parts();
    (cycles, reader, output)
}

#[test]
fn stop_answers_end_the_session() {
    for answer in ["n", "N", "no", "No", "NO", "nO"] {
        let (cycles, reader, output) = run_script(&["1", "2", "+", answer]);

        assert_eq!(cycles, 1, "'{answer}' should stop the session");
        assert_eq!(reader.remaining(), 0);
        assert!(output.ends_with(&FAREWELL.map(String::from)));
    }
}

#[test]
fn any_other_answer_continues() {
    for answer in ["y", "yes", "", "nope", " no", "no ", "maybe", "0"] {
        let (cycles, _, output) = run_script(&["1", "2", "+", answer, "3", "4", "*", "n"]);

        assert_eq!(cycles, 2, "'{answer}' should continue the session");
        assert!(output.contains(&"3 * 4 = 12".to_string()));
    }
}

#[test]
fn banner_is_written_once() {
    let (_, _, output) = run_script(&["1", "1", "+", "y", "2", "2", "+", "n"]);

    assert!(output.starts_with(&WELCOME_BANNER.map(String::from)));
    let welcomes = output.iter()
                         .filter(|line| line.starts_with("Welcome to"))
                         .count();
    assert_eq!(welcomes, 1);
}

#[test]
fn banner_can_be_skipped() {
    let mut session = Session::new(ScriptedReader::new(["1", "1", "+", "n"]), Vec::<String>::new())
        .without_banner();
    session.run().unwrap();

    let (_, output) = session.into_parts();
    assert_eq!(output[..2], ["", "--- New Calculation ---"]);
}

#[test]
fn prompts_follow_the_cycle_order() {
    let (_, reader, _) = run_script(&["x", "1", "2", "^", "+", "n"]);

    assert_eq!(reader.prompts(),
               [FIRST_NUMBER_PROMPT,
                FIRST_NUMBER_PROMPT,
                SECOND_NUMBER_PROMPT,
                OPERATOR_PROMPT,
                OPERATOR_PROMPT,
                CONTINUE_PROMPT]);
}

#[test]
fn errors_do_not_end_the_session() {
    let (cycles, _, output) = run_script(&["5", "0", "/", "y", "4", "0", "%", "y", "2", "3", "-", "n"]);

    assert_eq!(cycles, 3);
    assert!(output.contains(&"Error occurred: Error: Division by zero!".to_string()));
    assert!(output.contains(&"Result is undefined or null, something went wrong!".to_string()));
    assert!(output.contains(&"2 - 3 = -1".to_string()));
}

#[test]
fn closed_input_ends_without_farewell() {
    let mut session = Session::new(ScriptedReader::new(["1", "2", "+"]), Vec::<String>::new());

    let err = session.run().unwrap_err();
    assert!(matches!(err, SessionError::EndOfInput { ref prompt } if prompt == CONTINUE_PROMPT));
    assert_eq!(session.state(), State::Running);

    let (_, output) = session.into_parts();
    assert!(!output.iter().any(|line| line == "Goodbye! 👋"));
}

#[test]
fn terminated_session_reads_nothing_more() {
    let reader = ScriptedReader::new(["1", "2", "+", "n", "unused"]);
    let mut session = Session::new(reader, Vec::<String>::new());

    assert_eq!(session.run().unwrap(), 1);
    assert_eq!(session.state(), State::Terminated);
    assert_eq!(session.run().unwrap(), 0);

    let (reader, _) = session.into_parts();
    assert_eq!(reader.remaining(), 1);
}

#[test]
fn cycle_returns_the_calculation() {
    let mut session = Session::new(ScriptedReader::new(["7", "2", "/"]), Vec::<String>::new());

    let calculation = session.cycle().unwrap();
    assert_eq!(calculation.equation(), "7 / 2 = 3.5");
}

#[test]
fn prompt_reader_strips_line_terminators() {
    let input = Cursor::new("12\r\n+\nlast");
    let mut prompts: Vec<u8> = Vec::new();
    let mut reader = PromptReader::new(input, &mut prompts);

    assert_eq!(reader.read_line("a: ").unwrap(), "12");
    assert_eq!(reader.read_line("b: ").unwrap(), "+");
    assert_eq!(reader.read_line("c: ").unwrap(), "last");
    assert!(matches!(reader.read_line("d: "), Err(SessionError::EndOfInput { .. })));

    drop(reader);
    assert_eq!(String::from_utf8(prompts).unwrap(), "a: b: c: d: ");
}

#[test]
fn stream_writer_appends_lines() {
    let mut writer = StreamWriter::new(Vec::<u8>::new());
    writer.write_line("first");
    writer.write_line("");
    writer.write_line("second");

    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "first\n\nsecond\n");
}

#[test]
fn session_over_byte_streams() {
    let input = Cursor::new("5\n3\n+\nno\n");
    let mut prompts: Vec<u8> = Vec::new();
    let mut session = Session::new(PromptReader::new(input, &mut prompts),
                                   StreamWriter::new(Vec::<u8>::new()));

    assert_eq!(session.run().unwrap(), 1);

    let (_, writer) = session.into_parts();
    let text = String::from_utf8(writer.into_inner()).unwrap();
    assert!(text.contains("5 + 3 = 8\n"));
    assert!(text.ends_with("Goodbye! 👋\n"));
}
