use calcalyzer::{
    calculator::{
        input::{INVALID_NUMBER, invalid_operator_message, parse_number, read_number, read_operator},
        operator::Operator,
    },
    error::{InputError, SessionError},
    terminal::ScriptedReader,
};

fn assert_rejected_number(text: &str) {
    let mut reader = ScriptedReader::new([text, "7"]);
    let mut output: Vec<String> = Vec::new();

    let value = read_number(&mut reader, &mut output, "n: ").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(value, 7.0, "'{text}' should have been rejected");
    assert_eq!(output, [INVALID_NUMBER], "'{text}' should have been rejected once");
    assert_eq!(reader.prompts().len(), 2);
}

fn assert_accepted_number(text: &str, expected: f64) {
    match parse_number(text) {
        Ok(value) => assert_eq!(value, expected, "'{text}' parsed to the wrong value"),
        Err(e) => panic!("'{text}' was rejected: {e}"),
    }
}

fn assert_rejected_operator(text: &str) {
    let mut reader = ScriptedReader::new([text, "**"]);
    let mut output: Vec<String> = Vec::new();

    let operator = read_operator(&mut reader, &mut output, "op: ").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(operator, Operator::Power, "'{text}' should have been rejected");
    assert_eq!(output, [invalid_operator_message()]);
}

#[test]
fn non_numeric_text_is_rejected() {
    for text in ["abc",
                 "five",
                 "1.2.3",
                 "--5",
                 "+-5",
                 "12abc",
                 "1 2",
                 "NaN",
                 "Infinity",
                 "-Infinity",
                 "0x",
                 "0xZZ",
                 "0b102",
                 "1e",
                 ".",
                 "e5",
                 "1_000"]
    {
        assert_rejected_number(text);
    }
}

#[test]
fn empty_and_blank_operands_are_rejected() {
    assert_rejected_number("");
    assert_rejected_number("   ");
    assert_rejected_number("\t");
    assert_eq!(parse_number(" "), Err(InputError::Empty));
}

#[test]
fn overflowing_operands_are_rejected() {
    assert_rejected_number("1e400");
    assert_rejected_number("-1e400");
    assert!(matches!(parse_number("1e400"), Err(InputError::NotFinite { .. })));
}

#[test]
fn numeric_operands_are_accepted() {
    assert_accepted_number("42", 42.0);
    assert_accepted_number("  42  ", 42.0);
    assert_accepted_number("-0.5", -0.5);
    assert_accepted_number("+3", 3.0);
    assert_accepted_number(".5", 0.5);
    assert_accepted_number("5.", 5.0);
    assert_accepted_number("1E2", 100.0);
    assert_accepted_number("2.5e-1", 0.25);
    assert_accepted_number("0xff", 255.0);
    assert_accepted_number("0o17", 15.0);
    assert_accepted_number("0b101", 5.0);
    assert_accepted_number("007", 7.0);
}

#[test]
fn number_validator_retries_without_limit() {
    let mut answers = vec!["x"; 50];
    answers.push("3.25");
    let mut reader = ScriptedReader::new(answers);
    let mut output: Vec<String> = Vec::new();

    assert_eq!(read_number(&mut reader, &mut output, "n: ").unwrap(), 3.25);
    assert_eq!(output.len(), 50);
    assert!(output.iter().all(|line| line == INVALID_NUMBER));
}

#[test]
fn unknown_operators_are_rejected() {
    for text in ["", " +", "+ ", "^", "***", "x", "//", "%%", "plus", "add", "\u{2212}", "+-"] {
        assert_rejected_operator(text);
    }
}

#[test]
fn every_operator_token_is_accepted() {
    for (text, expected) in [("+", Operator::Add),
                             ("-", Operator::Subtract),
                             ("*", Operator::Multiply),
                             ("/", Operator::Divide),
                             ("%", Operator::Modulo),
                             ("**", Operator::Power)]
    {
        let mut reader = ScriptedReader::new([text]);
        let mut output: Vec<String> = Vec::new();

        assert_eq!(read_operator(&mut reader, &mut output, "op: ").unwrap(), expected);
        assert!(output.is_empty());
    }
}

#[test]
fn invalid_operator_message_lists_every_token() {
    assert_eq!(invalid_operator_message(),
               "Invalid operator! Please enter one of: +, -, *, /, %, **");
}

#[test]
fn validators_stop_when_input_ends() {
    let mut reader = ScriptedReader::new(["abc"]);
    let mut output: Vec<String> = Vec::new();

    let err = read_number(&mut reader, &mut output, "n: ").unwrap_err();
    assert!(matches!(err, SessionError::EndOfInput { ref prompt } if prompt == "n: "));

    let mut reader = ScriptedReader::new(Vec::<String>::new());
    assert!(read_operator(&mut reader, &mut output, "op: ").is_err());
}
