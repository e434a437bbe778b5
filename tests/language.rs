use std::fs;

use reckon::{Environment, Error, EvalError, LexError, ParseError, eval_line};
use walkdir::WalkDir;

#[test]
fn script_fixtures_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut env = Environment::new();
        for (number, line) in content.lines().enumerate() {
            let Some((input, expected)) = parse_fixture_line(line) else {
                continue;
            };
            count += 1;

            let result = eval_line(input, &mut env);
            match (expected, result) {
                (Expected::Value(want), Ok(got)) => {
                    assert!((want - got).abs() <= 1e-9 * want.abs().max(1.0),
                            "{path:?}:{}: `{input}` gave {got}, expected {want}",
                            number + 1);
                },
                (Expected::Failure, Err(_)) => {},
                (Expected::Value(want), Err(e)) => {
                    panic!("{path:?}:{}: `{input}` failed with {e}, expected {want}",
                           number + 1)
                },
                (Expected::Failure, Ok(got)) => {
                    panic!("{path:?}:{}: `{input}` gave {got}, expected an error",
                           number + 1)
                },
            }
        }
    }

    assert!(count > 0, "No script fixtures found in tests/scripts");
}

enum Expected {
    Value(f64),
    Failure,
}

/// Splits a fixture line of the form `<input> => <value>` or
/// `<input> => error`. Blank lines and `#` comments yield `None`.
fn parse_fixture_line(line: &str) -> Option<(&str, Expected)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (input, expected) = trimmed.rsplit_once("=>")
                                   .unwrap_or_else(|| panic!("Malformed fixture line: {line}"));
    let expected = match expected.trim() {
        "error" => Expected::Failure,
        value => Expected::Value(value.parse()
                                      .unwrap_or_else(|_| panic!("Bad expected value: {value}"))),
    };

    Some((input.trim(), expected))
}

/// Evaluates each line in one session and returns the last result.
fn run_session(lines: &[&str]) -> Result<f64, Error> {
    let mut env = Environment::new();
    let (last, init) = lines.split_last().expect("at least one line");
    for line in init {
        eval_line(line, &mut env).unwrap_or_else(|e| panic!("Line `{line}` failed: {e}"));
    }
    eval_line(last, &mut env)
}

fn assert_value(src: &str, expected: f64) {
    match run_session(&[src]) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = run_session(&[src]) {
        panic!("`{src}` gave {value} but was expected to fail")
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4) * 5", 70.0);
    assert_value("((((1))))", 1.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("8 - 4 - 2", 2.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 * 6 / 3", 4.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn real_literals() {
    assert_value("1.5 * 4", 6.0);
    assert_value(".25 + .25", 0.5);
    assert_value("3. / 2", 1.5);
    assert_value("7 / 2", 3.5);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("   2+3*4   ", 14.0);
    assert_value("2\t*\t3", 6.0);
}

#[test]
fn variables_persist_across_lines() {
    assert_eq!(run_session(&["x = 5", "x + 1"]), Ok(6.0));
    assert_eq!(run_session(&["x = 5", "y = x * 2", "x + y"]), Ok(15.0));
    assert_eq!(run_session(&["x = 1", "x = x + 1", "x = x + 1", "x"]), Ok(3.0));
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_value("x = 5", 5.0);
    assert_value("total = (1 + 2) * 3", 9.0);
}

#[test]
fn session_continues_after_an_error() {
    let mut env = Environment::new();
    assert_eq!(eval_line("a = 2", &mut env), Ok(2.0));
    assert!(matches!(eval_line("2 +", &mut env), Err(Error::Parse(_))));
    assert!(matches!(eval_line("a $ 1", &mut env), Err(Error::Lex(_))));
    assert!(matches!(eval_line("a / 0", &mut env), Err(Error::Eval(_))));
    assert_eq!(eval_line("a * 10", &mut env), Ok(20.0));
}

#[test]
fn failed_line_does_not_bind() {
    let mut env = Environment::new();
    assert!(eval_line("z = 1 / 0", &mut env).is_err());
    assert!(!env.contains("z"));
    assert!(eval_line("z = 1 +", &mut env).is_err());
    assert!(env.is_empty());
}

#[test]
fn sessions_do_not_share_variables() {
    let mut first = Environment::new();
    let mut second = Environment::new();
    eval_line("shared = 1", &mut first).unwrap();
    assert!(eval_line("shared", &mut second).is_err());
}

#[test]
fn unknown_variable_is_error() {
    assert_eq!(run_session(&["y + 1"]),
               Err(Error::Eval(EvalError::UnknownVariable { name:   "y".to_string(),
                                                            column: 1, })));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(run_session(&["1 / 0"]),
               Err(Error::Eval(EvalError::DivisionByZero { column: 3 })));
    assert_failure("5 / (2 - 2)");
    assert_eq!(run_session(&["zero = 0", "1 / zero"]),
               Err(Error::Eval(EvalError::DivisionByZero { column: 3 })));
}

#[test]
fn incomplete_input_is_error() {
    assert_eq!(run_session(&["2 +"]),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput { column: 4 })));
    assert_failure("");
    assert_failure("(");
    assert_failure("x =");
}

#[test]
fn malformed_input_is_error() {
    assert_failure("1 + 2 3");
    assert_failure("(1 + 2");
    assert_failure("1 + 2)");
    assert_failure("* 2");
    assert_failure("x = y = 1");
    assert_failure("-1");
    assert_eq!(run_session(&["1.2.3 + 1"]),
               Err(Error::Parse(ParseError::InvalidNumber { literal: "1.2.3".to_string(),
                                                            column:  1, })));
}

#[test]
fn deep_nesting_is_error() {
    let parens = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(run_session(&[&parens]),
               Err(Error::Parse(ParseError::NestingTooDeep { column: 257 })));

    let chain = format!("1{}", " + 1".repeat(12000));
    assert_eq!(run_session(&[&chain]),
               Err(Error::Parse(ParseError::NestingTooDeep { column: 1027 })));

    let mut env = Environment::new();
    assert!(eval_line(&chain, &mut env).is_err());
    assert_eq!(eval_line("x = ((2)) * 3", &mut env), Ok(6.0));
}

#[test]
fn oversized_literal_is_error() {
    let huge = "9".repeat(400);
    assert_eq!(run_session(&[&format!("{huge} - 1")]),
               Err(Error::Parse(ParseError::InvalidNumber { literal: huge,
                                                            column:  1, })));
}

#[test]
fn unknown_symbol_is_error() {
    assert_eq!(run_session(&["2 ^ 3"]),
               Err(Error::Lex(LexError::UnknownSymbol { symbol: '^',
                                                        column: 3, })));
}

#[test]
fn error_messages_are_readable() {
    let message = run_session(&["(1 + 2"]).unwrap_err().to_string();
    assert_eq!(message,
               "Error at column 1: Expected closing parenthesis ')' but none found.");

    let message = run_session(&["1 + 2 3"]).unwrap_err().to_string();
    assert_eq!(message,
               "Error at column 7: Extra tokens after expression. Check your input: 3");
}
