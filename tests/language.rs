use std::fs::{self};

use numera::{
    error::{NumeralError, RuntimeError},
    get_results,
    interpreter::{Interpreter, command::Keyword, value::Value},
    numeral::Numeral,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            let execution = get_results(&code);
            if !execution.is_success() {
                panic!("DSL example {} in {:?} failed:\n{}\nErrors: {:?}",
                       i + 1,
                       path,
                       code,
                       execution.failures);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```roman") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) -> Vec<Value> {
    let execution = get_results(src);
    if !execution.is_success() {
        panic!("Script failed: {:?}", execution.failures);
    }
    execution.results
}

fn assert_failure(src: &str) -> RuntimeError {
    let mut execution = get_results(src);
    assert!(!execution.is_success(), "Script succeeded but was expected to fail");
    execution.failures.remove(0).error
}

fn numeral(decimal: i64) -> Value {
    Value::Numeral(Numeral::from_decimal(decimal).unwrap())
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn assignment_and_display() {
    assert_eq!(assert_success("set a X\ndisplay a"), vec![text("X")]);
    assert_eq!(assert_success("set n 42; display n"), vec![text("42")]);
    assert_eq!(assert_success("display MCMXCIV"), vec![text("MCMXCIV")]);
}

#[test]
fn add_two_numeral_variables() {
    let results = assert_success("set a X\nset b V\nadd a b");
    assert_eq!(results, vec![numeral(15)]);
    assert_eq!(results[0].to_string(), "XV");
}

#[test]
fn basic_arithmetic() {
    assert_eq!(assert_success("add X V"), vec![numeral(15)]);
    assert_eq!(assert_success("subtract X IV"), vec![numeral(6)]);
    assert_eq!(assert_success("multiply XII XII"), vec![numeral(144)]);
    assert_eq!(assert_success("divide X IV"), vec![Value::Real(2.5)]);
}

#[test]
fn mixed_numeral_and_integer_arithmetic() {
    assert_eq!(assert_success("add X 5"), vec![numeral(15)]);
    assert_eq!(assert_success("add 5 X"), vec![numeral(15)]);
    assert_eq!(assert_success("set a 7; multiply a III"), vec![numeral(21)]);
}

#[test]
fn plain_integer_arithmetic_is_unbounded() {
    assert_eq!(assert_success("add 3000 3000"), vec![Value::Integer(6000)]);
    assert_eq!(assert_success("subtract 1 5"), vec![Value::Integer(-4)]);
    assert_eq!(assert_success("divide 9 2"), vec![Value::Real(4.5)]);
}

#[test]
fn whole_quotients_keep_their_decimal_point() {
    let results = assert_success("divide L X; divide 9 2; add X V");
    let rendered: Vec<String> = results.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["5.0", "4.5", "XV"]);
}

#[test]
fn conversions() {
    assert_eq!(assert_success("convert MMMCMXCIX"), vec![Value::Integer(3999)]);
    assert_eq!(assert_success("convert 1994"), vec![numeral(1994)]);
    assert_eq!(assert_success("set y 2024; convert y; display y"),
               vec![numeral(2024), text("2024")]);
}

#[test]
fn variables_can_be_overwritten() {
    assert_eq!(assert_success("set a X; set a 3; display a"), vec![text("3")]);
}

#[test]
fn variables_persist_across_lines() {
    let mut interpreter = Interpreter::new();

    assert!(interpreter.execute("set total C").is_success());
    let execution = interpreter.execute("add total L");

    assert_eq!(execution.results, vec![numeral(150)]);
    assert_eq!(interpreter.variables().len(), 1);
    assert_eq!(interpreter.variables().to_string(), "total = C");
}

#[test]
fn failing_statement_does_not_stop_the_line() {
    let mut interpreter = Interpreter::new();
    let execution = interpreter.execute("display nothing; set a II; add a a; convert 0; display a");

    assert_eq!(execution.results, vec![numeral(4), text("II")]);
    assert_eq!(execution.failures.len(), 2);
    assert_eq!(execution.failures[0].statement, "display nothing");
    assert_eq!(execution.failures[1].statement, "convert 0");
}

#[test]
fn trailing_separator_is_ignored() {
    assert_eq!(assert_success("set a I; display a;"), vec![text("I")]);
}

#[test]
fn range_overflow_is_error() {
    let error = assert_failure("add MMM M");
    assert!(matches!(error,
                     RuntimeError::Operation { op:     Keyword::Add,
                                               source: NumeralError::Range { value: 4000 }, }));

    assert!(matches!(assert_failure("subtract V X"),
                     RuntimeError::Operation { op:     Keyword::Subtract,
                                               source: NumeralError::Range { value: -5 }, }));
    assert!(matches!(assert_failure("subtract V V"),
                     RuntimeError::Operation { source: NumeralError::Range { value: 0 },
                                               .. }));
}

#[test]
fn conversion_out_of_range_is_error() {
    assert!(matches!(assert_failure("convert 4000"),
                     RuntimeError::Numeral(NumeralError::Range { value: 4000 })));
    assert!(matches!(assert_failure("convert 0"),
                     RuntimeError::Numeral(NumeralError::Range { value: 0 })));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("divide 1 0"),
                     RuntimeError::Operation { op:     Keyword::Divide,
                                               source: NumeralError::DivisionByZero, }));
}

#[test]
fn unknown_variable_is_error() {
    assert_eq!(assert_failure("display foo"),
               RuntimeError::UnresolvedToken { token: "foo".to_string() });
    assert_eq!(assert_failure("add x 1"),
               RuntimeError::UnresolvedToken { token: "x".to_string() });
}

#[test]
fn invalid_numeral_tokens_are_unresolved() {
    assert!(matches!(assert_failure("display IIII"), RuntimeError::UnresolvedToken { .. }));
    assert!(matches!(assert_failure("display x"), RuntimeError::UnresolvedToken { .. }));
    assert!(matches!(assert_failure("add -1 I"), RuntimeError::UnresolvedToken { .. }));
}

#[test]
fn numeral_shaped_variable_name_is_error() {
    assert_eq!(assert_failure("set X 5"),
               RuntimeError::InvalidVariableName { name: "X".to_string() });
    assert_eq!(assert_failure("set MIX 5"),
               RuntimeError::InvalidVariableName { name: "MIX".to_string() });
    assert_success("set mix 5");
}

#[test]
fn malformed_commands_are_errors() {
    assert!(matches!(assert_failure("display"), RuntimeError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("print a"), RuntimeError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("add I"), RuntimeError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("add I I I"), RuntimeError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("convert I II"), RuntimeError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("set a"), RuntimeError::MalformedCommand { .. }));
}

#[test]
fn filler_words_are_significant() {
    assert!(matches!(assert_failure("set a = X"), RuntimeError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("add a and b"), RuntimeError::MalformedCommand { .. }));
}

#[test]
fn huge_integer_literal_is_error() {
    assert!(matches!(assert_failure("display 99999999999999999999"),
                     RuntimeError::LiteralTooLarge { .. }));
}

#[test]
fn failure_messages_name_the_statement() {
    let execution = get_results("add MMM M");
    assert_eq!(execution.failures[0].to_string(),
               "Error in command 'add MMM M': Error in operation 'add': Value 4000 is out of \
                range, must be between 1 and 3999.");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.roman").unwrap();
    let results = assert_success(&contents);
    assert_eq!(results.last(), Some(&text("MMXXIV")));
}
