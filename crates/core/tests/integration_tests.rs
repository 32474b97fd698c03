//! Integration tests for kde1d-core
//!
//! These tests drive the public API end-to-end: token vector in, validated
//! options and resolved settings out.

use kde1d_core::{
    command::{
        separator::EscapeSequence, CommandRegistry, FlagCommand, ValueCommand, COMMENT_CHAR,
        ECHO_OFF, INPUT_FILE_PATH, LABEL_HEADER, OUTPUT_FILE_PATH, SEPARATOR,
    },
    error::{Error, RuleViolation},
    interpreter::{standard_rule, ParameterInterpreter, ParsedOptions},
    rule::AssignmentRule,
    settings::{EchoMode, OutputTarget, RunSettings},
};

static DUMMY_NO_ARG: FlagCommand = FlagCommand::new("DUMMY_NO_ARG", "--dummy-no-arg", &[]);
static DUMMY_LEVEL: ValueCommand<char> =
    ValueCommand::new("DUMMY_LEVEL", "--level", &["-l"], level);

fn level(raw: &str) -> Option<char> {
    match raw {
        "low" => Some('L'),
        "high" => Some('H'),
        _ => None,
    }
}

fn dummy_registry() -> CommandRegistry {
    CommandRegistry::new()
        .with_value(&INPUT_FILE_PATH)
        .with_value(&DUMMY_LEVEL)
        .with_flag(&DUMMY_NO_ARG)
}

/// Test a full invocation through the standard table and rule
#[test]
fn test_complete_invocation_workflow() {
    let args: Vec<String> = [
        "-f",
        "samples.txt",
        "--comment-char",
        "%",
        "--separator",
        "\\\\",
        "--label-header",
        "x\\ty",
        "-out",
        "result.tsv",
        "--echo-off",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    let options = ParsedOptions::from_args(&args).unwrap();

    assert_eq!(options.value_of(&INPUT_FILE_PATH).unwrap(), "samples.txt");
    assert_eq!(options.value_of(&COMMENT_CHAR).unwrap(), "%");
    assert_eq!(options.value_of(&SEPARATOR), Some(&'\\'));
    assert_eq!(options.value_of(&LABEL_HEADER).unwrap(), "x\\ty");
    assert_eq!(options.value_of(&OUTPUT_FILE_PATH).unwrap(), "result.tsv");
    assert!(options.is_present(&ECHO_OFF));
    assert_eq!(options.commands().len(), 6);

    let settings = RunSettings::from_options(&options).unwrap();
    assert_eq!(settings.source.comment_prefix, "%");
    assert_eq!(settings.format.separator(), '\\');
    assert_eq!(
        settings.output,
        OutputTarget::CreateNew("result.tsv".to_string())
    );
    assert_eq!(settings.echo, EchoMode::Silent);
}

/// Test each error class surfaces with the offending form
#[test]
fn test_error_messages_name_the_offender() {
    let cases: [(&[&str], &str); 6] = [
        (&["--unknown"], "unknown command: <--unknown>"),
        (&["-f"], "missing value for <--input-file>"),
        (&["-f", "a", "-sep", "ab"], "invalid value for <--separator>: \"ab\""),
        (&["-f", "a", "-f", "b"], "duplicate: <--input-file>"),
        (&[], "required and exclusive commands: <--input-file>"),
        (
            &["-f", "a", "-out", "b", "-out-f", "c"],
            "exclusive commands: <--output>, <--output-force>",
        ),
    ];

    for (args, expected) in cases {
        let error = ParsedOptions::from_args(args).unwrap_err();
        assert_eq!(error.to_string(), expected, "args: {args:?}");
        assert!(error.is_usage_error());
    }
}

/// Test every listed escape sequence is accepted end-to-end
#[test]
fn test_separator_escapes_workflow() {
    for escape in EscapeSequence::ALL {
        let options = ParsedOptions::from_args(&["-f", "in.txt", "-sep", escape.as_str()]).unwrap();
        assert_eq!(options.value_of(&SEPARATOR), Some(&escape.character()));
    }

    let result = ParsedOptions::from_args(&["-f", "in.txt", "-sep", "\\a"]);
    assert!(matches!(result, Err(Error::InvalidValueFormat { .. })));
}

/// Test a custom registry and rule set, independent of the built-in table
#[test]
fn test_custom_registry_workflow() {
    let registry = dummy_registry();
    let rule = AssignmentRule::composite([
        AssignmentRule::single_required([INPUT_FILE_PATH.command()]),
        AssignmentRule::prohibited(DUMMY_NO_ARG.command()),
    ]);
    let interpreter = ParameterInterpreter::new(&registry, rule);

    let options = interpreter.interpret(&["-l", "high", "-f", "test.txt"]).unwrap();
    assert_eq!(options.value_of(&DUMMY_LEVEL), Some(&'H'));
    assert_eq!(options.value_of(&INPUT_FILE_PATH).unwrap(), "test.txt");

    let result = interpreter.interpret(&["-f", "test.txt", "--dummy-no-arg"]);
    assert!(matches!(
        result,
        Err(Error::AssignmentRule(RuleViolation::Prohibited {
            command: "--dummy-no-arg"
        }))
    ));

    let result = interpreter.interpret(&["-f", "test.txt", "-l", "medium"]);
    assert!(matches!(
        result,
        Err(Error::InvalidValueFormat {
            command: "--level",
            ..
        })
    ));

    // Built-in forms that were not registered are unknown here
    let result = interpreter.interpret(&["-f", "test.txt", "--echo-off"]);
    assert!(matches!(result, Err(Error::UnrecognizedToken(_))));
}

/// Test the flag-only command may sit anywhere relative to value pairs
#[test]
fn test_flag_position_does_not_matter() {
    let registry = dummy_registry();
    let interpreter = ParameterInterpreter::new(&registry, AssignmentRule::Null);
    let expected = interpreter.interpret(&["-f", "test.txt", "--dummy-no-arg"]).unwrap();

    let arg_lists: [&[&str]; 2] = [
        &["--dummy-no-arg", "-f", "test.txt"],
        &["-f", "test.txt", "--dummy-no-arg"],
    ];
    for args in arg_lists {
        let options = interpreter.interpret(args).unwrap();
        assert_eq!(options, expected);
        assert!(options.is_present(&DUMMY_NO_ARG));
    }
}

/// Test the standard rule is a flat composite of its two groups
#[test]
fn test_standard_rule_shape() {
    let AssignmentRule::Composite(members) = standard_rule() else {
        panic!("Expected a composite rule");
    };
    assert_eq!(members.len(), 2);
    assert_eq!(ParameterInterpreter::standard().rule(), &standard_rule());
}
