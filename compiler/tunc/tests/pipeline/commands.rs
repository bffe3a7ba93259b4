//! Each subcommand against the demo files.

use pretty_assertions::assert_eq;
use tunc::Command;

use crate::common::{demo, drive_file, options};

#[test]
fn lex_prints_every_token() {
    let outcome = drive_file(&options(Command::Lex, &demo("add.tun")));
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);

    let lines: Vec<_> = outcome.stdout.lines().collect();
    assert_eq!(lines[0], "{Type: LET, Literal: let}");
    assert_eq!(lines[1], "{Type: IDENTIFIER, Literal: a}");
    assert_eq!(lines[2], "{Type: EQUAL, Literal: =}");
    assert_eq!(lines[3], "{Type: INT, Literal: 1}");
    assert_eq!(lines.last(), Some(&"{Type: EOF, Literal: }"));
    assert!(lines.contains(&"{Type: FUNCTION, Literal: function}"));
    assert!(lines.contains(&"{Type: LBRACE, Literal: {}"));
}

#[test]
fn lex_fails_on_invalid_character() {
    let outcome = drive_file(&options(Command::Lex, &demo("bad_char.tun")));
    assert_eq!(outcome.code, 3);
    assert!(outcome.stderr.contains("error[E0001]: invalid character `*`"));
    assert!(outcome.stderr.contains("--> "));
}

#[test]
fn parse_prints_labelled_json() {
    let outcome = drive_file(&options(Command::Parse, &demo("nested_call.tun")));
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);

    let json: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    let statements = json["Statements"].as_array().unwrap();
    assert_eq!(statements.len(), 5);
    assert_eq!(statements[0]["NodeInfo"]["NodeName"], "VariableAssignment");
    assert_eq!(statements[2]["Value"]["NodeInfo"]["NodeName"], "ComplexExpression");

    let call = &statements[4]["Value"];
    assert_eq!(call["FunctionName"], "add");
    assert_eq!(call["Arguments"][1]["NodeInfo"]["NodeName"], "FunctionCall");
    // Four-space indentation.
    assert!(outcome.stdout.starts_with("{\n    \"Statements\": ["));
}

#[test]
fn check_passes_with_body_locals_and_under_binding() {
    let outcome = drive_file(&options(Command::Check, &demo("locals.tun")));
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "pass check\n");
}

#[test]
fn run_prints_sorted_bindings() {
    let outcome = drive_file(&options(Command::Run, &demo("add.tun")));
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(
        outcome.stdout,
        "a = 1\n\
         add = function(a, b) { return a + b; }\n\
         b = 20\n\
         e = 21\n"
    );
}

#[test]
fn run_nested_call() {
    let outcome = drive_file(&options(Command::Run, &demo("nested_call.tun")));
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert!(outcome.stdout.contains("c = 3\n"));
    assert!(outcome.stdout.contains("e = 4\n"));
}

#[test]
fn run_under_bound_call_uses_caller_binding() {
    // `add(a)` leaves `b` unbound, so the body reads the caller's `b = 20`.
    let outcome = drive_file(&options(Command::Run, &demo("locals.tun")));
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert!(outcome.stdout.contains("e = 19\n"));
}

#[test]
fn run_under_bound_call_fails_when_strict() {
    let mut opts = options(Command::Run, &demo("locals.tun"));
    opts.arity = tun_eval::ArityPolicy::Strict;
    let outcome = drive_file(&opts);
    assert_eq!(outcome.code, 6);
    assert!(outcome.stderr.contains("add expects 2 arguments, got 1"));
}

#[test]
fn snapshot_demo_is_a_reference_error() {
    let outcome = drive_file(&options(Command::Check, &demo("snapshot.tun")));
    assert_eq!(outcome.code, 5);
    assert!(outcome.stderr.contains("error[E2002]"));
    assert!(outcome.stderr.contains("snapshot.tun:3:13"));
}

#[test]
fn snapshot_demo_runs_without_check() {
    let mut opts = options(Command::Run, &demo("snapshot.tun"));
    opts.skip_check = true;
    let outcome = drive_file(&opts);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert!(outcome.stdout.contains("r = 2\n"));
}

#[test]
fn missing_file_is_an_open_failure() {
    let outcome = drive_file(&options(Command::Run, &demo("no_such_file.tun")));
    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.starts_with("failed to open "));
    assert!(outcome.stdout.is_empty());
}
