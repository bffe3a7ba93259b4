//! Pipeline behaviour on small in-memory programs.

use pretty_assertions::assert_eq;
use tunc::Command;

use crate::common::{drive_source, drive_source_with, options};

#[test]
fn undefined_reference_stops_before_run() {
    let outcome = drive_source(Command::Run, "let a = b\n");
    assert_eq!(outcome.code, 5);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains("error[E2001]"));
    assert!(outcome.stderr.contains("`b`"));
    assert!(outcome.stderr.contains("--> test.tun:1:9"));
}

#[test]
fn self_reference_is_undefined() {
    let outcome = drive_source(Command::Check, "let a = a");
    assert_eq!(outcome.code, 5);
    assert!(outcome.stderr.contains("undefined variable: a"));
}

#[test]
fn rebinding_uses_the_old_value() {
    let outcome = drive_source(Command::Run, "let a = 1\nlet a = a + 1\n");
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "a = 2\n");
}

#[test]
fn subtraction_chains_to_the_right() {
    let outcome = drive_source(Command::Run, "let r = 10 - 3 - 2");
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "r = 9\n");
}

#[test]
fn truncated_source_is_a_parse_error() {
    let outcome = drive_source(Command::Parse, "let a = ");
    assert_eq!(outcome.code, 4);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains("error[E1"));
}

#[test]
fn call_cannot_be_a_left_operand() {
    let outcome = drive_source(Command::Parse, "let f = function() { return 1 }\nlet r = f() + 1");
    assert_eq!(outcome.code, 4);
    assert!(outcome.stderr.contains("error[E1001]"));
}

#[test]
fn empty_source_runs_to_nothing() {
    let outcome = drive_source(Command::Run, "");
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "");

    let outcome = drive_source(Command::Lex, "");
    assert_eq!(outcome.stdout, "{Type: EOF, Literal: }\n");
}

#[test]
fn token_listing_prints_source_text() {
    let outcome = drive_source(Command::Lex, "let n = 007");
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert!(outcome.stdout.contains("{Type: INT, Literal: 007}\n"));
}

#[test]
fn top_level_return_fails_at_run_time() {
    let outcome = drive_source(Command::Run, "let a = 1\nreturn a\n");
    assert_eq!(outcome.code, 6);
    assert!(outcome.stderr.contains("error[E6008]"));
}

#[test]
fn overflow_is_reported() {
    let outcome = drive_source(Command::Run, "let a = 9223372036854775807 + 1");
    assert_eq!(outcome.code, 6);
    assert!(outcome.stderr.contains("integer overflow in addition"));
}

#[test]
fn call_depth_limit_is_configurable() {
    let source = "\
let g = function(x) {
\tlet f = function(y) {
\t\treturn y + 1
\t}
\treturn 1 + f(x)
}
let r = g(1)
";
    let outcome = drive_source(Command::Run, source);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert!(outcome.stdout.ends_with("r = 3\n"));

    let mut opts = options(Command::Run, "test.tun");
    opts.max_call_depth = 1;
    let outcome = drive_source_with(&opts, source);
    assert_eq!(outcome.code, 6);
    assert!(outcome.stderr.contains("maximum call depth exceeded (limit: 1)"));
}

#[test]
fn returned_function_prints_as_source() {
    let source = "\
let make = function() {
\tlet inner = function(n) {
\t\treturn n + 1
\t}
\treturn inner
}
let h = make()
";
    let outcome = drive_source(Command::Run, source);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert!(outcome.stdout.contains("h = function(n) { return n + 1; }\n"));
}
