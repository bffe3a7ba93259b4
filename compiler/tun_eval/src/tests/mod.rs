//! Whole-program evaluation tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use tun_ir::{Program, StringInterner};

use crate::{execute, Bindings, EvalError};

pub(crate) fn parse_source(source: &str, interner: &StringInterner) -> Program {
    let output = tun_lexer::lex(source, interner);
    assert!(output.errors.is_empty(), "scan errors: {:?}", output.errors);
    tun_parse::parse(&output.tokens, interner).unwrap()
}

/// Run `source` and render its bindings.
pub(crate) fn run_source(source: &str) -> Result<String, EvalError> {
    let interner = StringInterner::new();
    let program = parse_source(source, &interner);
    let bindings: Bindings = execute(&program, &interner)?;
    Ok(bindings.render(&program.arena, &interner))
}

pub(crate) fn run_err(source: &str) -> EvalError {
    run_source(source).unwrap_err()
}
