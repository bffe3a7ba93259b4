//! Text output for each command.

use std::fmt::Write as _;

use tun_eval::Bindings;
use tun_ir::{Program, StringInterner, TokenList};

use crate::CompileError;

/// One `{Type: KIND, Literal: text}` line per token, EOF included. The
/// literal is the token's text in `source`.
pub fn render_tokens(tokens: &TokenList, source: &str) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{{Type: {}, Literal: {}}}",
            token.kind.tag_name(),
            token.literal(source)
        );
    }
    out
}

/// The AST as indented JSON.
pub fn ast_json(program: &Program, interner: &StringInterner) -> Result<String, CompileError> {
    Ok(tun_ir::dump::to_json(program, interner)?)
}

/// `name = value` lines, sorted by name.
pub fn render_bindings(
    bindings: &Bindings,
    program: &Program,
    interner: &StringInterner,
) -> String {
    bindings.render(&program.arena, interner)
}
