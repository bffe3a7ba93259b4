//! Recursive descent parser for tun.
//!
//! One token of lookahead, no backtracking, no error recovery: the first
//! error aborts the parse and no partial program is returned.
//!
//! ```text
//! Program           := Statement* EOF
//! Statement         := 'let' IDENT '=' Expression | 'return' Expression
//! Expression        := ComplexExpression     if the next token is + or -
//!                    | FunctionLiteral       if the current token is 'function'
//!                    | LiteralExpression     if the current token is INT
//!                    | FunctionCall          if IDENT followed by '('
//!                    | IdentifierExpression  if IDENT
//! ComplexExpression := (IDENT | INT) ('+' | '-') Expression
//! FunctionLiteral   := 'function' '(' (IDENT (',' IDENT)*)? ')' '{' Statement* '}'
//! FunctionCall      := IDENT '(' (Expression (',' Expression)*)? ')'
//! ```
//!
//! Complex expressions chain to the right: `a + b - c` is `a + (b - c)`.

mod cursor;
mod error;
mod grammar;

use tracing::debug;
use tun_ir::{ExprArena, Program, StringInterner, TokenKind, TokenList};

pub use cursor::Cursor;
pub use error::ParseError;

/// Parser state: a cursor over the tokens and the arena under construction.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
        }
    }

    /// Parse every statement up to EOF.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            let stmt = self.parse_statement()?;
            debug!(
                index = statements.len(),
                kind = self.arena.get_stmt(stmt).kind.node_name(),
                "parsed top-level statement"
            );
            statements.push(stmt);
        }
        let statements = self.arena.alloc_stmt_list(statements);
        Ok(Program::new(statements, self.arena))
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<Program, ParseError> {
    Parser::new(tokens, interner).parse_program()
}
