//! Statement parsing.

use tun_ir::{Stmt, StmtId, StmtKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `let NAME = EXPR` or `return EXPR`.
    pub(crate) fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        match self.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => Err(self
                .cursor
                .unexpected("statement")
                .with_help("statements start with `let` or `return`")),
        }
    }

    fn parse_let(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::Eq)?;
        let value = self.parse_expression()?;
        let span = start.merge(self.arena.get_expr(value).span);
        Ok(self
            .arena
            .alloc_stmt(Stmt::new(StmtKind::Let { name, value }, span)))
    }

    fn parse_return(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let value = self.parse_expression()?;
        let span = start.merge(self.arena.get_expr(value).span);
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Return(value), span)))
    }
}
