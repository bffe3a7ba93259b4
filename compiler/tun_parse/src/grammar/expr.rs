//! Expression parsing.
//!
//! Dispatch looks one token past the expression head: a following `+` or
//! `-` makes the whole thing a complex expression whose right side is
//! parsed recursively.

use tracing::trace;
use tun_diagnostic::ErrorCode;
use tun_ir::{BinaryOp, Block, Expr, ExprId, ExprKind, Param, TokenKind};
use tun_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner())
    }

    fn parse_expression_inner(&mut self) -> Result<ExprId, ParseError> {
        if BinaryOp::from_token(self.cursor.peek_next_kind()).is_some() {
            return self.parse_complex();
        }

        match *self.current_kind() {
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Int(value) => {
                let span = self.cursor.advance().span;
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Literal(value), span)))
            }
            TokenKind::Ident(name) => {
                if matches!(self.cursor.peek_next_kind(), TokenKind::LParen) {
                    self.parse_call()
                } else {
                    let span = self.cursor.advance().span;
                    Ok(self.arena.alloc_expr(Expr::new(ExprKind::Ident(name), span)))
                }
            }
            _ => Err(self
                .cursor
                .unexpected_with_code(ErrorCode::E1002, "expression")),
        }
    }

    /// `(IDENT | INT) op Expression`; the operator was already seen by
    /// lookahead.
    fn parse_complex(&mut self) -> Result<ExprId, ParseError> {
        let head = self.cursor.current();
        let left_kind = match head.kind {
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::Int(value) => ExprKind::Literal(value),
            TokenKind::Error(text) => {
                return Err(ParseError::invalid_token(
                    head.span,
                    self.cursor.interner().lookup(text),
                ));
            }
            ref other => {
                return Err(ParseError::invalid_operand(
                    head.span,
                    other,
                    self.cursor.peek_next_kind(),
                ));
            }
        };
        self.cursor.advance();
        let left = self.arena.alloc_expr(Expr::new(left_kind, head.span));

        let op_token = self.cursor.advance();
        let Some(op) = BinaryOp::from_token(&op_token.kind) else {
            return Err(ParseError::new(
                ErrorCode::E9001,
                "operator lookahead disagreed with the token stream",
                op_token.span,
            ));
        };
        trace!(op = op.as_symbol(), "complex expression");

        let right = self.parse_expression()?;
        let span = head.span.merge(self.arena.get_expr(right).span);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Binary { left, op, right }, span)))
    }

    /// `function ( params ) { statements }`
    fn parse_function_literal(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        self.cursor.expect(&TokenKind::LParen)?;

        let mut params = Vec::new();
        if !self.cursor.eat(&TokenKind::RParen) {
            loop {
                let (name, span) = self.cursor.expect_ident()?;
                params.push(Param { name, span });
                if self.cursor.eat(&TokenKind::Comma) {
                    continue;
                }
                if self.cursor.eat(&TokenKind::RParen) {
                    break;
                }
                return Err(self.cursor.unexpected("`,` or `)`"));
            }
        }

        let open = self.cursor.expect(&TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ParseError::unclosed_body(self.cursor.current_span(), open));
            }
            stmts.push(self.parse_statement()?);
        }
        let close = self.cursor.advance().span;

        let params = self.arena.alloc_params(params);
        let body = Block {
            stmts: self.arena.alloc_stmt_list(stmts),
            span: open.merge(close),
        };
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Function { params, body },
            start.merge(close),
        )))
    }

    /// `NAME ( args )`
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let (func, start) = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::LParen)?;

        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if self.cursor.eat(&TokenKind::Comma) {
                    continue;
                }
                if self.cursor.check(&TokenKind::RParen) {
                    break;
                }
                return Err(self.cursor.unexpected("`,` or `)`"));
            }
        }
        let close = self.cursor.advance().span;

        let args = self.arena.alloc_expr_list(args);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Call { func, args }, start.merge(close))))
    }
}
