//! Binary operators.

use crate::TokenKind;

/// Binary operators of a complex expression.
///
/// The set is closed: the parser only produces an operator from a `+` or
/// `-` token, so evaluation never meets an unknown operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    /// Operator for a token, if the token is one.
    pub const fn from_token(kind: &TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    /// Operation name used in overflow messages.
    pub const fn operation_name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
        }
    }
}
