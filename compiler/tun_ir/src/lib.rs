//! Tun IR - tokens, AST and interned names
//!
//! Core data structures shared by every stage of the tun toolchain:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for scanner output
//! - AST nodes (`Program`, `Stmt`, `Expr`) in a flat arena
//! - A visitor, a JSON dump and a source-like printer over the AST
//!
//! # Design
//!
//! - Strings are interned: identifiers become `Name(u32)`
//! - No `Box<Expr>`: children are `ExprId(u32)` indices into `ExprArena`
//! - The AST is immutable once the parser hands it over

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
pub mod dump;
mod expr_id;
mod interner;
mod name;
pub mod pretty;
mod span;
mod token;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Block, Expr, ExprKind, Param, Program, Stmt, StmtKind};
pub use expr_id::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

// Size assertions for frequently-allocated types.
static_assert_size!(Span, 8);
static_assert_size!(Name, 4);
static_assert_size!(ExprId, 4);
static_assert_size!(Token, 24);
