//! Error codes for all toolchain diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the pipeline stage.

use std::fmt;

/// Error codes for all toolchain diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Scanner errors
/// - E1xxx: Parser errors
/// - E2xxx: Reference (scope) errors
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Invalid integer literal
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Malformed token reached the parser
    E1005,

    // Reference Errors (E2xxx)
    /// Unknown identifier
    E2001,
    /// Function body refers to a binding outside the function
    E2002,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Undefined function
    E6002,
    /// Value is not callable
    E6003,
    /// Operand or argument has the wrong kind of value
    E6004,
    /// Call produced no value where one was required
    E6005,
    /// Integer overflow
    E6006,
    /// Wrong number of arguments
    E6007,
    /// `return` outside a function body
    E6008,
    /// Call depth limit exceeded
    E6009,

    // Internal Errors (E9xxx)
    /// Internal error
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scanner
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            // Reference
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            // Internal
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::E0002 => "invalid integer literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "malformed token",
            ErrorCode::E2001 => "unknown identifier",
            ErrorCode::E2002 => "reference to a binding outside the function",
            ErrorCode::E6001 => "undefined variable",
            ErrorCode::E6002 => "undefined function",
            ErrorCode::E6003 => "value is not callable",
            ErrorCode::E6004 => "type mismatch",
            ErrorCode::E6005 => "missing return value",
            ErrorCode::E6006 => "integer overflow",
            ErrorCode::E6007 => "wrong number of arguments",
            ErrorCode::E6008 => "return outside function",
            ErrorCode::E6009 => "call depth limit exceeded",
            ErrorCode::E9001 => "internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
