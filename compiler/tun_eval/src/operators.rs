//! Binary operator evaluation.

use tun_ir::BinaryOp;

use crate::errors::integer_overflow;
use crate::EvalError;

/// Apply `op` with overflow checking.
pub fn evaluate_binary(left: i64, op: BinaryOp, right: i64) -> Result<i64, EvalError> {
    let result = match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
    };
    result.ok_or_else(|| {
        integer_overflow(op.operation_name()).with_note(format!(
            "operands were {left} and {right}"
        ))
    })
}
