//! Operand application.
//!
//! All arithmetic wraps on overflow.

use lc_ir::Operand;

/// Fold one record into the accumulator: `acc <operand> value`.
#[inline]
pub fn apply_operand(operand: Operand, acc: i64, value: i64) -> i64 {
    match operand {
        Operand::Add => acc.wrapping_add(value),
        Operand::Subtract => acc.wrapping_sub(value),
        Operand::Multiply => acc.wrapping_mul(value),
    }
}
