//! Binary operator semantics over 32-bit integers

use crate::error::{InterpretError, Result};
use fun_parser::{BinaryOperator, Span};

/// Apply `operator` to already evaluated operands.
///
/// Arithmetic wraps on overflow. Comparisons and logical operators yield
/// 1 or 0, with any nonzero operand counting as true.
pub fn apply_binary_operator(
    operator: BinaryOperator,
    left: i32,
    right: i32,
    position: Span,
) -> Result<i32> {
    let value = match operator {
        BinaryOperator::Add => left.wrapping_add(right),
        BinaryOperator::Subtract => left.wrapping_sub(right),
        BinaryOperator::Multiply => left.wrapping_mul(right),
        BinaryOperator::Divide => {
            if right == 0 {
                return Err(InterpretError::division_by_zero(position));
            }
            left.wrapping_div(right)
        }
        BinaryOperator::Modulo => {
            if right == 0 {
                return Err(InterpretError::division_by_zero(position));
            }
            left.wrapping_rem(right)
        }
        BinaryOperator::Equal => i32::from(left == right),
        BinaryOperator::NotEqual => i32::from(left != right),
        BinaryOperator::LessEqual => i32::from(left <= right),
        BinaryOperator::Less => i32::from(left < right),
        BinaryOperator::GreaterEqual => i32::from(left >= right),
        BinaryOperator::Greater => i32::from(left > right),
        BinaryOperator::LogicalAnd => i32::from(left != 0 && right != 0),
        BinaryOperator::LogicalOr => i32::from(left != 0 || right != 0),
    };
    Ok(value)
}
