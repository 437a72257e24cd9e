use super::Val;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic
///
/// Operands are checked in pop order, top first, so a type error names
/// the value that was popped first. All arithmetic wraps.

pub struct Operation {}

impl Operation {
    /// Both operands as integers, checking `rhs` (the top) first.
    pub fn integers(lhs: Val, rhs: Val) -> Result<(i32, i32)> {
        let r = i32::try_from(rhs)?;
        let l = i32::try_from(lhs)?;
        Ok((l, r))
    }

    pub fn negate(val: Val) -> Result<Val> {
        Ok(Val::Integer(i32::try_from(val)?.wrapping_neg()))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Val::Integer(l.wrapping_add(r)))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Val::Integer(l.wrapping_sub(r)))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Val::Integer(l.wrapping_mul(r)))
    }

    /// Remainder takes the sign of the dividend. Zero divisor yields 0.
    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        if r == 0 {
            return Ok(Val::Integer(0));
        }
        Ok(Val::Integer(l.wrapping_rem(r)))
    }
}
