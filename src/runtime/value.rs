use crate::ast::{BinaryOperator, UnaryOperator};
use crate::utils::errors::{SpiError, SpiResult};
use std::fmt;

/// The only runtime value: an integer or a real.
///
/// Integer operands stay integer for `+`, `-`, `*` and `DIV`; as soon as one
/// operand is real the operation is carried out on reals. `/` always yields a
/// real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Real(r) => r,
        }
    }

    pub fn apply_binary(self, op: BinaryOperator, rhs: Number) -> SpiResult<Number> {
        match op {
            BinaryOperator::Add => self.add(rhs),
            BinaryOperator::Sub => self.sub(rhs),
            BinaryOperator::Mul => self.mul(rhs),
            BinaryOperator::IntegerDiv => self.floor_div(rhs),
            BinaryOperator::FloatDiv => self.real_div(rhs),
        }
    }

    pub fn apply_unary(self, op: UnaryOperator) -> SpiResult<Number> {
        match (op, self) {
            (UnaryOperator::Plus, value) => Ok(value),
            (UnaryOperator::Minus, Number::Integer(n)) => n
                .checked_neg()
                .map(Number::Integer)
                .ok_or_else(|| SpiError::overflow("negation")),
            (UnaryOperator::Minus, Number::Real(r)) => Ok(Number::Real(-r)),
        }
    }

    fn add(self, rhs: Number) -> SpiResult<Number> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_add(b)
                .map(Number::Integer)
                .ok_or_else(|| SpiError::overflow("addition")),
            (a, b) => Ok(Number::Real(a.as_f64() + b.as_f64())),
        }
    }

    fn sub(self, rhs: Number) -> SpiResult<Number> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_sub(b)
                .map(Number::Integer)
                .ok_or_else(|| SpiError::overflow("subtraction")),
            (a, b) => Ok(Number::Real(a.as_f64() - b.as_f64())),
        }
    }

    fn mul(self, rhs: Number) -> SpiResult<Number> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_mul(b)
                .map(Number::Integer)
                .ok_or_else(|| SpiError::overflow("multiplication")),
            (a, b) => Ok(Number::Real(a.as_f64() * b.as_f64())),
        }
    }

    // Rounds toward negative infinity: -7 DIV 2 = -4.
    fn floor_div(self, rhs: Number) -> SpiResult<Number> {
        match (self, rhs) {
            (Number::Integer(_), Number::Integer(0)) => Err(SpiError::DivisionByZero),
            (Number::Integer(a), Number::Integer(b)) => {
                let quotient = a
                    .checked_div(b)
                    .ok_or_else(|| SpiError::overflow("integer division"))?;
                if a % b != 0 && (a < 0) != (b < 0) {
                    Ok(Number::Integer(quotient - 1))
                } else {
                    Ok(Number::Integer(quotient))
                }
            }
            (a, b) => {
                let divisor = b.as_f64();
                if divisor == 0.0 {
                    return Err(SpiError::DivisionByZero);
                }
                Ok(Number::Real((a.as_f64() / divisor).floor()))
            }
        }
    }

    fn real_div(self, rhs: Number) -> SpiResult<Number> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(SpiError::DivisionByZero);
        }
        Ok(Number::Real(self.as_f64() / divisor))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            // Debug keeps the decimal point on whole reals: 4.0, not 4.
            Number::Real(r) => write!(f, "{:?}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Number {
        Number::Integer(n)
    }

    fn real(r: f64) -> Number {
        Number::Real(r)
    }

    fn div(a: Number, b: Number) -> SpiResult<Number> {
        a.apply_binary(BinaryOperator::IntegerDiv, b)
    }

    #[test]
    fn test_floor_division_rounds_down() -> SpiResult<()> {
        assert_eq!(div(int(7), int(2))?, Number::Integer(3));
        assert_eq!(div(int(-7), int(2))?, Number::Integer(-4));
        assert_eq!(div(int(7), int(-2))?, Number::Integer(-4));
        assert_eq!(div(int(-7), int(-2))?, Number::Integer(3));
        assert_eq!(div(int(-8), int(2))?, Number::Integer(-4));
        assert_eq!(div(real(7.5), int(2))?, Number::Real(3.0));
        Ok(())
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(div(int(1), int(0)), Err(SpiError::DivisionByZero)));
        assert!(matches!(div(real(1.5), real(0.0)), Err(SpiError::DivisionByZero)));
        let result = Number::Integer(1).apply_binary(BinaryOperator::FloatDiv, int(0));
        assert!(matches!(result, Err(SpiError::DivisionByZero)));
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        let result = Number::Integer(i64::MAX).apply_binary(BinaryOperator::Add, int(1));
        assert!(matches!(result, Err(SpiError::IntegerOverflow { .. })));
        assert!(matches!(div(int(i64::MIN), int(-1)), Err(SpiError::IntegerOverflow { .. })));
        let result = Number::Integer(i64::MIN).apply_unary(UnaryOperator::Minus);
        assert!(matches!(result, Err(SpiError::IntegerOverflow { .. })));
    }

    #[test]
    fn test_mixed_operands_promote_to_real() -> SpiResult<()> {
        let sum = Number::Integer(1).apply_binary(BinaryOperator::Add, real(0.5))?;
        assert_eq!(sum, Number::Real(1.5));
        let quotient = Number::Integer(4).apply_binary(BinaryOperator::FloatDiv, int(2))?;
        assert_eq!(quotient, Number::Real(2.0));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Integer(-14).to_string(), "-14");
        assert_eq!(Number::Real(3.5).to_string(), "3.5");
        assert_eq!(Number::Real(4.0).to_string(), "4.0");
    }
}
