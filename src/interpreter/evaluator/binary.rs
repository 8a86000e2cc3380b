use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment},
        value::core::Value,
    },
};

impl Environment {
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// Dispatches to arithmetic, `mod`, equality or relational comparison.
    /// Comparisons always produce a [`Value::Bool`].
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, line),
            Mod => Self::eval_modulo(left, right, line),
            Equal => Ok(Value::Bool(left.equals(right))),
            NotEqual => Ok(Value::Bool(!left.equals(right))),
            Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
        }
    }

    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// Two integers produce an integer, and `/` then truncates toward zero.
    /// If either operand is real, both are promoted and the result is real.
    /// A zero divisor is rejected whatever the operand kinds.
    ///
    /// # Example
    /// ```
    /// use hopscotch::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::environment::Environment, value::core::Value},
    /// };
    ///
    /// let div = |l, r| Environment::eval_arithmetic(BinaryOperator::Div, &l, &r, 1);
    ///
    /// assert_eq!(div(Value::Integer(5), Value::Integer(2)), Ok(Value::Integer(2)));
    /// assert_eq!(div(Value::Real(5.0), Value::Integer(2)), Ok(Value::Real(2.5)));
    /// assert!(div(Value::Integer(5), Value::Integer(0)).is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if !left.is_number() || !right.is_number() {
            return Err(operand_error(op, left, right, line));
        }

        if op == Div && right.as_real(line)? == 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                Div => a.checked_div(*b),
                _ => unreachable!("not an arithmetic operator: {op}"),
            };
            return result.map(Value::Integer)
                         .ok_or(RuntimeError::Overflow { line });
        }

        let a = left.as_real(line)?;
        let b = right.as_real(line)?;

        Ok(Value::Real(match op {
                           Add => a + b,
                           Sub => a - b,
                           Mul => a * b,
                           Div => a / b,
                           _ => unreachable!("not an arithmetic operator: {op}"),
                       }))
    }

    /// Evaluates `mod`, defined on integers only.
    ///
    /// The result takes the sign of the dividend, so `-7 mod 3` is `-1`.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor is `0`.
    /// - `ModuloType` if either operand is a real.
    /// - `TypeError` if either operand is not a number at all.
    pub fn eval_modulo(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(_), Value::Integer(0)) => Err(RuntimeError::DivisionByZero { line }),
            (Value::Integer(a), Value::Integer(b)) => {
                a.checked_rem(*b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            _ if left.is_number() && right.is_number() => Err(RuntimeError::ModuloType { line }),
            _ => Err(operand_error(BinaryOperator::Mod, left, right, line)),
        }
    }

    /// Evaluates `<`, `>`, `<=` and `>=` on numbers.
    ///
    /// Integers compare exactly; any real operand makes the comparison
    /// happen in floating point. Comparisons involving NaN are false.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Greater, GreaterEqual, Less, LessEqual};

        let ordering = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            _ if left.is_number() && right.is_number() => {
                left.as_real(line)?.partial_cmp(&right.as_real(line)?)
            },
            _ => return Err(operand_error(op, left, right, line)),
        };

        let holds = ordering.is_some_and(|ordering| match op {
                                Less => ordering == Ordering::Less,
                                Greater => ordering == Ordering::Greater,
                                LessEqual => ordering != Ordering::Greater,
                                GreaterEqual => ordering != Ordering::Less,
                                _ => unreachable!("not a relational operator: {op}"),
                            });

        Ok(Value::Bool(holds))
    }
}

fn operand_error(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("operands of '{op}' must be numbers, found {} and {}",
                                               left.kind(),
                                               right.kind()),
                              line }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::Integer(n)
    }

    #[test]
    fn integer_arithmetic_stays_integer() {
        assert_eq!(Environment::eval_binary(BinaryOperator::Add, &int(2), &int(3), 1),
                   Ok(int(5)));
        assert_eq!(Environment::eval_binary(BinaryOperator::Div, &int(-7), &int(2), 1),
                   Ok(int(-3)));
    }

    #[test]
    fn mixed_arithmetic_promotes() {
        assert_eq!(Environment::eval_binary(BinaryOperator::Mul, &int(2), &Value::Real(1.5), 1),
                   Ok(Value::Real(3.0)));
    }

    #[test]
    fn real_division_by_zero_is_rejected() {
        assert_eq!(Environment::eval_binary(BinaryOperator::Div,
                                            &Value::Real(1.0),
                                            &Value::Real(0.0),
                                            3),
                   Err(RuntimeError::DivisionByZero { line: 3 }));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(Environment::eval_binary(BinaryOperator::Add, &int(i64::MAX), &int(1), 2),
                   Err(RuntimeError::Overflow { line: 2 }));
        assert_eq!(Environment::eval_binary(BinaryOperator::Div, &int(i64::MIN), &int(-1), 2),
                   Err(RuntimeError::Overflow { line: 2 }));
    }

    #[test]
    fn modulo_rules() {
        assert_eq!(Environment::eval_modulo(&int(5), &int(2), 1), Ok(int(1)));
        assert_eq!(Environment::eval_modulo(&int(-7), &int(3), 1), Ok(int(-1)));
        assert_eq!(Environment::eval_modulo(&int(5), &int(0), 1),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
        assert_eq!(Environment::eval_modulo(&int(5), &Value::Real(2.0), 1),
                   Err(RuntimeError::ModuloType { line: 1 }));
        assert!(matches!(Environment::eval_modulo(&Value::from("a"), &int(2), 1),
                         Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn comparisons_produce_booleans() {
        let cmp = |op, l: Value, r: Value| Environment::eval_binary(op, &l, &r, 1);

        assert_eq!(cmp(BinaryOperator::Less, int(1), Value::Real(1.5)), Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::GreaterEqual, int(2), int(2)), Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::Equal, int(2), Value::Real(2.0)), Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::NotEqual, int(2), int(3)), Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::Less, Value::Real(f64::NAN), int(1)),
                   Ok(Value::Bool(false)));
    }

    #[test]
    fn comparing_text_is_type_error() {
        assert!(matches!(Environment::eval_binary(BinaryOperator::Less,
                                                  &Value::from("a"),
                                                  &int(1),
                                                  9),
                         Err(RuntimeError::TypeError { line: 9, .. })));
    }
}
