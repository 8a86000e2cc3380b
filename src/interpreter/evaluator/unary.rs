use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment},
        value::core::Value,
    },
};

impl Environment {
    /// Applies a unary operator to an already evaluated operand.
    ///
    /// # Example
    /// ```
    /// use hopscotch::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::environment::Environment, value::core::Value},
    /// };
    ///
    /// let negated = Environment::eval_unary(UnaryOperator::Negate, &Value::Real(2.5), 1);
    /// assert_eq!(negated, Ok(Value::Real(-2.5)));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
                other => {
                    let details =
                        format!("operand of '-' must be a number, found {}", other.kind());
                    Err(RuntimeError::TypeError { details, line })
                },
            },
        }
    }
}
