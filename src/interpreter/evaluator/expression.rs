use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates an expression against the current variables.
    ///
    /// Evaluation never modifies the environment. Operands are evaluated
    /// left to right, and an error in either operand aborts the expression.
    ///
    /// # Example
    /// ```
    /// use hopscotch::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{evaluator::environment::Environment, value::core::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.declare("x", Value::Integer(5));
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".into(),
    ///                                                               line: 1, }),
    ///                             op:    BinaryOperator::Mod,
    ///                             right: Box::new(Expr::Literal { value: LiteralValue::Integer(2),
    ///                                                              line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(env.eval(&expr), Ok(Value::Integer(1)));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(*value)),
            Expr::Variable { name, line } => self.get(name, *line).cloned(),
            Expr::Index { name, index, line } => {
                let index = self.eval(index)?;
                self.element(name, &index, *line)
            },
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
        }
    }
}
