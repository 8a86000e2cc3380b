use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::Target,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::i64_to_usize_checked,
};

/// The variable store of a running program.
///
/// Every name lives in one flat namespace for the whole run; blocks do not
/// open scopes and jumping never touches the store.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`.
    ///
    /// Declaring a name again replaces its current value.
    ///
    /// # Example
    /// ```
    /// use hopscotch::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.declare("x", Value::Integer(0));
    /// env.declare("x", Value::Integer(7));
    ///
    /// assert_eq!(env.get("x", 1), Ok(&Value::Integer(7)));
    /// ```
    pub fn declare(&mut self, name: &str, value: Value) {
        trace!(name, %value, "declare");
        self.variables.insert(name.to_string(), value);
    }

    /// Whether `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Looks up the current value of `name`.
    ///
    /// # Errors
    /// `UnknownVariable` if `name` was never declared.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Replaces the value of a declared variable.
    ///
    /// # Errors
    /// `UnknownVariable` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let slot = self.slot(name, line)?;
        trace!(name, %value, "assign");
        *slot = value;
        Ok(())
    }

    /// Reads one element of a vector variable.
    ///
    /// # Errors
    /// - `UnknownVariable` if `name` was never declared.
    /// - `TypeError` if the variable is not a vector or `index` is not an
    ///   integer.
    /// - `IndexOutOfBounds` if `index` falls outside the vector.
    pub fn element(&self, name: &str, index: &Value, line: usize) -> EvalResult<Value> {
        let elements = vector_elements(name, self.get(name, line)?, line)?;
        let position = element_position(name, elements.len(), index, line)?;
        Ok(elements[position].clone())
    }

    /// Replaces one element of a vector variable.
    ///
    /// # Errors
    /// Same as [`Environment::element`].
    pub fn assign_element(&mut self,
                          name: &str,
                          index: &Value,
                          value: Value,
                          line: usize)
                          -> EvalResult<()> {
        let slot = self.slot(name, line)?;
        let Value::Vector(elements) = slot else {
            return Err(not_a_vector(name, slot, line));
        };
        let position = element_position(name, elements.len(), index, line)?;
        trace!(name, position, %value, "assign element");
        elements[position] = value;
        Ok(())
    }

    /// Stores `value` into an assignment or `read` target, evaluating the
    /// element index first when there is one.
    pub fn store(&mut self, target: &Target, value: Value) -> EvalResult<()> {
        match &target.index {
            None => self.assign(&target.name, value, target.line),
            Some(index) => {
                let index = self.eval(index)?;
                self.assign_element(&target.name, &index, value, target.line)
            },
        }
    }

    fn slot(&mut self, name: &str, line: usize) -> EvalResult<&mut Value> {
        self.variables
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}

fn vector_elements<'v>(name: &str, value: &'v Value, line: usize) -> EvalResult<&'v [Value]> {
    match value {
        Value::Vector(elements) => Ok(elements),
        other => Err(not_a_vector(name, other, line)),
    }
}

fn not_a_vector(name: &str, value: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("'{name}' is {} {}, not a vector",
                                               article(value.kind()),
                                               value.kind()),
                              line }
}

const fn article(kind: &str) -> &'static str {
    match kind.as_bytes().first() {
        Some(b'a' | b'e' | b'i' | b'o' | b'u') => "an",
        _ => "a",
    }
}

/// Checks a vector index and converts it to a position.
fn element_position(name: &str, len: usize, index: &Value, line: usize) -> EvalResult<usize> {
    let index = index.as_integer(line)?;
    let out_of_bounds = RuntimeError::IndexOutOfBounds { name: name.to_string(),
                                                         index,
                                                         len,
                                                         line };

    match i64_to_usize_checked(index, ()) {
        Ok(position) if position < len => Ok(position),
        _ => Err(out_of_bounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector_env() -> Environment {
        let mut env = Environment::new();
        env.declare("v", Value::Vector(vec![Value::Integer(0); 3]));
        env.declare("x", Value::Real(1.5));
        env
    }

    #[test]
    fn unknown_variable_reports_name_and_line() {
        let env = Environment::new();

        assert_eq!(env.get("missing", 4),
                   Err(RuntimeError::UnknownVariable { name: "missing".into(),
                                                       line: 4 }));
    }

    #[test]
    fn assign_requires_declaration() {
        let mut env = Environment::new();

        assert!(env.assign("y", Value::Integer(1), 2).is_err());
        assert!(!env.is_declared("y"));
    }

    #[test]
    fn element_round_trip() {
        let mut env = vector_env();
        env.assign_element("v", &Value::Integer(2), Value::Integer(9), 1)
           .unwrap();

        assert_eq!(env.element("v", &Value::Integer(2), 1), Ok(Value::Integer(9)));
        assert_eq!(env.element("v", &Value::Integer(0), 1), Ok(Value::Integer(0)));
    }

    #[test]
    fn element_index_out_of_bounds() {
        let env = vector_env();

        assert_eq!(env.element("v", &Value::Integer(3), 7),
                   Err(RuntimeError::IndexOutOfBounds { name:  "v".into(),
                                                        index: 3,
                                                        len:   3,
                                                        line:  7, }));
        assert!(matches!(env.element("v", &Value::Integer(-1), 7),
                         Err(RuntimeError::IndexOutOfBounds { index: -1, .. })));
    }

    #[test]
    fn element_of_scalar_is_type_error() {
        let mut env = vector_env();

        assert!(matches!(env.element("x", &Value::Integer(0), 1),
                         Err(RuntimeError::TypeError { .. })));
        assert!(matches!(env.assign_element("x", &Value::Integer(0), Value::Integer(1), 1),
                         Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn real_index_is_type_error() {
        let env = vector_env();

        assert!(matches!(env.element("v", &Value::Real(1.0), 1),
                         Err(RuntimeError::TypeError { .. })));
    }
}
