use crate::{
    ast::{ElementType, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Values are dynamically tagged: a variable declared `integer` may later
/// hold a real or text read from input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit integer value.
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// Raw text, produced by `read` when the input is not a number.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and used as `if` conditions.
    Bool(bool),
    /// The elements of a variable declared `vector [n] of <type>`.
    Vector(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// The zero value a declaration of `element_type` starts with.
    ///
    /// # Example
    /// ```
    /// use hopscotch::{ast::ElementType, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::zero(ElementType::Integer), Value::Integer(0));
    /// assert_eq!(Value::zero(ElementType::Real), Value::Real(0.0));
    /// ```
    #[must_use]
    pub const fn zero(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Integer => Self::Integer(0),
            ElementType::Real => Self::Real(0.0),
        }
    }

    /// A short name for the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Vector(_) => "vector",
        }
    }

    /// Whether the value is an integer or a real.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is numeric.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use hopscotch::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// assert!(Value::from("ten").as_real(42).is_err());
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.kind()),
                                               line }),
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { details: format!("expected an integer, found {}",
                                                                self.kind()),
                                               line }),
        }
    }

    /// Decides whether an `if` condition holds.
    ///
    /// Booleans are themselves, numbers are true unless zero, and every other
    /// value is true.
    ///
    /// # Example
    /// ```
    /// use hopscotch::interpreter::value::core::Value;
    ///
    /// assert!(Value::Bool(true).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Text(_) | Self::Vector(_) => true,
        }
    }

    /// Compares two values for the `=` and `<>` operators.
    ///
    /// Integers and reals compare by numeric value, so `2 = 2.0` holds.
    /// Values of any other differing kinds are unequal. Vectors compare
    /// element by element.
    ///
    /// # Example
    /// ```
    /// use hopscotch::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).equals(&Value::Real(2.0)));
    /// assert!(!Value::Integer(2).equals(&Value::from("2")));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                i64_to_f64(*a) == *b
            },
            (Self::Vector(a), Self::Vector(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
            },
            _ => self == other,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // `2.0`, `2.5`, `1e20`, `inf`: never mistakable for an integer.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Vector(v) => {
                write!(f, "[")?;

                for (index, value) in v.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
