use thiserror::Error;

/// Represents all errors that can occur while a program runs.
///
/// Label definition problems are detected while the label table is built,
/// before any statement executes; every other variant is raised by the
/// statement or expression that failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// The same label name is defined twice in one program.
    #[error("Error on line {line}: Label '{name}' is already defined on line {first_line}.")]
    DuplicateLabel {
        /// The label name.
        name:       String,
        /// The line of the earlier definition.
        first_line: usize,
        /// The line of the duplicate definition.
        line:       usize,
    },
    /// A `goto` names a label that does not exist.
    #[error("Error on line {line}: Undefined label '{name}'.")]
    UndefinedLabel {
        /// The label name.
        name: String,
        /// The line of the `goto`.
        line: usize,
    },
    /// Tried to use an undeclared variable.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division (or `mod`) by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `mod` was applied to a real operand.
    #[error("Error on line {line}: Modulo requires integer operands.")]
    ModuloType {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A vector element outside the vector was accessed.
    #[error("Error on line {line}: Index {index} is out of bounds for '{name}' of length {len}.")]
    IndexOutOfBounds {
        /// The vector variable.
        name:  String,
        /// The requested index.
        index: i64,
        /// The vector length.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A vector declaration size was not a non-negative integer.
    #[error("Error on line {line}: Invalid vector size: {details}.")]
    InvalidVectorSize {
        /// Details about the rejected size.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Input ended while a `read` still needed a value.
    #[error("Error on line {line}: No input left to read into '{name}'.")]
    InputExhausted {
        /// The variable being read.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading input or writing output failed.
    #[error("Error on line {line}: I/O failure: {details}.")]
    Io {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DuplicateLabel { line, .. }
            | Self::UndefinedLabel { line, .. }
            | Self::UnknownVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line }
            | Self::ModuloType { line }
            | Self::Overflow { line }
            | Self::IndexOutOfBounds { line, .. }
            | Self::InvalidVectorSize { line, .. }
            | Self::InputExhausted { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }

    /// Wraps an I/O failure raised by the statement on `line`.
    #[must_use]
    pub fn io(error: &std::io::Error, line: usize) -> Self {
        Self::Io { details: error.to_string(),
                   line }
    }
}
