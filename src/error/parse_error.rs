use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific construct was required but something else was found.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    Expected {
        /// What the grammar required at this point.
        expected: String,
        /// What was actually there.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `begin` or `loop` was never closed with `end`.
    #[error("Error on line {line}: Expected 'end' to close the block opened here.")]
    MissingEnd {
        /// The line of the opening keyword.
        line: usize,
    },
    /// A `{` comment was never closed.
    #[error("Error on line {line}: Unterminated comment.")]
    UnterminatedComment {
        /// The line the comment starts on.
        line: usize,
    },
    /// A numeric literal could not be represented.
    #[error("Error on line {line}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The source is not exactly one `begin ... end` block.
    #[error("Error on line {line}: Program must be a single 'begin ... end' block.")]
    ProgramNotBlock {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::Expected { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::MissingEnd { line }
            | Self::UnterminatedComment { line }
            | Self::InvalidNumber { line, .. }
            | Self::ProgramNotBlock { line } => *line,
        }
    }
}
