use thiserror::Error;

/// Scanning and parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// program tree. A parse error prevents interpretation from starting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types raised while the program runs, including label
/// definition problems found before the first statement executes. Every
/// runtime error aborts the current run.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program from source.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The source could not be scanned or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the process exit status conventionally used for this failure:
    /// `65` for malformed input, `70` for a runtime failure.
    ///
    /// # Example
    /// ```
    /// use hopscotch::error::{Error, RuntimeError};
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero { line: 3 });
    /// assert_eq!(error.exit_code(), 70);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) => 65,
            Self::Runtime(_) => 70,
        }
    }

    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
