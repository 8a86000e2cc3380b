//! # hopscotch
//!
//! hopscotch is an interpreter for a small imperative teaching language
//! built around unrestricted `goto`. Programs are nested `begin ... end`
//! blocks and endless `loop ... end` bodies, and a `goto` may jump to any
//! label in the program, including into the middle of a block or loop that
//! is not currently running.
//!
//! ```
//! let source = "begin
//!                 n: integer;
//!                 n := 3;
//!                 top: write n;
//!                 n := n - 1;
//!                 if n > 0 then goto top
//!               end";
//!
//! let mut output = Vec::new();
//! hopscotch::run_with_io(source,
//!                        std::io::empty(),
//!                        &mut output,
//!                        hopscotch::EngineOptions::default()).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "3\n2\n1\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    ast::Block,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Engine, parser::core::parse_program},
};
pub use crate::interpreter::{evaluator::core::EngineOptions, lexer::tokenize};

/// Defines the structure of parsed code.
///
/// This module declares the `Block`, `Statement` and `Expr` types that
/// represent the syntactic structure of a program as a tree. The tree is
/// built by the parser and is never modified afterwards; the evaluator
/// borrows from it for the whole run.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or running a program. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Maps failures to process exit statuses.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64`, `usize`, and `f64` in one auditable place.
pub mod util;

/// Tokenizes and parses `source` into its root block.
///
/// # Examples
/// ```
/// use hopscotch::{ast::Statement, parse};
///
/// let program = parse("begin top: goto top end").unwrap();
/// assert!(matches!(program.statements[0], Statement::Label { .. }));
///
/// assert!(parse("begin write 1").is_err());
/// ```
pub fn parse(source: &str) -> Result<Block, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Parses and runs `source`, reading from `input` and writing to `output`.
///
/// # Errors
/// Returns [`Error::Parse`] if the program is malformed, and
/// [`Error::Runtime`] if it fails while running. Output written before a
/// runtime error is kept.
pub fn run_with_io<R: BufRead, W: Write>(source: &str,
                                         input: R,
                                         output: W,
                                         options: EngineOptions)
                                         -> Result<(), Error> {
    let program = parse(source)?;
    let mut engine = Engine::new(&program, input, output, options)?;
    engine.run()?;
    Ok(())
}

/// Parses and runs `source` against the process's standard input and
/// output.
///
/// # Examples
/// ```
/// use hopscotch::{EngineOptions, run};
///
/// assert!(run("begin write 1 end", EngineOptions::default()).is_ok());
/// assert!(run("begin write 1 / 0 end", EngineOptions::default()).is_err());
/// ```
pub fn run(source: &str, options: EngineOptions) -> Result<(), Error> {
    run_with_io(source, io::stdin().lock(), io::stdout().lock(), options)
}
