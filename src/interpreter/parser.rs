/// Parser entry points.
///
/// Contains the program rule, the expression entry point and the `if`
/// statement, along with the `ParseResult` alias shared by every rule.
pub mod core;

/// Statement sequences.
///
/// Parses the bodies of `begin ... end` and `loop ... end`, including the
/// `;` separators, labels and declarations that may appear in them.
pub mod block;

/// Statement parsing.
///
/// Implements the individual statement forms: assignment, `goto`, `read`,
/// `write`, nested blocks, loops and declarations.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence levels for relational, additive and
/// multiplicative operators.
pub mod binary;

/// Unary operator and primary expression parsing.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers for identifiers, assignment targets, comma-separated
/// lists and expected tokens.
pub mod utils;
