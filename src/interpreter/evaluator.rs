/// Core execution engine.
///
/// Contains the `Engine`, which owns the position stack, the pending jump and
/// the variable environment, and drives the program one step at a time until
/// the root block is exhausted or a runtime error occurs.
pub mod core;

/// Position stack frames.
///
/// A frame is one open block or loop body: the statement sequence, a cursor
/// into it and whether falling off its end restarts it.
pub mod frame;

/// Label addressing.
///
/// Builds, before execution starts, the table mapping every label to the
/// frames needed to resume execution at it.
pub mod labels;

/// Variable storage.
///
/// A single flat namespace of declared variables with declare, get and
/// assign operations, including element access on vectors.
pub mod environment;

/// Expression evaluation.
///
/// Walks expression trees, reading variables from the environment.
pub mod expression;

/// Binary operator evaluation.
///
/// Implements arithmetic with integer to real promotion, `mod`, equality and
/// relational comparisons.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Statement execution.
///
/// Executes a single statement in place, or reports that it opens a new
/// frame or requests a jump.
pub mod statement;

/// Input and output statements.
///
/// Implements `read` and `write` against the engine's input and output
/// streams.
pub mod io;
