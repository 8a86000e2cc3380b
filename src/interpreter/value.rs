/// Core runtime value type.
///
/// Defines the `Value` enum, numeric promotion, equality, truthiness and the
/// printed form used by `write`.
pub mod core;
/// Conversion of input lines into values.
///
/// Implements the rule `read` uses to store what the user typed: a real if
/// the line contains a decimal point, otherwise an integer, otherwise the raw
/// text.
pub mod input;
