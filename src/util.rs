/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64`, `usize` and `f64` used
/// for numeric promotion and vector indexing, in one place so the lossy ones
/// are easy to audit.
pub mod num;
