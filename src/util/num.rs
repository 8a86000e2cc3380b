/// Promotes an integer operand to a real for mixed arithmetic.
///
/// Integers beyond `2^53` lose precision, exactly as they do when mixed
/// arithmetic is performed in double precision.
///
/// ## Example
/// ```
/// use hopscotch::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `i64` to a `usize` if it is non-negative and fits.
///
/// ## Errors
/// Returns `Err(error)` for negative values or values too large for `usize`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not possible.
///
/// ## Example
/// ```
/// use hopscotch::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(3, "negative"), Ok(3));
/// assert_eq!(i64_to_usize_checked(-1, "negative"), Err("negative"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

