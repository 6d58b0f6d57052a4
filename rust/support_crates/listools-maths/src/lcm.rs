use listools_common::{Result, error::Error, verify_arg};
use num_traits::{PrimInt, Unsigned};

use crate::gcd::gcd;

/// Returns the least common multiple of `a` and `b`.
///
/// By convention `lcm(a, 0) == lcm(0, a) == 0`, including `lcm(0, 0)`.
///
/// # Errors
///
/// Fails with an arithmetic overflow error if the result does not fit in `T`.
pub fn lcm<T>(a: T, b: T) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    // Dividing first keeps the intermediate value no larger than the result.
    (a / gcd(a, b))
        .checked_mul(&b)
        .ok_or_else(|| Error::overflow("lcm"))
}

/// Returns the least common multiple of all values in `values`.
///
/// The values are reduced pairwise from left to right; since `lcm` is
/// associative the order does not affect the result. A zero anywhere in the
/// input makes the result zero.
///
/// # Errors
///
/// - Invalid argument if `values` is empty.
/// - Arithmetic overflow if the result does not fit in `T`.
pub fn list_lcm<T>(values: &[T]) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    verify_arg!(values, !values.is_empty());
    let result = values[1..]
        .iter()
        .try_fold(values[0], |acc, &v| lcm(acc, v));
    if result.is_err() {
        log::debug!("list_lcm overflow over {} values", values.len());
    }
    result
}
