use listools_common::{Result, verify_arg};
use num_traits::{PrimInt, Unsigned};

/// Returns the greatest common divisor of `a` and `b`.
///
/// `gcd(a, 0) == a` and `gcd(0, 0) == 0`.
#[inline]
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt + Unsigned,
{
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Returns the greatest common divisor of all values in `values`.
///
/// The values are reduced left to right. A single value is returned as is.
///
/// # Errors
///
/// Fails with an invalid argument error if `values` is empty.
pub fn list_gcd<T>(values: &[T]) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    verify_arg!(values, !values.is_empty());
    Ok(values[1..].iter().fold(values[0], |acc, &v| gcd(acc, v)))
}
