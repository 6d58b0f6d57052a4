use listools_common::Result;
use listools_iterz::{Truthy, apply_mask};

/// Returns the elements of `data` whose positional mask value is truthy.
///
/// Elements past the end of `mask` are dropped.
///
/// # Errors
///
/// Fails with an empty mask error if `mask` is empty.
pub fn list_mask<T, M>(data: &[T], mask: &[M]) -> Result<Vec<T>>
where
    T: Clone,
    M: Truthy,
{
    Ok(apply_mask(data, mask, false)?.cloned().collect())
}

/// Returns the elements of `data` whose mask value is truthy, cycling the
/// mask when it is shorter than `data`.
///
/// ```
/// use listools_listutils::list_mask_cycle;
///
/// let data: Vec<u32> = (1..=10).collect();
/// assert_eq!(list_mask_cycle(&data, &[1, 0]).unwrap(), vec![1, 3, 5, 7, 9]);
/// ```
///
/// # Errors
///
/// Fails with an empty mask error if `mask` is empty.
pub fn list_mask_cycle<T, M>(data: &[T], mask: &[M]) -> Result<Vec<T>>
where
    T: Clone,
    M: Truthy,
{
    Ok(apply_mask(data, mask, true)?.cloned().collect())
}
