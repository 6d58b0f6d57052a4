//! Selecting elements of a sequence through a boolean-like mask.

use std::iter::FusedIterator;

use listools_common::{Result, error::Error};

use crate::cycle_accessor::CycleAccessor;

/// Boolean conversion of mask values.
///
/// Zero numbers, `false`, empty strings and collections, `'\0'` and `None`
/// are falsy; everything else is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($t:ty),+) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        // NaN compares unequal to zero and is therefore truthy.
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Applies `mask` to `data`, yielding the elements whose mask value is truthy,
/// in their original order.
///
/// - `cyclic == false`: positions `0..min(data.len(), mask.len())` are
///   visited; elements past the end of the mask are dropped.
/// - `cyclic == true`: every position of `data` is visited and the mask is
///   read at `position mod mask.len()`.
///
/// # Errors
///
/// Fails with an empty mask error if `mask` is empty. An empty `data` is
/// fine and yields nothing.
pub fn apply_mask<'a, T, M>(data: &'a [T], mask: &'a [M], cyclic: bool) -> Result<Masked<'a, T, M>>
where
    M: Truthy,
{
    if mask.is_empty() {
        log::debug!("apply_mask: empty mask over {} elements", data.len());
        return Err(Error::empty_mask());
    }
    let end = if cyclic {
        data.len()
    } else {
        data.len().min(mask.len())
    };
    Ok(Masked {
        data,
        mask: CycleAccessor::new(mask)?,
        position: 0,
        end,
    })
}

/// Applies `mask` cyclically to `data`; see [`apply_mask`].
///
/// ```
/// use listools_iterz::iter_mask;
///
/// let data: Vec<u32> = (1..=10).collect();
/// let odd: Vec<u32> = iter_mask(&data, &[1, 0]).unwrap().copied().collect();
/// assert_eq!(odd, vec![1, 3, 5, 7, 9]);
/// ```
pub fn iter_mask<'a, T, M>(data: &'a [T], mask: &'a [M]) -> Result<Masked<'a, T, M>>
where
    M: Truthy,
{
    apply_mask(data, mask, true)
}

/// Iterator over the elements of a sequence selected by a mask.
///
/// Created by [`apply_mask`] and [`iter_mask`].
#[derive(Debug, Clone)]
pub struct Masked<'a, T, M> {
    data: &'a [T],
    mask: CycleAccessor<&'a [M], M>,
    /// Next data position to test.
    position: usize,
    /// One past the last data position to test.
    end: usize,
}

impl<'a, T, M> Iterator for Masked<'a, T, M>
where
    M: Truthy,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.end {
            let position = self.position;
            self.position += 1;
            if self.mask.get(position).is_truthy() {
                return Some(&self.data[position]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.position))
    }
}

impl<T, M: Truthy> FusedIterator for Masked<'_, T, M> {}
