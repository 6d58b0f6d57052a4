//! Modulo-indexed access to a single finite sequence.

use std::marker::PhantomData;

use listools_common::{Result, error::Error};

/// Wraps a non-empty sequence and maps any index `i` to `seq[i mod len]`.
///
/// Index `i` and index `i + k * len` always resolve to the same element,
/// which is what lets a group of cycled sequences realign after
/// `lcm(len...)` steps.
///
/// An empty sequence is rejected at construction, so `get` never divides by
/// zero.
#[derive(Debug, Clone)]
pub struct CycleAccessor<S, T> {
    seq: S,
    len: usize,
    _t: PhantomData<fn() -> T>,
}

impl<S, T> CycleAccessor<S, T>
where
    S: AsRef<[T]>,
{
    /// Wraps `seq`.
    ///
    /// # Errors
    ///
    /// Fails with an empty sequence error if `seq` has no elements.
    pub fn new(seq: S) -> Result<Self> {
        Self::for_member(seq, 0)
    }

    /// Wraps `seq` as member number `index` of a group; `index` is reported
    /// in the error if `seq` is empty.
    pub fn for_member(seq: S, index: usize) -> Result<Self> {
        let len = seq.as_ref().len();
        if len == 0 {
            return Err(Error::empty_sequence(index));
        }
        Ok(CycleAccessor {
            seq,
            len,
            _t: PhantomData,
        })
    }

    /// Returns the element at `index mod len`.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.seq.as_ref()[index % self.len]
    }

    /// Length of the wrapped sequence, which is also its cycle period.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `(cursor + n) mod len` for a `cursor` already in `0..len`.
    #[inline]
    pub fn advance(&self, cursor: usize, n: usize) -> usize {
        offset_mod(cursor, n, self.len)
    }

    /// Always `false`: empty sequences cannot be wrapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[T] {
        self.seq.as_ref()
    }

    pub fn into_inner(self) -> S {
        self.seq
    }
}

/// Returns `(position + n) mod modulus` without overflowing, for any
/// `position < modulus`.
#[inline]
pub(crate) fn offset_mod(position: usize, n: usize, modulus: usize) -> usize {
    debug_assert!(position < modulus);
    let step = n % modulus;
    if position >= modulus - step {
        position - (modulus - step)
    } else {
        position + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listools_common::error::ErrorKind;

    #[test]
    fn test_get_wraps() {
        let acc = CycleAccessor::new(vec!['a', 'b', 'c']).unwrap();
        let got: String = (0..8).map(|i| *acc.get(i)).collect();
        assert_eq!(got, "abcabcab");
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_empty_rejected() {
        let err = CycleAccessor::<_, u8>::new(Vec::new()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptySequence { index: 0 }));

        let empty: &[u8] = &[];
        let err = CycleAccessor::for_member(empty, 4).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptySequence { index: 4 }));
    }

    #[test]
    fn test_period_invariant() {
        fastrand::seed(1_234);
        for _ in 0..100 {
            let len = fastrand::usize(1..50);
            let data: Vec<u32> = (0..len).map(|_| fastrand::u32(..)).collect();
            let acc = CycleAccessor::new(&data).unwrap();
            for _ in 0..20 {
                let i = fastrand::usize(0..10_000);
                let k = fastrand::usize(0..100);
                assert_eq!(acc.get(i), acc.get(i + k * len));
                assert_eq!(acc.get(i), &data[i % len]);
            }
        }
    }

    #[test]
    fn test_advance_wraps_without_overflow() {
        let acc = CycleAccessor::new(vec![10, 20, 30]).unwrap();
        assert_eq!(acc.advance(0, 4), 1);
        assert_eq!(acc.advance(2, 1), 0);
        // 2^64 - 1 = 0 (mod 3)
        assert_eq!(acc.advance(1, usize::MAX), 1);
        assert_eq!(offset_mod(usize::MAX - 1, usize::MAX, usize::MAX), usize::MAX - 1);
        assert_eq!(offset_mod(5, 0, 7), 5);
    }

    #[test]
    fn test_borrowed_and_owned() {
        let data = [1, 2, 3];
        let borrowed = CycleAccessor::new(&data[..]).unwrap();
        assert_eq!(*borrowed.get(4), 2);

        let owned = CycleAccessor::new(data).unwrap();
        assert_eq!(*owned.get(5), 3);
        assert_eq!(owned.into_inner(), [1, 2, 3]);
    }
}
