//! Repeating a single sequence.

use std::iter::FusedIterator;

use crate::cycle_accessor::offset_mod;

/// Cycles `items` indefinitely: `items[0], items[1], ..., items[0], ...`.
///
/// An empty input yields nothing.
///
/// ```
/// use listools_iterz::inf_cycle;
///
/// let first: Vec<_> = inf_cycle(&[1, 2, 3]).take(7).copied().collect();
/// assert_eq!(first, vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
pub fn inf_cycle<T>(items: &[T]) -> Cycled<'_, T> {
    Cycled {
        items,
        position: 0,
        end: if items.is_empty() { Some(0) } else { None },
    }
}

/// Repeats `items` `n` times in total.
pub fn ncycle<T>(items: &[T], n: usize) -> Cycled<'_, T> {
    Cycled {
        items,
        position: 0,
        end: Some(n.saturating_mul(items.len())),
    }
}

/// Yields `items` up to and including `index`.
///
/// The sequence is passed at most once: an `index` at or past the end yields
/// every element, and an empty input yields nothing.
pub fn cycle_until_index<T>(items: &[T], index: usize) -> Cycled<'_, T> {
    Cycled {
        items,
        position: 0,
        end: Some(index.saturating_add(1).min(items.len())),
    }
}

/// Cycling shorthands on slices.
pub trait CycleExt<T> {
    fn inf_cycle(&self) -> Cycled<'_, T>;

    fn ncycle(&self, n: usize) -> Cycled<'_, T>;

    fn cycle_until_index(&self, index: usize) -> Cycled<'_, T>;
}

impl<T> CycleExt<T> for [T] {
    fn inf_cycle(&self) -> Cycled<'_, T> {
        inf_cycle(self)
    }

    fn ncycle(&self, n: usize) -> Cycled<'_, T> {
        ncycle(self, n)
    }

    fn cycle_until_index(&self, index: usize) -> Cycled<'_, T> {
        cycle_until_index(self, index)
    }
}

/// Iterator over a slice read at `position mod len`, optionally stopping at
/// a fixed position.
#[derive(Debug, Clone)]
pub struct Cycled<'a, T> {
    items: &'a [T],
    /// Reduced modulo `items.len()` when unbounded.
    position: usize,
    /// `None` for an unbounded cycle over a non-empty slice.
    end: Option<usize>,
}

impl<T> Cycled<'_, T> {
    /// Number of elements yielded so far; for an unbounded cycle, the index
    /// of the next element instead.
    pub fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self, n: usize) {
        self.position = match self.end {
            Some(end) => self.position.saturating_add(n).min(end),
            None => offset_mod(self.position, n, self.items.len()),
        };
    }
}

impl<'a, T> Iterator for Cycled<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_some_and(|end| self.position >= end) {
            return None;
        }
        let item = &self.items[self.position % self.items.len()];
        self.advance(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end {
            Some(end) => {
                let remaining = end - self.position;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.advance(n);
        self.next()
    }
}

impl<T> FusedIterator for Cycled<'_, T> {}
