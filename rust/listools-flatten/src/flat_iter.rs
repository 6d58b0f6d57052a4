//! Lazy depth-first traversal of nested sequences.

use std::iter::FusedIterator;

use crate::nested::Nested;

/// Iterator over the atomic items of a nested sequence, depth-first and
/// left to right.
///
/// The traversal keeps one slice iterator per currently open sub-list, so
/// memory use is proportional to the nesting depth rather than the number
/// of items. There is no upper bound on the depth.
#[derive(Debug, Clone)]
pub struct FlatIter<'a, T> {
    /// Open sub-lists, innermost last.
    stack: Vec<std::slice::Iter<'a, Nested<T>>>,
    /// A root-level atomic item, yielded before anything else.
    single: Option<&'a T>,
}

impl<'a, T> FlatIter<'a, T> {
    /// Creates an iterator over the items of a top-level list.
    pub fn new(values: &'a [Nested<T>]) -> FlatIter<'a, T> {
        FlatIter {
            stack: vec![values.iter()],
            single: None,
        }
    }

    /// Creates an iterator over a single nested value.
    ///
    /// An `Item` yields exactly itself; a `List` yields its expanded items.
    pub fn from_nested(value: &'a Nested<T>) -> FlatIter<'a, T> {
        match value {
            Nested::Item(item) => FlatIter {
                stack: Vec::new(),
                single: Some(item),
            },
            Nested::List(values) => FlatIter::new(values),
        }
    }
}

impl<'a, T> Iterator for FlatIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.single.take() {
            return Some(item);
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Nested::Item(item)) => return Some(item),
                Some(Nested::List(values)) => self.stack.push(values.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T> FusedIterator for FlatIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;
    use itertools::Itertools;

    #[test]
    fn test_flat_list() {
        let list = nested![1, 2, 3];
        assert_eq!(list.flat_iter().copied().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_depth_first_order() {
        let list = nested![1, [2, [3, [4]], 5], [[6]], 7];
        assert_eq!(
            list.flat_iter().copied().collect_vec(),
            vec![1, 2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn test_empty_sublists_are_skipped() {
        let list = nested![[], [[], []], 1, [[[]]], 2, []];
        assert_eq!(list.flat_iter().copied().collect_vec(), vec![1, 2]);

        let empty: Nested<i32> = nested![[[]], []];
        assert_eq!(empty.flat_iter().next(), None);
    }

    #[test]
    fn test_root_item() {
        let item = Nested::item("x");
        let mut iter = item.flat_iter();
        assert_eq!(iter.next(), Some(&"x"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_from_slice() {
        let values = vec![Nested::item('a'), nested!['b', ['c']]];
        assert_eq!(
            FlatIter::new(&values).copied().collect::<String>(),
            "abc"
        );
    }

    #[test]
    fn test_very_deep_nesting() {
        let mut value = Nested::item(0u32);
        for i in 1..=1_000u32 {
            value = Nested::list([value, Nested::item(i)]);
        }
        let items = value.flat_iter().copied().collect_vec();
        assert_eq!(items, (0..=1_000).collect_vec());
    }
}
