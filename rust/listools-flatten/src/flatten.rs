//! Eager flattening helpers over a top-level list of nested values.

use std::fmt::Debug;

use listools_common::{Result, error::Error};

use crate::{flat_iter::FlatIter, nested::Nested};

/// Completely flattens `values` into a one-dimensional list.
///
/// Sub-lists of any depth are expanded depth-first, left to right; the
/// relative order of atomic items is preserved. Equivalent to [`pflatten`]
/// with an unbounded depth.
///
/// ```
/// use listools_flatten::{flatten, nested};
///
/// let list = nested![1, 2, [3, [4, 5]]];
/// assert_eq!(flatten(list.as_list().unwrap()), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(values: &[Nested<T>]) -> Vec<T> {
    FlatIter::new(values).cloned().collect()
}

/// Partially flattens `values`, expanding sub-lists `depth` levels deep.
///
/// Each level splices the elements of every directly contained sub-list into
/// the result and keeps atomic items in place. Deeper sub-lists survive as
/// `Nested::List` values. A `depth` of 0 returns the input unchanged.
///
/// ```
/// use listools_flatten::{Nested, nested, pflatten};
///
/// let list = nested![1, 2, [3, [[4], 5]]];
/// let once = pflatten(list.as_list().unwrap(), 1);
/// assert_eq!(Nested::List(once), nested![1, 2, 3, [[4], 5]]);
/// ```
pub fn pflatten<T: Clone>(values: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    let mut current = values.to_vec();
    for _ in 0..depth {
        if !current.iter().any(Nested::is_list) {
            break;
        }
        let mut next = Vec::with_capacity(current.len());
        for value in current {
            match value {
                Nested::Item(_) => next.push(value),
                Nested::List(children) => next.extend(children),
            }
        }
        current = next;
    }
    current
}

/// Returns the number of atomic items in `values` after full expansion.
pub fn flatten_len<T>(values: &[Nested<T>]) -> usize {
    FlatIter::new(values).count()
}

/// Returns the flat index of the first atomic item equal to `element`.
///
/// # Errors
///
/// Fails with an element-not-found error if no item matches.
///
/// ```
/// use listools_flatten::{flatten_index, nested};
///
/// let list = nested![[1, 2], [3, 4], [5, 6]];
/// assert_eq!(flatten_index(&3, list.as_list().unwrap()).unwrap(), 2);
/// assert!(flatten_index(&7, list.as_list().unwrap()).is_err());
/// ```
pub fn flatten_index<T>(element: &T, values: &[Nested<T>]) -> Result<usize>
where
    T: PartialEq + Debug,
{
    FlatIter::new(values)
        .position(|item| item == element)
        .ok_or_else(|| {
            log::debug!("flatten_index: {element:?} not found");
            Error::element_not_found(element)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;
    use listools_common::error::ErrorKind;

    fn items<T>(list: &Nested<T>) -> &[Nested<T>] {
        list.as_list().unwrap()
    }

    #[test]
    fn test_flatten() {
        let list = nested![[1, 2], [3, 4], [5], [6, 7, 8], [9, 10]];
        assert_eq!(flatten(items(&list)), (1..=10).collect::<Vec<_>>());

        let list = nested![1, 2, [3, [4, 5]]];
        assert_eq!(flatten(items(&list)), vec![1, 2, 3, 4, 5]);

        let list: Nested<i32> = nested![];
        assert!(flatten(items(&list)).is_empty());
    }

    #[test]
    fn test_flatten_strings() {
        let list = nested!["foo", ["bar", ["baz"]], "qux"];
        assert_eq!(flatten(items(&list)), vec!["foo", "bar", "baz", "qux"]);
    }

    #[test]
    fn test_pflatten_depths() {
        let list = nested![1, 2, [3, [4, 5]]];
        let values = items(&list);

        assert_eq!(pflatten(values, 0), values.to_vec());
        assert_eq!(Nested::List(pflatten(values, 1)), nested![1, 2, 3, [4, 5]]);
        assert_eq!(Nested::List(pflatten(values, 2)), nested![1, 2, 3, 4, 5]);
        assert_eq!(Nested::List(pflatten(values, 3)), nested![1, 2, 3, 4, 5]);
        assert_eq!(Nested::List(pflatten(values, 100)), nested![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pflatten_nested_empty_lists() {
        let list: Nested<i32> = nested![[], [[]], 1];
        assert_eq!(Nested::List(pflatten(items(&list), 1)), nested![[], 1]);
        assert_eq!(Nested::List(pflatten(items(&list), 2)), nested![1]);
    }

    #[test]
    fn test_pflatten_matches_flatten_at_full_depth() {
        fastrand::seed(42);
        for _ in 0..50 {
            let list = random_nested(4);
            let values = items(&list);
            let full = pflatten(values, list.depth());
            assert!(full.iter().all(|v| !v.is_list()));
            let expanded: Vec<u32> = full.iter().filter_map(|v| v.as_item().copied()).collect();
            assert_eq!(expanded, flatten(values));
            assert_eq!(expanded.len(), flatten_len(values));
        }
    }

    #[test]
    fn test_flatten_len() {
        let list = nested![[1, 2], [3, 4], [5, 6]];
        assert_eq!(flatten_len(items(&list)), 6);

        let list = nested![1.0, [2.2, 3.5], [4.0, [5.5, 6.0]], [7.0, 8.0]];
        assert_eq!(flatten_len(items(&list)), 8);
    }

    #[test]
    fn test_flatten_index() {
        let list = nested![[1, 2], [3, 4], [5, 6]];
        assert_eq!(flatten_index(&3, items(&list)).unwrap(), 2);
        assert_eq!(flatten_index(&1, items(&list)).unwrap(), 0);
        assert_eq!(flatten_index(&6, items(&list)).unwrap(), 5);

        let list = nested![[None], [Some(1), [Some(1)]]];
        assert_eq!(flatten_index(&Some(1), items(&list)).unwrap(), 1);
    }

    #[test]
    fn test_flatten_index_not_found() {
        let list = nested![[1, 2], [3, 4], [5, 6]];
        let err = flatten_index(&7, items(&list)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ElementNotFound { .. }));
        assert_eq!(err.to_string(), "7 is not in list");
    }

    fn random_nested(max_depth: usize) -> Nested<u32> {
        let len = fastrand::usize(0..5);
        Nested::list((0..len).map(|_| {
            if max_depth > 0 && fastrand::bool() {
                random_nested(max_depth - 1)
            } else {
                Nested::item(fastrand::u32(..))
            }
        }))
    }
}
