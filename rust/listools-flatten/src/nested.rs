//! The nested sequence value type and its literal macro.

use crate::flat_iter::FlatIter;

/// A value in a nested sequence: either an atomic item or a list of further
/// nested values.
///
/// Items are opaque; only the `Item`/`List` distinction is ever inspected.
/// A `Nested<T>` whose item type is itself a collection (e.g. `Nested<Vec<u8>>`)
/// treats that collection as atomic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// An atomic value.
    Item(T),
    /// A sub-list, which may contain items and further lists.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates an atomic value.
    pub fn item(value: T) -> Nested<T> {
        Nested::Item(value)
    }

    /// Creates a list from the given nested values.
    pub fn list(values: impl IntoIterator<Item = Nested<T>>) -> Nested<T> {
        Nested::List(values.into_iter().collect())
    }

    /// Creates a flat list of atomic values.
    pub fn flat(values: impl IntoIterator<Item = T>) -> Nested<T> {
        Nested::List(values.into_iter().map(Nested::Item).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(value) => Some(value),
            Nested::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Item(_) => None,
            Nested::List(values) => Some(values),
        }
    }

    /// Returns a lazy depth-first iterator over the atomic items.
    ///
    /// For an `Item`, the iterator yields that single item.
    pub fn flat_iter(&self) -> FlatIter<'_, T> {
        FlatIter::from_nested(self)
    }

    /// Returns all atomic items, fully expanded, in depth-first order.
    pub fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.flat_iter().cloned().collect()
    }

    /// Number of atomic items after full expansion.
    pub fn flat_len(&self) -> usize {
        self.flat_iter().count()
    }

    /// Nesting depth: 0 for an item, 1 for a flat list (including an empty
    /// one), and one more than the deepest child for other lists.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(values) => 1 + values.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(values: Vec<Nested<T>>) -> Self {
        Nested::List(values)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::list(iter)
    }
}

/// Builds a [`Nested::List`] from a bracketed literal.
///
/// Bracket groups become sub-lists; every other comma-separated expression
/// becomes a [`Nested::Item`].
///
/// ```
/// use listools_flatten::{Nested, nested};
///
/// let list = nested![1, [2, [3]], 4];
/// assert_eq!(
///     list,
///     Nested::List(vec![
///         Nested::Item(1),
///         Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
///         Nested::Item(4),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! nested {
    ($($tokens:tt)*) => {
        $crate::Nested::List($crate::__nested_elements!([] $($tokens)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __nested_elements {
    ([$($done:expr,)*]) => {
        ::std::vec![$($done,)*]
    };
    ([$($done:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::__nested_elements!([$($done,)* $crate::nested!($($inner)*),] $($($rest)*)?)
    };
    ([$($done:expr,)*] $item:expr $(, $($rest:tt)*)?) => {
        $crate::__nested_elements!([$($done,)* $crate::Nested::Item($item),] $($($rest)*)?)
    };
}

#[cfg(test)]
mod tests {
    use super::Nested;

    #[test]
    fn test_macro_shapes() {
        let empty: Nested<i32> = nested![];
        assert_eq!(empty, Nested::List(vec![]));

        assert_eq!(nested![1, 2], Nested::flat([1, 2]));
        assert_eq!(nested![1, 2,], Nested::flat([1, 2]));
        assert_eq!(
            nested![[], [[]]],
            Nested::<i32>::List(vec![
                Nested::List(vec![]),
                Nested::List(vec![Nested::List(vec![])]),
            ])
        );
        assert_eq!(
            nested![-1, [2 + 3]],
            Nested::list([Nested::Item(-1), Nested::flat([5])])
        );
    }

    #[test]
    fn test_accessors() {
        let list = nested!["a", ["b"]];
        assert!(list.is_list());
        assert!(list.as_item().is_none());
        let children = list.as_list().unwrap();
        assert_eq!(children[0].as_item(), Some(&"a"));
        assert!(children[1].is_list());
        assert_eq!(Nested::item(3).as_item(), Some(&3));
    }

    #[test]
    fn test_depth() {
        assert_eq!(Nested::item(1).depth(), 0);
        assert_eq!(Nested::<i32>::List(vec![]).depth(), 1);
        assert_eq!(nested![1, 2].depth(), 1);
        assert_eq!(nested![1, [2, [3]]].depth(), 3);
        let deep: Nested<i32> = nested![[[]]];
        assert_eq!(deep.depth(), 3);
    }

    #[test]
    fn test_flatten_and_len() {
        let list = nested![[1, 2], [3, 4], [5], [6, 7, 8], [9, 10]];
        assert_eq!(list.flatten(), (1..=10).collect::<Vec<_>>());
        assert_eq!(list.flat_len(), 10);
        assert_eq!(Nested::item(7).flatten(), vec![7]);
    }

    #[test]
    fn test_collect_into_nested() {
        let list: Nested<u8> = (0..3).map(Nested::Item).collect();
        assert_eq!(list, nested![0, 1, 2]);
        let list: Nested<u8> = vec![Nested::Item(1), nested![2]].into();
        assert_eq!(list, nested![1, [2]]);
    }
}
