//! Nested sequences ("lists of lists of arbitrary depth") and their
//! flattening.
//!
//! - [`Nested`] - A value that is either an atomic item or a list of nested values
//! - [`FlatIter`] - Lazy depth-first, left-to-right traversal of the atomic items
//! - [`flatten`], [`pflatten`], [`flatten_len`], [`flatten_index`] - Eager helpers
//!   over a top-level list
//!
//! Use the [`nested!`] macro to write nested literals:
//!
//! ```
//! use listools_flatten::{flatten, nested};
//!
//! let list = nested![1, 2, [3, [4, 5]]];
//! assert_eq!(list.flatten(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(flatten(list.as_list().unwrap()), vec![1, 2, 3, 4, 5]);
//! ```

pub mod flat_iter;
pub mod flatten;
pub mod nested;

pub use flat_iter::FlatIter;
pub use flatten::{flatten, flatten_index, flatten_len, pflatten};
pub use nested::Nested;
