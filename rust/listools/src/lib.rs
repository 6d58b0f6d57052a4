//! # listools: nested sequence and cycling iteration utilities
//!
//! listools manipulates finite sequences and "lists of lists" of arbitrary
//! depth. Its core is a family of zip iterators that differ only in how they
//! treat members of unequal length:
//!
//! * [`zip_cycle`] - shorter members restart from index 0 until the longest
//!   one is exhausted.
//! * [`zip_inf_cycle`] - every member restarts forever.
//! * [`zip_syzygy`] - every member restarts until all of them are exhausted at
//!   the same time, i.e. `lcm` of the lengths.
//! * [`zip_longest`] / [`zip_each`] - members that ran out yield a default.
//!
//! Masks select elements of a sequence by position ([`iter_mask`]), and the
//! flatten helpers turn [`Nested`] values into flat lists, optionally before
//! zipping them ([`flatten_zip_cycle`]).
//!
//! ```
//! use listools::{zip_syzygy, list_lcm};
//!
//! let a = [1, 2];
//! let b = [3, 4, 5];
//! let tuples: Vec<_> = zip_syzygy([&a[..], &b[..]]).unwrap().collect();
//! assert_eq!(tuples.len(), list_lcm(&[a.len(), b.len()]).unwrap());
//! assert_eq!(tuples[5], vec![2, 5]);
//! ```
//!
//! ## Module Organization
//!
//! * [`common`] - Error types and argument validation
//! * [`flatten`] - The [`Nested`] data model and flattening
//! * [`iterz`] - Zip iterators, masking and cycling helpers
//!
//! ### Support Modules
//!
//! * [`support::listutils`] - Eager masking and period detection
//! * [`support::maths`] - gcd and lcm over sequences
//!
//! ## Errors
//!
//! Every constructor validates its input eagerly and returns
//! [`common::Result`]; once an iterator exists, iterating it never fails.

pub use listools_common as common;
pub use listools_flatten as flatten;
pub use listools_iterz as iterz;

pub use listools_common::{Result, error::Error, error::ErrorKind};
pub use listools_flatten::{Nested, flatten_index, flatten_len, nested, pflatten};
pub use listools_iterz::{
    CycleExt, PolicyZip, TerminationPolicy, ZipOptions, apply_mask, cycle_until_index,
    flatten_zip_cycle, flatten_zip_with_policy, inf_cycle, iter_mask, ncycle, zip_cycle,
    zip_each, zip_inf_cycle, zip_longest, zip_longest_with, zip_syzygy, zip_with_policy,
};
pub use listools_listutils::{list_mask, list_mask_cycle, period_len};
pub use listools_maths::{list_gcd, list_lcm};

pub mod support {
    pub use listools_listutils as listutils;
    pub use listools_maths as maths;
}
