//! Iterators that cycle over finite sequences.
//!
//! This crate provides lazy, pull-based iterators that combine several finite
//! sequences of possibly different lengths into tuples, restarting shorter
//! sequences from the beginning (or padding them) according to a
//! [`TerminationPolicy`]:
//!
//! - **Cycling zips**: [`zip_cycle`], [`zip_inf_cycle`], [`zip_syzygy`] and the
//!   general [`zip_with_policy`] / [`ZipOptions`] entry points
//! - **Padded zips**: [`zip_longest`] (a.k.a. [`zip_each`]) and [`zip_longest_with`]
//! - **Masking**: [`apply_mask`] and [`iter_mask`] select elements through a
//!   (possibly cycled) mask of [`Truthy`] values
//! - **Single-sequence cycles**: [`inf_cycle`], [`ncycle`], [`cycle_until_index`]
//!   and the [`CycleExt`] extension trait
//! - **Flatten-then-zip**: [`flatten_zip_cycle`] and [`flatten_zip_with_policy`]
//!   over [`Nested`](listools_flatten::Nested) members
//!
//! All constructors validate their inputs eagerly: an empty member, an empty
//! mask or an empty group is reported before the first element is produced.
//!
//! ```
//! use listools_iterz::zip_cycle;
//!
//! let tuples: Vec<_> = zip_cycle([vec![1, 2], vec![4, 5, 6, 7, 8]]).unwrap().collect();
//! assert_eq!(tuples, vec![vec![1, 4], vec![2, 5], vec![1, 6], vec![2, 7], vec![1, 8]]);
//! ```

pub mod cycle;
pub mod cycle_accessor;
pub mod flatten_zip;
pub mod mask;
pub mod options;
pub mod policy;
pub mod zip;

pub use cycle::{CycleExt, Cycled, cycle_until_index, inf_cycle, ncycle};
pub use cycle_accessor::CycleAccessor;
pub use flatten_zip::{flatten_members, flatten_zip_cycle, flatten_zip_with_policy};
pub use mask::{Masked, Truthy, apply_mask, iter_mask};
pub use options::ZipOptions;
pub use policy::TerminationPolicy;
pub use zip::{
    CyclingZip, FilledZip, PaddedZip, PolicyZip, zip_cycle, zip_each, zip_inf_cycle,
    zip_longest, zip_longest_with, zip_syzygy, zip_with_policy,
};
