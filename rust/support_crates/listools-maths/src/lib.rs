//! Greatest common divisor and least common multiple, both for a pair of
//! values and reduced over a whole sequence.
//!
//! The cycling iterators use [`list_lcm`] to find the *syzygy point* of a
//! group of sequences: the first position at which every member returns to
//! its starting index at the same time.
//!
//! All functions are generic over unsigned primitive integers (`u8` ..
//! `u128`, `usize`).

pub mod gcd;
pub mod lcm;

pub use gcd::{gcd, list_gcd};
pub use lcm::{lcm, list_lcm};
