//! Eager helpers producing new lists from finite sequences.

pub mod mask;
pub mod period;

pub use mask::{list_mask, list_mask_cycle};
pub use period::period_len;
