//! A minimal growable array: ordered, index-addressed, duplicate-permitting
//! storage with amortized constant-time append.
//!
//! The capacity starts at one slot and doubles whenever an insertion would
//! overflow it. See [`DynamicArray`] for the full operation set.

mod buffer;
pub mod dynamic_array;
#[cfg(test)]
mod tests;

pub use buffer::{GROWTH_FACTOR, MIN_CAPACITY, grown_capacity};
pub use dynamic_array::DynamicArray;
pub use dynarray_common::Result;
pub use dynarray_common::error::{Error, ErrorKind, Operation};
