//! Fixed-capacity, duplicate-free collections for targets without a heap.
//!
//! The main type is [`BoundedSet`], an insertion-ordered set backed by an
//! inline `[T; N]` array. Nothing in this crate allocates. Without the `std`
//! feature the crate builds as `#![no_std]`.
//!
//! ```rust
//! use bounded_set::BoundedSet;
//!
//! let mut ids = BoundedSet::<u32, 3>::new();
//! ids.add(0x123);
//! ids.add(0x456);
//! ids.add(0x123);
//! assert_eq!(ids.len(), 2);
//! assert!(ids.contains(&0x456));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod generic;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::BoundedSetError;
pub use generic::bounded_set::{BoundedSet, DEFAULT_CAPACITY};
pub use generic::fixed_capacity::FixedCapacitySet;
