// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-list`
//!
//! A `no_std`, fixed-capacity, array-backed list for `Copy` values, with both
//! sequence-style and set-style operations, and **no `unsafe`**.
//!
//! The core type, [`BoundedList<T, N>`], stores up to `N` elements inline in a
//! `[T; N]` and tracks a logical length `len ∈ 0..=N`. It is meant for
//! allocation-free inner loops such as move generation or candidate-set
//! bookkeeping in search algorithms, where the bound is known at compile time
//! and a linear scan over a cache-resident array beats any hashed lookup.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`BoundedList::<T, N>::CAPACITY == N`,
//!   with `N > 0`).
//! - Only the prefix `[0, len)` is visible. Slots past `len` keep whatever was
//!   last written there: [`BoundedList::clear`], [`BoundedList::pop_back`] and
//!   a shrinking [`BoundedList::resize`] never overwrite them, and a growing
//!   `resize` exposes those stale values again.
//! - No heap allocations are performed and no destructor ever runs for a
//!   removed element.
//! - Lists are `Copy`: a copy duplicates the whole backing array, so copies
//!   never alias.
//!
//! ## Removal flavors
//!
//! - [`BoundedList::exclude`] scans **backwards** and fills the hole with the
//!   last element. It is `O(1)` after the search but does not keep order.
//! - [`BoundedList::remove_first`] scans forwards and shifts the tail left,
//!   keeping order at `O(len)` cost.
//!
//! ## Failure policy
//!
//! Every precondition is checked:
//!
//! - capacity, emptiness and precondition failures return an [`Error`] and
//!   leave the list unchanged;
//! - `list[i]` panics on an out-of-range index, exactly like a slice, while
//!   [`BoundedList::at`] reports the same condition as
//!   [`Error::IndexOutOfRange`].
//!
//! ## Example
//!
//! ```rust
//! use bounded_list::BoundedList;
//!
//! let mut moves: BoundedList<u8, 8> = BoundedList::new();
//! moves.push_back(3).unwrap();
//! moves.push_back(7).unwrap();
//! assert!(moves.include(9).unwrap());
//! assert!(!moves.include(7).unwrap());
//!
//! assert!(moves.exclude(&3));
//! assert_eq!(moves.as_slice(), &[9, 7]);
//!
//! moves.sort();
//! assert_eq!(moves.as_slice(), &[7, 9]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

// Modules
mod error;
mod index;
mod iter;
mod list;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use list::BoundedList;
