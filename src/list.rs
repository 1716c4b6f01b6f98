// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedList` type and its inherent API.
//!
//! `BoundedList<T, N>` stores up to `N` `Copy` elements inline in a `[T; N]`
//! and tracks a logical length. The inherent API is split by concern across
//! the submodules below; this file holds the type itself, the cheap queries
//! and the standard trait impls.
//!
//! No heap allocations are performed.

mod default;
mod extend;
mod from;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod set_ops;
mod slice;
mod sort;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-capacity, array-backed list of `Copy` values.
///
/// `BoundedList<T, N>` keeps its elements in a `[T; N]` buffer and a logical
/// length `len ∈ 0..=N`. Only the prefix `buf[..len]` is visible; slices,
/// indexing, iteration and every query are restricted to it.
///
/// # Layout and invariants
///
/// - `0 <= len <= N` after every operation.
/// - `N > 0`, checked at compile time when a list of that capacity is built.
/// - Slots in `buf[len..]` are *free*. They are never read through the
///   public API, but they are also never cleared: `clear`, `pop_back` and a
///   shrinking `resize` only move `len`, and a growing `resize` re-exposes
///   whatever was stored in those slots before.
///
/// # Sequence and set operations
///
/// The same backing array serves as a stack ([`push_back`], [`pop_back`],
/// [`last`]) and as a small set ([`contains`], [`include`], [`exclude`],
/// [`intersect`], [`same_elements`]). Set operations are linear scans; there
/// is no hashing.
///
/// # Complexity characteristics
///
/// - The type size is `N * size_of::<T>() + size_of::<usize>()` (plus padding).
/// - Copying a list copies the whole backing buffer, which is `O(N)` in the
///   capacity. Pass it by reference in hot code.
/// - `push_back`, `pop_back`, `last`, `clear`, `resize`, `set_to` are `O(1)`.
/// - `contains`, `include`, `exclude`, `remove_first` are `O(len)`.
/// - `intersect` and `same_elements` are `O(len * other.len())`.
///
/// # Examples
///
/// ```rust
/// use bounded_list::{BoundedList, Error};
///
/// let mut v: BoundedList<i32, 3> = BoundedList::from_value(1);
/// v.push_back(2).unwrap();
/// v.push_back(3).unwrap();
/// assert_eq!(v.push_back(4), Err(Error::CapacityExceeded));
///
/// assert_eq!(*v.last().unwrap(), 3);
/// v.pop_back().unwrap();
/// assert_eq!(v.as_slice(), &[1, 2]);
/// ```
///
/// A zero capacity is rejected when the list is built, whichever constructor
/// is used:
///
/// ```compile_fail
/// use bounded_list::BoundedList;
///
/// let v: BoundedList<u8, 0> = BoundedList::new();
/// assert!(v.is_empty());
/// ```
///
/// ```compile_fail
/// use bounded_list::BoundedList;
///
/// let empty: [u8; 0] = [];
/// let v = BoundedList::<u8, 0>::from(empty);
/// assert!(v.is_full());
/// ```
///
/// [`push_back`]: BoundedList::push_back
/// [`pop_back`]: BoundedList::pop_back
/// [`last`]: BoundedList::last
/// [`contains`]: BoundedList::contains
/// [`include`]: BoundedList::include
/// [`exclude`]: BoundedList::exclude
/// [`intersect`]: BoundedList::intersect
/// [`same_elements`]: BoundedList::same_elements
pub struct BoundedList<T: Copy, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) len: usize,
}

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// The fixed capacity of this list.
    pub const CAPACITY: usize = N;

    // Evaluated by every constructor.
    pub(crate) const CAPACITY_CHECK: () = assert!(N > 0, "BoundedList capacity must be positive");

    /// Returns the capacity of this list (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Iterates over the live elements in index order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the live elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Order-sensitive, element-wise equality over the live prefix.
///
/// Lists of different capacities compare equal when their live elements do.
impl<T: Copy + PartialEq, const N: usize, const M: usize> PartialEq<BoundedList<T, M>>
    for BoundedList<T, N>
{
    fn eq(&self, other: &BoundedList<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Copy + Eq, const N: usize> Eq for BoundedList<T, N> {}

impl<T: Copy + Hash, const N: usize> Hash for BoundedList<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for BoundedList<T, N> {}
impl<T: Copy, const N: usize> Clone for BoundedList<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

// Inherent `first`/`last` (and their `_mut` forms) shadow the slice methods
// and return `Result` instead of `Option`.
impl<T: Copy, const N: usize> Deref for BoundedList<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> DerefMut for BoundedList<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Copy, const N: usize> AsRef<[T]> for BoundedList<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> AsMut<[T]> for BoundedList<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T: Copy, const N: usize> Borrow<[T]> for BoundedList<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> BorrowMut<[T]> for BoundedList<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// No hidden indirection: the list is its buffer plus a length.
static_assertions::assert_eq_size!(BoundedList<usize, 4>, [usize; 5]);
static_assertions::assert_impl_all!(BoundedList<u32, 8>: Copy, Send, Sync, fmt::Debug);
