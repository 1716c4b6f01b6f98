// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::BoundedList;

impl<T: Copy + Default, const N: usize> BoundedList<T, N> {
    /// Constructs an empty list with every slot initialized to `Default::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a list holding exactly `value`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        let mut list = Self::default();
        list.set_to(value);
        list
    }
}

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Constructs an empty list with the backing buffer filled with `fill`.
    ///
    /// The initial **length** is `0`. The filled values only become visible
    /// through a growing [`resize`](BoundedList::resize).
    #[inline]
    pub const fn new_with(fill: T) -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            buf: [fill; N],
            len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::BoundedList;

    #[derive(Copy, Clone, Debug, PartialEq)]
    struct NoDefault(u8);

    #[test]
    fn test_new_with_needs_no_default() {
        let mut v: BoundedList<NoDefault, 3> = BoundedList::new_with(NoDefault(0));
        assert!(v.is_empty());
        v.push_back(NoDefault(1)).unwrap();
        assert_eq!(v.as_slice(), &[NoDefault(1)]);
    }

    #[test]
    fn test_new_with_fill_is_reachable_by_resize() {
        let mut v: BoundedList<u8, 3> = BoundedList::new_with(7);
        v.resize(3).unwrap();
        assert_eq!(v.as_slice(), &[7, 7, 7]);
    }

    #[test]
    fn test_const_construction() {
        const EMPTY: BoundedList<u16, 4> = BoundedList::new_with(0);
        assert_eq!(EMPTY.len(), 0);
        assert_eq!(EMPTY.capacity(), 4);
    }
}
