//! Fixed-length slot storage backing [`DynamicArray`](crate::DynamicArray).

use std::mem::MaybeUninit;
use std::ptr;

/// Smallest number of slots a buffer ever holds.
pub const MIN_CAPACITY: usize = 1;

/// Factor applied to the slot count when the buffer runs out of room.
pub const GROWTH_FACTOR: usize = 2;

/// Returns the slot count that follows `current` under the doubling rule.
#[inline]
pub fn grown_capacity(current: usize) -> usize {
    current.saturating_mul(GROWTH_FACTOR).max(MIN_CAPACITY)
}

/// An owned, fixed-length run of possibly uninitialized element slots.
///
/// The buffer never tracks which slots are initialized and never drops
/// elements; the owner is responsible for both. Dropping the buffer only
/// releases the allocation.
pub(crate) struct SlotBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> SlotBuffer<T> {
    /// Allocates a buffer of `capacity` uninitialized slots.
    pub fn with_capacity(capacity: usize) -> SlotBuffer<T> {
        SlotBuffer {
            slots: Box::<[T]>::new_uninit_slice(capacity),
        }
    }

    /// Allocates the minimal one-slot buffer.
    pub fn minimal() -> SlotBuffer<T> {
        Self::with_capacity(MIN_CAPACITY)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }

    /// Moves the first `len` slots into a fresh buffer of `new_capacity`
    /// slots and replaces the current allocation with it.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` must be initialized, and `len` must not exceed
    /// either the current or the new capacity.
    pub unsafe fn relocate(&mut self, len: usize, new_capacity: usize) {
        assert!(len <= self.capacity() && len <= new_capacity);
        let mut slots = Box::<[T]>::new_uninit_slice(new_capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), slots.as_mut_ptr() as *mut T, len);
        }
        // The old slots are plain `MaybeUninit`, so dropping them frees
        // memory without touching the moved elements.
        self.slots = slots;
    }

    /// Shifts slots `[index, len)` one position to the right.
    ///
    /// # Safety
    ///
    /// `index <= len` and `len < capacity` must hold.
    #[inline]
    pub unsafe fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity());
        unsafe {
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), len - index);
        }
    }

    /// Shifts slots `(index, len)` one position to the left, overwriting
    /// slot `index`.
    ///
    /// # Safety
    ///
    /// `index < len <= capacity` must hold, and slot `index` must already
    /// have been moved out.
    #[inline]
    pub unsafe fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity());
        unsafe {
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p.add(1), p, len - index - 1);
        }
    }
}
