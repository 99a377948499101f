use std::fmt;
use std::mem;
use std::ptr;

use dynarray_common::Result;
use dynarray_common::error::Operation;
use dynarray_common::result::{verify_index, verify_position};

use crate::buffer::{SlotBuffer, grown_capacity};

/// A growable, index-addressed sequence with amortized constant-time append.
///
/// Elements live in an exclusively owned buffer whose slot count (the
/// capacity) starts at one and doubles whenever an insertion would overflow
/// it. Capacity never shrinks, except through [`DynamicArray::clear`], which
/// returns the array to its freshly constructed state.
///
/// Index-taking operations report a bad index through
/// [`ErrorKind::IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange) and leave
/// the array untouched when they fail.
///
/// # Examples
///
/// ```
/// use dynarray::DynamicArray;
///
/// let mut a = DynamicArray::new();
/// a.push(1);
/// a.push(2);
/// a.insert(1, 99).unwrap();
///
/// assert_eq!(a.len(), 3);
/// assert_eq!(*a.get(1).unwrap(), 99);
/// assert_eq!(a.to_string(), "[1, 99, 2]");
/// assert!(a.get(3).is_err());
/// ```
pub struct DynamicArray<T> {
    /// Slots `[0, len)` are initialized, the rest are not.
    buffer: SlotBuffer<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with a single slot of capacity.
    pub fn new() -> DynamicArray<T> {
        DynamicArray {
            buffer: SlotBuffer::minimal(),
            len: 0,
        }
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold before it grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        verify_index(Operation::Get, index, self.len)?;
        Ok(unsafe { &*self.buffer.as_ptr().add(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(Operation::Get, index, self.len)?;
        Ok(unsafe { &mut *self.buffer.as_mut_ptr().add(index) })
    }

    /// Appends an element, growing the buffer if it is full.
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        unsafe {
            self.buffer.as_mut_ptr().add(self.len).write(value);
        }
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting everything after it one
    /// position to the right.
    ///
    /// `index == len()` is an append. Any larger index fails before the
    /// array is modified.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        verify_position(Operation::Insert, index, self.len)?;
        self.reserve_one();
        unsafe {
            self.buffer.shift_right(index, self.len);
            self.buffer.as_mut_ptr().add(index).write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        verify_index(Operation::Set, index, self.len)?;
        let slot = unsafe { &mut *self.buffer.as_mut_ptr().add(index) };
        Ok(mem::replace(slot, value))
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one position to the left. Capacity is left as is.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        verify_index(Operation::Remove, index, self.len)?;
        let value = unsafe {
            let value = ptr::read(self.buffer.as_ptr().add(index));
            self.buffer.shift_left(index, self.len);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Drops every element and resets the array to a single slot of capacity.
    pub fn clear(&mut self) {
        // Detach the old contents first so a panicking destructor still
        // leaves an empty, minimal array behind.
        let len = mem::replace(&mut self.len, 0);
        let mut released = mem::replace(&mut self.buffer, SlotBuffer::minimal());
        log::trace!(
            "clearing dynamic array, releasing {} slots",
            released.capacity()
        );
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(released.as_mut_ptr(), len));
        }
    }

    /// Copies the elements out into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.live().to_vec()
    }

    /// Returns `true` if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns whether an element was removed.
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item)
            .is_some_and(|index| self.remove(index).is_ok())
    }

    /// Removes every element equal to `item`, keeping the rest in order.
    ///
    /// Returns whether at least one element was removed. If the comparison
    /// panics, the elements examined so far stay removed and the remaining
    /// ones keep their relative order.
    pub fn remove_all(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let original_len = self.len;
        // Slots behind the cursor may be holes until the compaction ends.
        self.len = 0;
        let mut compaction = Compaction {
            array: self,
            processed: 0,
            deleted: 0,
            original_len,
        };
        while compaction.processed < original_len {
            let base = compaction.array.buffer.as_mut_ptr();
            let current = unsafe { base.add(compaction.processed) };
            if unsafe { &*current == item } {
                compaction.processed += 1;
                compaction.deleted += 1;
                unsafe {
                    ptr::drop_in_place(current);
                }
            } else {
                if compaction.deleted > 0 {
                    unsafe {
                        let hole = base.add(compaction.processed - compaction.deleted);
                        ptr::copy_nonoverlapping(current, hole, 1);
                    }
                }
                compaction.processed += 1;
            }
        }
        compaction.deleted != 0
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live().iter().position(|x| x == item)
    }

    #[inline]
    fn live(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    /// Makes room for one more element.
    fn reserve_one(&mut self) {
        let capacity = self.buffer.capacity();
        if self.len < capacity {
            return;
        }
        let new_capacity = grown_capacity(capacity);
        log::trace!("growing dynamic array from {capacity} to {new_capacity} slots");
        unsafe {
            self.buffer.relocate(self.len, new_capacity);
        }
    }

    /// Drops the elements at `[new_len, len)`.
    fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(
            unsafe { self.buffer.as_mut_ptr().add(new_len) },
            self.len - new_len,
        );
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        unsafe {
            ptr::drop_in_place(tail);
        }
    }
}

/// Closes the gap left by removed elements and restores the length, also
/// when a comparison or destructor unwinds mid-pass.
struct Compaction<'a, T> {
    array: &'a mut DynamicArray<T>,
    processed: usize,
    deleted: usize,
    original_len: usize,
}

impl<T> Drop for Compaction<'_, T> {
    fn drop(&mut self) {
        if self.deleted > 0 && self.processed < self.original_len {
            unsafe {
                let base = self.array.buffer.as_mut_ptr();
                ptr::copy(
                    base.add(self.processed),
                    base.add(self.processed - self.deleted),
                    self.original_len - self.processed,
                );
            }
        }
        self.array.len = self.original_len - self.deleted;
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy: DynamicArray<T> = DynamicArray {
            buffer: SlotBuffer::with_capacity(self.capacity()),
            len: 0,
        };
        for item in self.live() {
            unsafe {
                copy.buffer.as_mut_ptr().add(copy.len).write(item.clone());
            }
            copy.len += 1;
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live()).finish()
    }
}

/// Renders the elements as `[e0, e1, ..., en]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.live().iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
