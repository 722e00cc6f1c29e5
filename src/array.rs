use std::{
  fmt, mem,
  ops::{Index, IndexMut},
  ptr, slice,
};

use log::{debug, trace};

use crate::{
  error::{ArrayError, Result},
  growth::{DEFAULT_CAPACITY, grow_capacity},
  raw::RawBuf,
};

/// A growable array that owns a contiguous buffer of `T`.
///
/// Elements live at `[0, len)` of a buffer of `capacity` slots. Appending
/// past the capacity doubles it; removing never shrinks it.
///
/// # Examples
///
/// ```rust
/// use dynarray::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push(2);
/// array.push(3);
/// array.unshift(1);
///
/// assert_eq!(array[0], 1);
/// assert_eq!(array.find_index(|&x| x == 3), Some(2));
/// assert_eq!(array.pop(), Ok(3));
/// assert_eq!(array.shift(), Ok(1));
/// assert_eq!(array.len(), 1);
/// assert_eq!(array.capacity(), 4);
/// ```
pub struct DynamicArray<T> {
  buf: RawBuf<T>,
  len: usize,
}

impl<T> DynamicArray<T> {
  /// Creates an empty array with room for [`DEFAULT_CAPACITY`] elements.
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }

  /// Creates an empty array with room for `capacity` elements.
  ///
  /// A capacity of zero allocates nothing; the first insert grows it to one.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      buf: RawBuf::allocate(capacity),
      len: 0,
    }
  }

  /// An array with no buffer at all. This is the state [`take`] leaves
  /// behind.
  ///
  /// [`take`]: DynamicArray::take
  pub const fn empty() -> Self {
    Self {
      buf: RawBuf::empty(),
      len: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn capacity(&self) -> usize {
    self.buf.capacity()
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Moves the buffer out into a new array, leaving `self` with length and
  /// capacity zero. No element is copied.
  pub fn take(&mut self) -> Self {
    debug!(
      "moving buffer of {} slots holding {} elements",
      self.capacity(),
      self.len
    );

    mem::replace(self, Self::empty())
  }

  /// Returns the element at `index`.
  ///
  /// # Errors
  ///
  /// [`ArrayError::OutOfBounds`] when `index >= len`.
  pub fn at(
    &self,
    index: usize,
  ) -> Result<&T> {
    self.check_index(index)?;

    // SAFETY: `index < len`, so the slot is initialized.
    Ok(unsafe { &*self.buf.as_ptr().add(index) })
  }

  /// Returns the element at `index` for in-place mutation.
  ///
  /// # Errors
  ///
  /// [`ArrayError::OutOfBounds`] when `index >= len`.
  pub fn at_mut(
    &mut self,
    index: usize,
  ) -> Result<&mut T> {
    self.check_index(index)?;

    // SAFETY: `index < len`, so the slot is initialized.
    Ok(unsafe { &mut *self.buf.as_ptr().add(index) })
  }

  /// Appends `value` after the last element.
  ///
  /// When the buffer is full it is reallocated at double the capacity and
  /// every element moves to the new allocation. Raw pointers taken into the
  /// array before the call are dangling afterwards.
  pub fn push(
    &mut self,
    value: T,
  ) {
    self.ensure_capacity(self.len + 1);

    unsafe {
      // SAFETY: `len < capacity` after growing.
      ptr::write(self.buf.as_ptr().add(self.len), value);
    }
    self.len += 1;
  }

  /// Removes and returns the last element.
  ///
  /// # Errors
  ///
  /// [`ArrayError::EmptyContainer`] when the array is empty.
  pub fn pop(&mut self) -> Result<T> {
    if self.len == 0 {
      return Err(ArrayError::EmptyContainer { op: "pop" });
    }

    self.len -= 1;

    // SAFETY: the slot at the old `len - 1` is initialized and no longer
    // counted, so it is read out exactly once.
    Ok(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
  }

  /// Inserts `value` in front of the first element.
  ///
  /// Every existing element moves up one slot, so this costs O(len) where
  /// [`push`](DynamicArray::push) is amortized O(1).
  pub fn unshift(
    &mut self,
    value: T,
  ) {
    self.ensure_capacity(self.len + 1);

    unsafe {
      let start = self.buf.as_ptr();
      // SAFETY: `len + 1 <= capacity`, both ranges are in bounds.
      ptr::copy(start, start.add(1), self.len);
      ptr::write(start, value);
    }
    self.len += 1;
  }

  /// Removes and returns the first element, moving the rest down one slot.
  ///
  /// # Errors
  ///
  /// [`ArrayError::EmptyContainer`] when the array is empty.
  pub fn shift(&mut self) -> Result<T> {
    if self.len == 0 {
      return Err(ArrayError::EmptyContainer { op: "shift" });
    }

    let value = unsafe {
      let start = self.buf.as_ptr();
      let value = ptr::read(start);
      ptr::copy(start.add(1), start, self.len - 1);
      value
    };
    self.len -= 1;

    Ok(value)
  }

  /// Returns the first element, in index order, matching `predicate`.
  pub fn find<P>(
    &self,
    mut predicate: P,
  ) -> Option<&T>
  where
    P: FnMut(&T) -> bool,
  {
    self.as_slice().iter().find(|&value| predicate(value))
  }

  /// Returns the index of the first element matching `predicate`.
  pub fn find_index<P>(
    &self,
    mut predicate: P,
  ) -> Option<usize>
  where
    P: FnMut(&T) -> bool,
  {
    self.as_slice().iter().position(|value| predicate(value))
  }

  fn check_index(
    &self,
    index: usize,
  ) -> Result<()> {
    if index >= self.len {
      return Err(ArrayError::OutOfBounds {
        index,
        len: self.len,
      });
    }

    Ok(())
  }

  fn ensure_capacity(
    &mut self,
    min_capacity: usize,
  ) {
    let capacity = self.capacity();
    if capacity >= min_capacity {
      return;
    }

    let new_capacity = grow_capacity(capacity, min_capacity);
    trace!(
      "growing buffer from {} to {} slots, moving {} elements",
      capacity, new_capacity, self.len
    );

    let mut new_buf = RawBuf::allocate(new_capacity);

    // SAFETY: `[0, len)` is initialized and `len <= capacity < new_capacity`.
    // The old buffer is released right after without touching its slots.
    unsafe { self.buf.move_into(&mut new_buf, self.len) };
    self.buf = new_buf;
  }

  /// Drops every element, keeping the buffer.
  fn clear(&mut self) {
    let len = self.len;
    // Leak rather than double drop if an element's destructor panics.
    self.len = 0;

    unsafe {
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), len));
    }
  }

  fn as_slice(&self) -> &[T] {
    // SAFETY: `[0, len)` is initialized and the pointer is non-null and
    // aligned even when nothing is allocated.
    unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
  }
}

impl<T> Drop for DynamicArray<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T> Default for DynamicArray<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for DynamicArray<T> {
  /// Deep copy with the same capacity as `self`, not just its length.
  fn clone(&self) -> Self {
    let mut copy = Self::with_capacity(self.capacity());
    for value in self.as_slice() {
      copy.push(value.clone());
    }

    copy
  }

  fn clone_from(
    &mut self,
    source: &Self,
  ) {
    if self.capacity() != source.capacity() {
      *self = source.clone();
      return;
    }

    self.clear();
    for value in source.as_slice() {
      self.push(value.clone());
    }
  }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
  fn eq(
    &self,
    other: &Self,
  ) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
  type Output = T;

  /// # Panics
  ///
  /// Panics when `index >= len`.
  fn index(
    &self,
    index: usize,
  ) -> &T {
    match self.at(index) {
      Ok(value) => value,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
  fn index_mut(
    &mut self,
    index: usize,
  ) -> &mut T {
    match self.at_mut(index) {
      Ok(value) => value,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.as_slice()).finish()
  }
}
