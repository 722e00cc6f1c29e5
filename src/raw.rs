use std::{
  alloc::{self, Layout},
  marker::PhantomData,
  ptr::{self, NonNull},
};

/// An owned allocation of `capacity` slots of `T`.
///
/// `RawBuf` only manages memory. It never reads, writes or drops the slots;
/// tracking which of them hold live values is up to the owner.
pub(crate) struct RawBuf<T> {
  ptr: NonNull<T>,
  capacity: usize,
  _marker: PhantomData<T>,
}

// SAFETY: `RawBuf<T>` owns its allocation the same way `Box<[T]>` does.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
  /// A buffer with no slots and no allocation.
  pub const fn empty() -> Self {
    Self {
      ptr: NonNull::dangling(),
      capacity: 0,
      _marker: PhantomData,
    }
  }

  /// Allocates a buffer of `capacity` uninitialized slots.
  pub fn allocate(capacity: usize) -> Self {
    let layout = Self::layout(capacity);

    if layout.size() == 0 {
      // Zero slots or a zero-sized `T`: nothing to allocate.
      return Self {
        ptr: NonNull::dangling(),
        capacity,
        _marker: PhantomData,
      };
    }

    // SAFETY: `layout` has a non-zero size.
    let address = unsafe { alloc::alloc(layout) };

    match NonNull::new(address as *mut T) {
      Some(ptr) => Self {
        ptr,
        capacity,
        _marker: PhantomData,
      },
      None => alloc::handle_alloc_error(layout),
    }
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn as_ptr(&self) -> *mut T {
    self.ptr.as_ptr()
  }

  /// Moves the first `count` slots of `self` into the front of `target`.
  ///
  /// # Safety
  ///
  /// The first `count` slots of `self` must be initialized and
  /// `count <= target.capacity()`. Afterwards those values live in `target`
  /// and the slots of `self` must be treated as uninitialized.
  pub unsafe fn move_into(
    &self,
    target: &mut RawBuf<T>,
    count: usize,
  ) {
    debug_assert!(count <= self.capacity);
    debug_assert!(count <= target.capacity);

    unsafe {
      ptr::copy_nonoverlapping(self.as_ptr(), target.as_ptr(), count);
    }
  }

  fn layout(capacity: usize) -> Layout {
    match Layout::array::<T>(capacity) {
      Ok(layout) => layout,
      Err(_) => panic!("capacity overflow"),
    }
  }
}

impl<T> Drop for RawBuf<T> {
  fn drop(&mut self) {
    let layout = Self::layout(self.capacity);

    if layout.size() != 0 {
      // SAFETY: a non-empty layout means `ptr` came from `alloc::alloc`
      // with this exact layout.
      unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
    }
  }
}

impl<T> Default for RawBuf<T> {
  fn default() -> Self {
    Self::empty()
  }
}

#[cfg(test)]
mod tests {
  use std::mem;

  use super::*;

  #[test]
  fn test_empty_has_no_capacity() {
    let buf: RawBuf<u64> = RawBuf::empty();

    assert_eq!(0, buf.capacity());
    assert_eq!(NonNull::<u64>::dangling().as_ptr(), buf.as_ptr());
  }

  #[test]
  fn test_allocate_is_writable_and_aligned() {
    let size: usize = 6;
    let buf: RawBuf<u64> = RawBuf::allocate(size);

    assert_eq!(size, buf.capacity());
    assert_eq!(0, buf.as_ptr() as usize % mem::align_of::<u64>());

    unsafe {
      for i in 0..size {
        buf.as_ptr().add(i).write((i + 1) as u64);
      }

      for i in 0..size {
        assert_eq!((i + 1) as u64, buf.as_ptr().add(i).read());
      }
    }
  }

  #[test]
  fn test_move_into_preserves_order() {
    let old: RawBuf<u16> = RawBuf::allocate(3);
    let mut new: RawBuf<u16> = RawBuf::allocate(6);

    unsafe {
      for i in 0..3 {
        old.as_ptr().add(i).write(10 * (i as u16 + 1));
      }

      old.move_into(&mut new, 3);

      assert_eq!(10, new.as_ptr().read());
      assert_eq!(20, new.as_ptr().add(1).read());
      assert_eq!(30, new.as_ptr().add(2).read());
    }
  }

  #[test]
  fn test_zero_sized_slots_are_not_allocated() {
    let buf: RawBuf<()> = RawBuf::allocate(8);

    assert_eq!(8, buf.capacity());
    assert_eq!(NonNull::<()>::dangling().as_ptr(), buf.as_ptr());
  }

  #[test]
  fn test_take_leaves_empty() {
    let mut buf: RawBuf<i32> = RawBuf::allocate(4);
    let taken = mem::take(&mut buf);

    assert_eq!(0, buf.capacity());
    assert_eq!(4, taken.capacity());
  }
}
