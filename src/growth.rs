/// Capacity a freshly constructed array starts with.
pub const DEFAULT_CAPACITY: usize = 4;

/// Computes the capacity a buffer of `current` slots must grow to so that it
/// holds at least `min` elements.
///
/// Growth starts from `max(current, 1)` and doubles until it reaches `min`.
/// If `current` already satisfies `min` it is returned unchanged.
///
/// # Panics
///
/// Panics with "capacity overflow" when doubling would overflow `usize`.
///
/// # Examples
///
/// ```rust
/// use dynarray::grow_capacity;
///
/// assert_eq!(grow_capacity(4, 5), 8);
/// assert_eq!(grow_capacity(0, 1), 1);
/// assert_eq!(grow_capacity(4, 3), 4);
/// ```
pub fn grow_capacity(
  current: usize,
  min: usize,
) -> usize {
  if current >= min {
    return current;
  }

  let mut capacity = current.max(1);
  while capacity < min {
    capacity = capacity.checked_mul(2).expect("capacity overflow");
  }

  capacity
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_no_growth_when_satisfied() {
    for current in 0..16 {
      for min in 0..=current {
        assert_eq!(current, grow_capacity(current, min));
      }
    }
  }

  #[test]
  fn test_doubling() {
    assert_eq!(grow_capacity(4, 5), 8);
    assert_eq!(grow_capacity(4, 9), 16);
    assert_eq!(grow_capacity(5, 6), 10);
    assert_eq!(grow_capacity(3, 100), 192);
  }

  #[test]
  fn test_growth_from_zero() {
    assert_eq!(grow_capacity(0, 1), 1);
    assert_eq!(grow_capacity(0, 2), 2);
    assert_eq!(grow_capacity(0, 3), 4);
    assert_eq!(grow_capacity(0, 17), 32);
  }

  #[test]
  fn test_result_is_power_of_two_multiple() {
    for current in 1..10usize {
      for min in (current + 1)..200 {
        let capacity = grow_capacity(current, min);

        assert!(capacity >= min);
        assert!(capacity / 2 < min);
        assert_eq!(0, capacity % current);
        assert!((capacity / current).is_power_of_two());
      }
    }
  }

  #[test]
  #[should_panic(expected = "capacity overflow")]
  fn test_overflow_panics() {
    grow_capacity(usize::MAX / 2 + 1, usize::MAX);
  }
}
