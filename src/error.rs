use thiserror::Error;

/// Errors returned by the checked operations of [`DynamicArray`](crate::DynamicArray).
///
/// Every error is raised before the array is touched, so a failed call
/// leaves it exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
  /// An index outside `[0, len)`.
  #[error("index {index} out of bounds for length {len}")]
  OutOfBounds { index: usize, len: usize },

  /// A removal (`pop` or `shift`) on an array with no elements.
  #[error("{op} from empty array")]
  EmptyContainer { op: &'static str },
}

pub type Result<T> = std::result::Result<T, ArrayError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    let out_of_bounds = ArrayError::OutOfBounds { index: 7, len: 3 };
    assert_eq!("index 7 out of bounds for length 3", out_of_bounds.to_string());

    let empty = ArrayError::EmptyContainer { op: "shift" };
    assert_eq!("shift from empty array", empty.to_string());
  }
}
