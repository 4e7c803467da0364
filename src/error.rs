//! # Tree errors.
//!
//! Every key is a valid input, so the only failures come from growing the
//! node storage. A failed `insert` leaves the tree untouched.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("failed to allocate storage for a tree node")]
  Alloc(#[from] TryReserveError),
  #[error("tree cannot address more than {} nodes", u32::MAX)]
  CapacityExceeded,
}

#[cfg(test)]
mod test_error {
  use super::*;

  #[test]
  fn alloc_failure_is_wrapped() {
    let reserve = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
    let err = Error::from(reserve);
    assert!(matches!(err, Error::Alloc(_)));
    assert_eq!(err.to_string(), "failed to allocate storage for a tree node");
  }

  #[test]
  fn capacity_message_names_the_limit() {
    assert_eq!(
      Error::CapacityExceeded.to_string(),
      format!("tree cannot address more than {} nodes", u32::MAX)
    );
  }
}
