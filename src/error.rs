//! Error types

use std::result;
use thiserror::Error;

/// Failures reported by a `ChainedHashTable`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
  /// A construction parameter was out of range. No table is produced.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// The bucket array for a growth step could not be allocated.
  #[error("out of memory: failed to allocate {requested} buckets")]
  OutOfMemory { requested: usize },
}

pub type Result<T> = result::Result<T, TableError>;

macro_rules! invalid_arg {
  ($($arg:tt)*) => {
    Err($crate::error::TableError::InvalidArgument(format!($($arg)*)))
  };
}
