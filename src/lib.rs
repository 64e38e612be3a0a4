//! A hash table from `i32` keys to `String` values using separate chaining.
//!
//! ```
//! use chaintable::ChainedHashTable;
//!
//! let mut table = ChainedHashTable::new(10, 0.75).unwrap();
//! table.put(1, "one");
//! table.put(11, "eleven");
//! assert_eq!(table.search(11), Some("eleven"));
//! assert_eq!(table.remove(1), Some("one".to_string()));
//! assert!(!table.contains_key(1));
//! assert!(ChainedHashTable::new(0, 0.75).is_err());
//! ```

#[macro_use]
pub mod error;
pub mod hash;
pub mod options;
pub mod dict;
pub mod logger;

#[cfg(test)]
mod testing;

pub use crate::dict::{ChainedHashTable, Dict, HtDict};
pub use crate::error::{Result, TableError};
pub use crate::hash::{BucketHasher, ModuloHasher, Xxh3Hasher};
pub use crate::options::TableOptions;
