//! Builds a small table, runs a fixed sequence of puts and removes and logs
//! the resulting state.

use log::info;
use chaintable::logger::initialize_logger;
use chaintable::{ChainedHashTable, Result};

fn main() -> Result<()> {
  initialize_logger();

  let mut table = ChainedHashTable::with_capacity(10)?;

  let steps: &[(i32, Option<&str>)] = &[
    (1, Some("g")),
    (11, Some("m")),
    (21, Some("m")),
    (1, Some("k")),
    (11, None),
    (34, Some("m")),
    (3, Some("m")),
    (7, Some("m")),
    (145, Some("m")),
  ];

  for &(key, value) in steps {
    match value {
      Some(value) => {
        let previous = table.put(key, value);
        info!("put({}, {:?}) -> {:?}", key, value, previous);
      }
      None => {
        let removed = table.remove(key);
        info!("remove({}) -> {:?}", key, removed);
      }
    }
  }

  info!("size={} capacity={} load={:.2}",
        table.size(), table.capacity(), table.current_load());
  info!("chains: {:?}", table.chain_lengths());
  info!("table: {:?}", table);

  Ok(())
}
