use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the global `env_logger` once. `RUST_LOG` overrides the defaults.
pub fn initialize_logger() {
  INIT.call_once(|| {
    let mut builder = Builder::new();

    builder
      .filter_level(LevelFilter::Info)
      .filter_module("chaintable::dict", LevelFilter::Info)
      .format_timestamp_millis()
      .parse_default_env();

    // Another logger may already be installed, e.g. by a test harness.
    let _ = builder.try_init();
  });
}
