//! ccopy driver library.
//!
//! Reads a C++ source file, finds classes deriving from the marker base,
//! and writes a copy of the file in which each such class with at least two
//! copy groups gains a copy constructor that copies the groups concurrently.

mod args;
mod driver;
mod error;

use std::sync::Once;

pub use args::{parse_args, Command, Options};
pub use driver::{process_file, process_source, Outcome};
pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber, once, if `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
