//! Logging setup for the `trino-type` binary.
//!
//! Off unless `TRINO_TYPES_LOG` or `RUST_LOG` is set. Spans from the parser's
//! recursive descent nest, so output goes through a hierarchical layer on
//! stderr:
//!
//! ```text
//! TRINO_TYPES_LOG=trino_parse=trace trino-type 'map(varchar, foo)'
//! ```

use std::sync::Once;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "TRINO_TYPES_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var(LOG_ENV) {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);

        // Another subscriber may already be installed (tests, embedding).
        let _ = tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init();
    });
}
