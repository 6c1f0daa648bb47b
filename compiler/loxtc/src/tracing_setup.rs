use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `LOXT_LOG=loxt_parse=trace`.
const LOG_ENV: &str = "LOXT_LOG";

/// Install the tracing subscriber.
///
/// The filter comes from `LOXT_LOG`, then `RUST_LOG`. With neither set
/// nothing is installed. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(filter) =
            EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .with(filter)
            .init();
    });
}
