//! Tracing setup for the binary.

use std::sync::Once;

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "LAZYCALC_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber if `LAZYCALC_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Unset or unparsable filter: stay silent
        if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
