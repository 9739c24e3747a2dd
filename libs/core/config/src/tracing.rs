//! Log and error-report setup for the blog binaries.
//!
//! `RUST_LOG` wins over the per-environment defaults below. Production logs
//! are flattened JSON lines; development logs are pretty-printed.

use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

const PRODUCTION_DIRECTIVES: &str = "info,tower_http=info,sea_orm=warn";
const DEVELOPMENT_DIRECTIVES: &str =
    "debug,blog_api=trace,seed=trace,tower_http=debug,sea_orm=info";

/// Install color-eyre: error location shown, environment section hidden.
///
/// Call first in `main`. A second install is ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is unset or unparsable.
pub fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_DIRECTIVES
    } else {
        DEVELOPMENT_DIRECTIVES
    }
}

fn env_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)))
}

/// Install the global subscriber, with an `ErrorLayer` so eyre reports carry
/// span traces.
///
/// Later calls keep the first subscriber.
pub fn init_tracing(environment: &Environment) {
    let filter = env_filter(environment);

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized"),
    }
}
