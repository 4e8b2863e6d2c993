//! Logging for the verifier binary.
//!
//! Stdout carries the JSON verdict stream, so every log line goes to stderr.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Environment;

/// Level used when `RUST_LOG` is unset.
///
/// Development logs every verdict at DEBUG; production keeps the session
/// summary and skipped submissions only.
fn default_directive(env: &Environment) -> &'static str {
    match env {
        Environment::Development => "debug",
        Environment::Production => "info",
    }
}

/// Install the global subscriber: compact text in development, flat JSON
/// objects in production. `RUST_LOG` overrides the level in both.
pub fn init_tracing(env: &Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    let base = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let output: Box<dyn Layer<Registry> + Send + Sync> = match env {
        Environment::Development => base.compact().boxed(),
        Environment::Production => base.json().flatten_event(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(output.with_filter(env_filter))
        .init();

    tracing::debug!(environment = ?env, "Tracing initialized");
}
