use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sea_orm=warn,sqlx=warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a compact stdout subscriber.
/// - Respects `RUST_LOG` if set
/// - Keeps SeaORM/sqlx statement logging at `warn` unless asked for
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Install a JSON subscriber for machine-parsed logs.
/// Handlers under `server::routes` log at `debug` by default.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter("info,server::routes=debug,sea_orm=warn,sqlx=warn"))
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the subscriber by name: `json` or anything else for compact output.
pub fn init_logging(format: &str) {
    match format {
        "json" => init_logging_json(),
        _ => init_logging_default(),
    }
}
