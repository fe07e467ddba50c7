//! unitconv: convert between units of distance, weight, temperature, time,
//! speed and data.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use unitconv_lib::{app, config, errors};

fn init_tracing(config: &config::AppConfig) {
    // The alternate screen would be corrupted by log lines
    if config.tui && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let config = config::AppConfig::parse();
    init_tracing(&config);

    if let Err(err) = app::run(&config) {
        std::process::exit(errors::report(&err));
    }
}
