//! Logging setup of the binary
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity given on the command line.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(convert_verbosity_to_level(verbosity)),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()?;

    Ok(())
}

fn convert_verbosity_to_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
