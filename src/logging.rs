use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a console subscriber filtered at `level`; `RUST_LOG` takes precedence.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_setup_does_not_panic() {
        setup_logging("debug");
        setup_logging("info");
        tracing::debug!("logging initialised twice");
    }
}
