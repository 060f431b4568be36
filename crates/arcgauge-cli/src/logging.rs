use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

const APP_NAME: &str = "arcgauge";

/// Installs a stderr subscriber. `RUST_LOG` overrides the default filter.
pub fn initialize(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let env = format!("warn,{APP_NAME}={level}");

    let env_filter = tracing_subscriber::filter::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new(env));

    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_subscriber).try_init()?;

    Ok(())
}
