//! Collections tour entry point.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use collections_tour::config::{Cli, TourConfig};
use collections_tour::tour;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,setwise=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TourConfig::try_from(Cli::parse()).context("invalid tour configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    tour::run(&config, &mut out).context("failed to write the tour")?;
    out.flush().context("failed to flush stdout")?;

    tracing::info!("tour finished");
    Ok(())
}
