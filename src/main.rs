use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use signal_probe::{SmokeTestRunner, cli::Cli, init_tracing};

fn main() -> Result<()> {
    init_tracing();

    let config = Cli::parse().into_config();
    let runner = SmokeTestRunner::new(config).context("failed to start async runtime")?;

    let stdout = io::stdout();
    runner.run(&mut stdout.lock())?;
    Ok(())
}
