use anyhow::Result;
use clap::Parser;
use keycapture::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Routes log::info!() etc. to stderr; --log-level wins over RUST_LOG.
    let log_level = cli.log_level.map(cli::LogLevelArg::to_level_filter);
    keycapture::logging::init_log_bridge(log_level);
    log::info!("Starting keycapture");

    cli::run(cli)
}
