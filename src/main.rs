use std::path::PathBuf;

use clap::Parser;

use rephrase::config::Config;
use rephrase::{logging, ui};

/// Terminal client for a local paraphrasing service.
#[derive(Debug, Parser)]
#[command(name = "rephrase", version, about)]
struct Args {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the paraphrase server (overrides the config file).
    #[arg(long)]
    server: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    config.validate()?;

    ui::runtime::run(config)?;
    Ok(())
}
