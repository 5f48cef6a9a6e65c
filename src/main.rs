use anyhow::Result;
use clap::Parser;
use glyphline::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG applies unless --log-level overrides it
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level.to_level_filter());
    }
    logger.init();

    log::info!("Starting glyphline {}", glyphline::VERSION);

    if let Err(e) = cli::run(cli) {
        eprintln!("glyphline: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
