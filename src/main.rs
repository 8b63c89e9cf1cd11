use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use quizterm::args::Cli;
use quizterm::config::Config;
use quizterm::logging::init_tracing;
use quizterm::trivia::{OpenTdbClient, CATEGORIES};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_categories {
        for category in CATEGORIES {
            println!("{:>3}  {}", category.id, category.name);
        }
        return Ok(());
    }

    let config = Config::load_from(&cli.config_path())?;
    let request = cli.load_request(&config)?;

    let log_path = cli.log_path(&config);
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting quizterm");

    let provider = OpenTdbClient::new(&config.provider)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    quizterm::ui::run(runtime.handle().clone(), Arc::new(provider), request)?;
    tracing::info!("Exiting");
    Ok(())
}
