use std::io;

use clap::Parser;
use config::AppConfig;
use mode::Mode;
use source::NamedSource;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub mod cli;
pub mod config;
pub mod format;
pub mod list;
pub mod loader;
pub mod mode;
pub mod source;
pub mod stats;
pub mod web;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::info!("version: {}", env!("VERGEN_GIT_SHA"));

    let sources = NamedSource::columns(&config);
    let mode = mode::detect(config.mode);
    tracing::info!("Running in {:?} mode", mode);

    match mode {
        Mode::Cli => cli::run(&sources, io::stdin().lock(), io::stdout().lock()),
        Mode::Web { cgi } => web::run(&sources, cgi, io::stdout().lock()),
    }
}
