mod cli;
mod report;

use crate::cli::{Command, CLI};
use anyhow::Context;
use clap::Parser;
use ripple_generator::RandomHexGenerator;
use ripple_shortener::{Allocator, AllocatorSettings, ShortenerService};
use ripple_storage::JsonFileRepository;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    ripple_telemetry::init(config.log_format)?;

    debug!(
        mappings = %config.mappings.display(),
        max_attempts = config.max_attempts,
        "starting shortener"
    );

    let settings = AllocatorSettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let service = ShortenerService::new(
        JsonFileRepository::new(&config.mappings),
        Allocator::with_settings(RandomHexGenerator::new(), settings),
    );

    match config.command {
        Command::Add { url } => {
            let shortened = service
                .shorten(url)
                .await
                .with_context(|| format!("adding URL to {}", config.mappings.display()))?;
            print!("{}", report::added(&shortened));
        }
        Command::List => {
            let mappings = service
                .list()
                .await
                .with_context(|| format!("reading {}", config.mappings.display()))?;
            print!("{}", report::listing(&mappings));
        }
    }

    Ok(())
}
