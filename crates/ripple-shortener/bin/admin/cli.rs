use clap::{Parser, Subcommand};
use ripple_telemetry::LogFormat;
use std::path::PathBuf;

pub const MAPPINGS_PATH_ENV: &str = "RIPPLE_MAPPINGS_PATH";
pub const MAX_ATTEMPTS_ENV: &str = "RIPPLE_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "RIPPLE_LOG_FORMAT";

pub const DEFAULT_MAPPINGS_PATH: &str = "url_mappings.json";

#[derive(Debug, Parser)]
#[command(name = "shortener", about = "Manage the /ln/<code> short-link table")]
pub struct CLI {
    /// JSON file holding the short-link table.
    #[arg(long, env = MAPPINGS_PATH_ENV, default_value = DEFAULT_MAPPINGS_PATH)]
    pub mappings: PathBuf,

    /// Random draws before giving up on finding a free code.
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = ripple_shortener::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    #[arg(long, env = LOG_FORMAT_ENV, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Allocate a short code for URL and save it.
    Add {
        /// The URL to shorten, e.g. https://www.example.com
        url: String,
    },
    /// Print every short link in the table.
    List,
}
