use axum::http::HeaderName;
use clap::Parser;
use ripple_telemetry::LogFormat;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "RIPPLE_GATEWAY_LISTEN_ADDR";
pub const MAPPINGS_PATH_ENV: &str = "RIPPLE_MAPPINGS_PATH";
pub const CLIENT_IP_HEADER_ENV: &str = "RIPPLE_CLIENT_IP_HEADER";
pub const REFRESH_INTERVAL_ENV: &str = "RIPPLE_REFRESH_INTERVAL_SECS";
pub const LOG_FORMAT_ENV: &str = "RIPPLE_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAPPINGS_PATH: &str = "url_mappings.json";
pub const DEFAULT_CLIENT_IP_HEADER: &str = "cf-connecting-ip";

#[derive(Debug, Parser)]
#[command(name = "gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// JSON file holding the short-link table.
    #[arg(long, env = MAPPINGS_PATH_ENV, default_value = DEFAULT_MAPPINGS_PATH)]
    pub mappings: PathBuf,

    /// Request header carrying the original client address.
    #[arg(long, env = CLIENT_IP_HEADER_ENV, default_value = DEFAULT_CLIENT_IP_HEADER)]
    pub client_ip_header: HeaderName,

    /// Reload the short-link table every N seconds. Unset: load once at startup.
    #[arg(long, env = REFRESH_INTERVAL_ENV, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_interval_secs: Option<u64>,

    #[arg(long, env = LOG_FORMAT_ENV, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
