use super::{NOT_FOUND, UNKNOWN};
use crate::state::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, HeaderName, StatusCode};
use std::net::SocketAddr;

const README: &str = "\
/          - Returns the client's IP address.
/agent     - Returns the client's user agent.
/headers   - Returns the request headers, one per line.
/health    - Returns service status and the number of short links as JSON.
/ln/<code> - Redirects to the URL stored under a short code.
/readme    - Returns this readme message.
";

/// Picks the client address: the edge-supplied header first (first entry of
/// a comma separated list), then the TCP peer.
fn client_ip(header: &HeaderName, request: &Request) -> Option<String> {
    let forwarded = request
        .headers()
        .get(header)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

pub async fn client_ip_handler(State(state): State<AppState>, request: Request) -> String {
    let ip = client_ip(state.client_ip_header(), &request);
    format!("{}\n", ip.as_deref().unwrap_or(UNKNOWN))
}

pub async fn agent_handler(headers: HeaderMap) -> String {
    let agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(UNKNOWN);
    format!("{}\n", agent)
}

pub async fn headers_handler(headers: HeaderMap) -> String {
    let mut lines: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes()))
        })
        .collect();
    lines.sort();

    lines.iter().map(|line| format!("{line}\n")).collect()
}

pub async fn readme_handler() -> &'static str {
    README
}

pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND)
}
