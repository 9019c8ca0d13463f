mod health;
mod link;
mod reflect;

pub use health::health_handler;
pub use link::short_link_handler;
pub use reflect::{
    agent_handler, client_ip_handler, headers_handler, not_found_handler, readme_handler,
};

const UNKNOWN: &str = "Unknown";
const NOT_FOUND: &str = "Not found\n";
