use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    agent_handler, client_ip_handler, headers_handler, health_handler, not_found_handler,
    readme_handler, short_link_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        // unsupported methods on known paths get the same 404 as unknown paths
        Router::new()
            .route("/", get(client_ip_handler).fallback(not_found_handler))
            .route("/agent", get(agent_handler).fallback(not_found_handler))
            .route("/headers", get(headers_handler).fallback(not_found_handler))
            .route("/readme", get(readme_handler).fallback(not_found_handler))
            .route("/health", get(health_handler).fallback(not_found_handler))
            .route(
                "/ln/{code}",
                get(short_link_handler).fallback(not_found_handler),
            )
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
