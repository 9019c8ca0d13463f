use std::sync::Arc;

use axum::http::HeaderName;
use ripple_redirector::Redirector;

#[derive(Clone)]
pub struct AppState {
    redirector: Arc<dyn Redirector>,
    client_ip_header: HeaderName,
}

impl AppState {
    pub fn new(redirector: Arc<dyn Redirector>, client_ip_header: HeaderName) -> Self {
        Self {
            redirector,
            client_ip_header,
        }
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    /// Header the edge puts the original client address in.
    pub fn client_ip_header(&self) -> &HeaderName {
        &self.client_ip_header
    }
}
