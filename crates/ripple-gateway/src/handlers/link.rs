use super::NOT_FOUND;
use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use ripple_redirector::Resolution;

pub async fn short_link_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    match state.redirector().resolve(uri.path()) {
        Resolution::Redirect(target) => {
            let location = HeaderValue::try_from(target.location).map_err(|_| {
                AppError::InvalidRedirectTarget {
                    path: uri.path().to_string(),
                }
            })?;
            Ok((target.status, [(LOCATION, location)]).into_response())
        }
        Resolution::NotFound(code) => {
            Ok((StatusCode::NOT_FOUND, format!("Not found: {}\n", code)).into_response())
        }
        Resolution::Invalid => Ok((StatusCode::NOT_FOUND, NOT_FOUND).into_response()),
    }
}
