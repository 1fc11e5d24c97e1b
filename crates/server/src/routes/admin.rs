use axum::{extract::{Request, State}, middleware::Next, response::Response};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Constant-time for equal-length keys; only the length can leak.
fn key_matches(provided: &str, expected: &str) -> bool {
    !provided.is_empty() && bool::from(provided.as_bytes().ct_eq(expected.as_bytes()))
}

/// Middleware: require the configured admin key in `X-API-Key`.
pub async fn require_admin_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let Some(expected) = state.admin.api_key.as_deref() else {
        warn!(path = %req.uri().path(), "admin write rejected: no admin key configured");
        return Err(JsonApiError::unauthorized("admin writes are disabled"));
    };
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim);

    match provided {
        Some(k) if key_matches(k, expected) => Ok(next.run(req).await),
        Some(_) => Err(JsonApiError::unauthorized("invalid admin key")),
        None => Err(JsonApiError::unauthorized("missing X-API-Key header")),
    }
}
