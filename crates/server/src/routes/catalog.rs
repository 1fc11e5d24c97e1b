use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use tracing::info;

use models::service_category;
use service::catalog::domain::ServiceCategoryInput;
use service::errors::ValidationKind;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Create a service category. Requires `X-API-Key`.
#[utoipa::path(
    post,
    path = "/admin/service-categories",
    tag = "admin",
    request_body = crate::openapi::ServiceCategoryInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 401, description = "Missing or wrong admin key", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid body", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn create_service_category(
    State(state): State<ServerState>,
    payload: Result<Json<ServiceCategoryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<service_category::Model>), JsonApiError> {
    let Json(input) = payload.map_err(|e| {
        JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, ValidationKind::InvalidBody.code(), e.body_text())
    })?;
    let created = state.catalog.create_service_category(input).await?;
    info!(id = %created.id, name = %created.name, "created service category");
    Ok((StatusCode::CREATED, Json(created)))
}
