use axum::{extract::{rejection::QueryRejection, Path, Query, State}, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use service::errors::ValidationKind;
use service::listing::{ListingQuery, Page, Record};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub data: Vec<Record>,
    pub pagination: PaginationMeta,
}

impl From<Page<Record>> for ListingResponse {
    fn from(page: Page<Record>) -> Self {
        Self {
            pagination: PaginationMeta {
                page: page.page,
                page_size: page.page_size,
                total: page.total,
                total_pages: page.total_pages,
            },
            data: page.items,
        }
    }
}

/// List one page of a collection, optionally filtered by `search`.
#[utoipa::path(
    get,
    path = "/api/{resource}",
    tag = "listing",
    params(
        ("resource" = String, Path, description = "customers | locations | service-categories"),
        ("page" = Option<u64>, Query, description = "1-based page, default 1"),
        ("pageSize" = Option<u64>, Query, description = "items per page, default 20"),
        ("search" = Option<String>, Query, description = "case-insensitive substring over the collection's search fields"),
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ListingResponseDoc),
        (status = 422, description = "Invalid resource, page, pageSize or query string", body = crate::openapi::ErrorDoc),
        (status = 502, description = "Record store unavailable", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn list_records(
    State(state): State<ServerState>,
    Path(resource): Path<String>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<ListingResponse>, JsonApiError> {
    let Query(query) = query.map_err(|e| {
        JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, ValidationKind::InvalidQuery.code(), e.body_text())
    })?;
    let request = query.into_request(resource)?;
    let page = state.listing.list(request).await?;
    info!(page = page.page, total = page.total, returned = page.items.len(), "listed records");
    Ok(Json(page.into()))
}
