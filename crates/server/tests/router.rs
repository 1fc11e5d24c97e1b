use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes;
use server::state::{AdminAuthConfig, ServerState};
use service::catalog::{repository::mock::MockServiceCategoryRepository, service::CatalogService};
use service::listing::memory::MemoryRecordStore;
use service::listing::{ListingService, Resource};
use service::pagination::PageLimits;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app(store: Arc<MemoryRecordStore>) -> axum::Router {
    let state = ServerState {
        listing: Arc::new(ListingService::new(store, PageLimits { default_page_size: 2, max_page_size: 3 }, Duration::from_secs(1))),
        catalog: Arc::new(CatalogService::new(Arc::new(MockServiceCategoryRepository::default()))),
        admin: AdminAuthConfig { api_key: None },
    };
    routes::build_router(state, cors())
}

async fn get_json(app: axum::Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let res = app.oneshot(Request::builder().uri(uri).body(Body::empty())?).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn configured_limits_drive_defaults_and_bounds() -> anyhow::Result<()> {
    let store = Arc::new(MemoryRecordStore::new());
    for i in 0..5 {
        store.insert(Resource::ServiceCategories, json!({"id": i, "name": format!("Service {i}"), "created_at": format!("2024-01-0{}T00:00:00Z", i + 1)}));
    }

    let (status, body) = get_json(build_app(store.clone()), "/api/service-categories").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"], json!({"page": 1, "pageSize": 2, "total": 5, "totalPages": 3}));

    let (status, body) = get_json(build_app(store.clone()), "/api/service_categories?pageSize=4").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_page_size");
    Ok(())
}

#[tokio::test]
async fn wildcard_search_matches_literally() -> anyhow::Result<()> {
    let store = Arc::new(MemoryRecordStore::new());
    store.insert(Resource::ServiceCategories, json!({"id": 1, "name": "Wash 50% off", "created_at": "2024-01-01T00:00:00Z"}));
    store.insert(Resource::ServiceCategories, json!({"id": 2, "name": "Wash and fold", "created_at": "2024-01-02T00:00:00Z"}));

    let (_, body) = get_json(build_app(store), "/api/service-categories?search=%25").await?;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["id"], 1);
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let (status, body) = get_json(build_app(Arc::new(MemoryRecordStore::new())), "/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/{resource}"].is_object());
    Ok(())
}

#[tokio::test]
async fn malformed_query_string_is_a_json_422() -> anyhow::Result<()> {
    let app = build_app(Arc::new(MemoryRecordStore::new()));
    let res = app.oneshot(Request::builder().uri("/api/customers?page=1&page=2").body(Body::empty())?).await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let content_type = res.headers().get(axum::http::header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_string();
    assert!(content_type.starts_with("application/json"));
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"], "invalid_query");
    assert!(body["message"].as_str().unwrap_or_default().contains("page"));
    Ok(())
}
