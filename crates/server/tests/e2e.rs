use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::{AdminAuthConfig, ServerState};
use service::catalog::{repository::mock::MockServiceCategoryRepository, service::CatalogService};
use service::errors::StoreError;
use service::listing::memory::MemoryRecordStore;
use service::listing::{FilterPredicate, ListingService, Record, RecordStore, Resource, ResourceSpec, Window};
use service::pagination::PageLimits;

const ADMIN_KEY: &str = "test-admin-key";

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
    categories: Arc<MockServiceCategoryRepository>,
}

fn seeded_store() -> Arc<MemoryRecordStore> {
    let store = Arc::new(MemoryRecordStore::new());
    for i in 0..25 {
        store.insert(Resource::Customers, json!({
            "id": format!("{i:04}"),
            "name": if i == 3 { "Mariana Silva".to_string() } else { format!("Customer {i}") },
            "phone": format!("+1555{i:04}"),
            "email": if i == 7 { "ana@example.com".to_string() } else { format!("c{i}@example.com") },
            "address": if i == 9 { "Ana avenue".to_string() } else { "Main street".to_string() },
            "created_at": format!("2024-01-01T00:00:{i:02}Z"),
        }));
    }
    store.insert(Resource::Locations, json!({
        "id": "loc-1", "name": "Downtown", "address": "1 Main st", "city": "Lisbon",
        "created_at": "2024-01-01T00:00:00Z",
    }));
    store
}

async fn start_server_with(store: Arc<dyn RecordStore>, admin_key: Option<&str>) -> anyhow::Result<TestApp> {
    let categories = Arc::new(MockServiceCategoryRepository::default());
    let state = ServerState {
        listing: Arc::new(ListingService::new(store, PageLimits::default(), Duration::from_millis(200))),
        catalog: Arc::new(CatalogService::new(categories.clone())),
        admin: AdminAuthConfig { api_key: admin_key.map(str::to_string) },
    };

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, categories })
}

async fn start_server() -> anyhow::Result<TestApp> {
    start_server_with(seeded_store(), Some(ADMIN_KEY)).await
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_second_page_of_customers() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/customers?page=2&pageSize=20", app.base_url))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["pagination"], json!({"page": 2, "pageSize": 20, "total": 25, "totalPages": 2}));
    // newest first: page 2 ends with the oldest customer
    assert_eq!(body["data"][4]["id"], "0000");
    Ok(())
}

#[tokio::test]
async fn e2e_defaults_apply_without_params() -> anyhow::Result<()> {
    let app = start_server().await?;
    let body = client().get(format!("{}/api/customers", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["pageSize"], 20);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(20));
    Ok(())
}

#[tokio::test]
async fn e2e_zero_page_size_is_422() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/customers?page=1&pageSize=0", app.base_url))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "invalid_page_size");
    assert!(body["message"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_bad_page_values_are_422() -> anyhow::Result<()> {
    let app = start_server().await?;
    for q in ["page=0", "page=-3", "page=two"] {
        let res = client().get(format!("{}/api/customers?{q}", app.base_url)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY, "query {q}");
        assert_eq!(res.json::<Value>().await?["error"], "invalid_page");
    }
    let res = client().get(format!("{}/api/customers?pageSize=101", app.base_url)).send().await?;
    assert_eq!(res.json::<Value>().await?["error"], "invalid_page_size");
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_resource_is_422() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api/orders", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.json::<Value>().await?["error"], "unknown_resource");
    Ok(())
}

#[tokio::test]
async fn e2e_search_uses_allow_listed_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let body = client()
        .get(format!("{}/api/customers?search=ANA", app.base_url))
        .send().await?
        .json::<Value>().await?;
    let ids: Vec<&str> = body["data"].as_array().into_iter().flatten().filter_map(|r| r["id"].as_str()).collect();
    // 0003 by name, 0007 by email; 0009 only matches on address
    assert_eq!(ids, ["0007", "0003"]);
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["totalPages"], 1);
    Ok(())
}

#[tokio::test]
async fn e2e_page_past_end_is_empty() -> anyhow::Result<()> {
    let app = start_server().await?;
    let body = client()
        .get(format!("{}/api/locations?page=5", app.base_url))
        .send().await?
        .json::<Value>().await?;
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["pagination"]["totalPages"], 1);
    Ok(())
}

struct HangingStore;

#[async_trait]
impl RecordStore for HangingStore {
    async fn count(&self, _: &ResourceSpec, _: &[FilterPredicate]) -> Result<u64, StoreError> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(0)
    }
    async fn select(&self, _: &ResourceSpec, _: &[FilterPredicate], _: Window) -> Result<Vec<Record>, StoreError> {
        Ok(vec![])
    }
}

#[tokio::test]
async fn e2e_store_timeout_is_502_with_generic_message() -> anyhow::Result<()> {
    let app = start_server_with(Arc::new(HangingStore), Some(ADMIN_KEY)).await?;
    let res = client().get(format!("{}/api/customers", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_GATEWAY);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "store_error");
    assert!(!body["message"].as_str().unwrap_or_default().contains("timed out after"));
    Ok(())
}

#[tokio::test]
async fn e2e_admin_create_requires_key() -> anyhow::Result<()> {
    let app = start_server().await?;
    let url = format!("{}/admin/service-categories", app.base_url);
    let body = json!({"name": "Dry cleaning", "price_cents": 1200});

    let res = client().post(&url).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = client().post(&url).header("X-API-Key", "wrong").json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await?["error"], "unauthorized");

    assert!(app.categories.created().is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_admin_create_validates_and_persists() -> anyhow::Result<()> {
    let app = start_server().await?;
    let url = format!("{}/admin/service-categories", app.base_url);

    let res = client().post(&url).header("X-API-Key", ADMIN_KEY)
        .json(&json!({"name": "  ", "price_cents": 1200}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.json::<Value>().await?["error"], "invalid_body");

    let res = client().post(&url).header("X-API-Key", ADMIN_KEY)
        .json(&json!({"price_cents": 1200}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    let res = client().post(&url).header("X-API-Key", ADMIN_KEY)
        .json(&json!({"name": "Dry cleaning", "description": "suits", "price_cents": 1200}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["name"], "Dry cleaning");
    assert_eq!(created["active"], true);
    assert_eq!(app.categories.created().len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_admin_writes_disabled_without_configured_key() -> anyhow::Result<()> {
    let app = start_server_with(seeded_store(), None).await?;
    let res = client().post(format!("{}/admin/service-categories", app.base_url))
        .header("X-API-Key", "anything")
        .json(&json!({"name": "Ironing", "price_cents": 300}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}
