use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    /// Stable code such as `invalid_page_size`
    pub error: String,
    pub message: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct PaginationDoc {
    pub page: u64,
    pub pageSize: u64,
    pub total: u64,
    pub totalPages: u64,
}

#[derive(ToSchema)]
pub struct ListingResponseDoc {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<serde_json::Value>,
    pub pagination: PaginationDoc,
}

#[derive(ToSchema)]
pub struct ServiceCategoryInputDoc {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub active: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::listing::list_records,
        crate::routes::catalog::create_service_category,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            PaginationDoc,
            ListingResponseDoc,
            ServiceCategoryInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "listing", description = "Paginated dashboard listings"),
        (name = "admin", description = "Dashboard writes"),
    )
)]
pub struct ApiDoc;
