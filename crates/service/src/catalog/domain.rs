use serde::Deserialize;

fn default_active() -> bool { true }

/// Request body for creating a service category.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceCategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default = "default_active")]
    pub active: bool,
}
