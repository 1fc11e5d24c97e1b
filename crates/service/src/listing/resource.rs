#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Customers,
    Locations,
    ServiceCategories,
}

/// Listing behaviour of one collection.
#[derive(Debug)]
pub struct ResourceSpec {
    pub resource: Resource,
    /// Name used in URLs.
    pub name: &'static str,
    /// The only fields a free-text search may touch.
    pub search_fields: &'static [&'static str],
    /// Sorted descending; ties broken by `id` descending.
    pub sort_key: &'static str,
}

pub const RESOURCES: &[ResourceSpec] = &[
    ResourceSpec {
        resource: Resource::Customers,
        name: "customers",
        search_fields: &["name", "phone", "email"],
        sort_key: "created_at",
    },
    ResourceSpec {
        resource: Resource::Locations,
        name: "locations",
        search_fields: &["name", "address", "city"],
        sort_key: "created_at",
    },
    ResourceSpec {
        resource: Resource::ServiceCategories,
        name: "service-categories",
        search_fields: &["name", "description"],
        sort_key: "created_at",
    },
];

impl Resource {
    /// Resolve a URL name. `service_categories` is accepted as an alias.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        RESOURCES.iter().find(|s| s.name == normalized).map(|s| s.resource)
    }

    pub fn spec(self) -> &'static ResourceSpec {
        // every variant has exactly one row in RESOURCES
        match self {
            Resource::Customers => &RESOURCES[0],
            Resource::Locations => &RESOURCES[1],
            Resource::ServiceCategories => &RESOURCES[2],
        }
    }
}
