use serde::Deserialize;

use crate::errors::{ServiceError, ValidationKind};
use crate::pagination::parse_param;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub search: Option<String>,
}

/// A listing call with integer paging parameters. `None` selects the default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    pub resource: String,
    pub filters: ListingFilters,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl ListingRequest {
    pub fn new(resource: impl Into<String>) -> Self {
        Self { resource: resource.into(), filters: ListingFilters::default(), page: None, page_size: None }
    }

    pub fn page(mut self, page: u64) -> Self { self.page = Some(page); self }

    pub fn page_size(mut self, page_size: u64) -> Self { self.page_size = Some(page_size); self }

    pub fn search(mut self, term: impl Into<String>) -> Self { self.filters.search = Some(term.into()); self }
}

/// Query-string form of a listing call, as the transport decodes it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: Option<String>,
    pub search: Option<String>,
}

impl ListingQuery {
    /// Coerce string parameters into a [`ListingRequest`].
    pub fn into_request(self, resource: impl Into<String>) -> Result<ListingRequest, ServiceError> {
        let page = parse_param(self.page.as_deref(), ValidationKind::InvalidPage, "page")?;
        let page_size = parse_param(self.page_size.as_deref(), ValidationKind::InvalidPageSize, "pageSize")?;
        Ok(ListingRequest {
            resource: resource.into(),
            filters: ListingFilters { search: self.search },
            page,
            page_size,
        })
    }
}
