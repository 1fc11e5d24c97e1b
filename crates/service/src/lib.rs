//! Service layer for the laundry admin dashboard.
//! - Generic paginated listing over the dashboard collections.
//! - Service-category catalog writes with validation.
//! - Clear error types separating bad input from store failures.

pub mod errors;
pub mod pagination;
pub mod listing;
pub mod catalog;
#[cfg(test)]
pub mod test_support;
