//! Service-category catalog writes for the admin dashboard.

pub mod domain;
pub mod repository;
pub mod service;
