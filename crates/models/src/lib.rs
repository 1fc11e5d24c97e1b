pub mod errors;
pub mod db;
pub mod customer;
pub mod location;
pub mod service_category;
