pub mod app;
pub mod category;
pub mod config;
pub mod errors;
pub mod extractors;
pub mod openapi;
pub mod store;
pub mod transaction;
pub mod user;
