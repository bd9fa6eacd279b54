pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::configure;
pub use models::Category;
pub use service::{get_category_by_id, CategoryService, CategoryStore};
