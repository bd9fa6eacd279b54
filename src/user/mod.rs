pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::configure;
pub use models::User;
pub use service::{UserService, UserStore};
