pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::configure;
pub use models::Transaction;
pub use service::{TransactionService, TransactionStore};
