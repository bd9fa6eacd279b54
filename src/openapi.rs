use utoipa::OpenApi;

use crate::category::models::{Category, CreateCategoryDto, UpdateCategoryDto};
use crate::errors::{ErrorResponse, MessageResponse};
use crate::transaction::models::{CreateTransactionDto, Transaction, UpdateTransactionDto};
use crate::user::models::{CreateUserDto, UpdateUserDto, User};

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kakeibo API",
        version = "0.1.0",
        description = "Household finance tracker: users, transactions and categories"
    ),
    servers(
        (url = "http://localhost:4000", description = "Development server"),
    ),
    tags(
        (name = "Health", description = "Greeting and health check"),
        (name = "Users", description = "User management"),
        (name = "Transactions", description = "Income and expense records"),
        (name = "Categories", description = "Transaction categories")
    ),
    paths(
        crate::app::index,
        crate::app::health_check,
        // User endpoints
        crate::user::handlers::list_users,
        crate::user::handlers::get_user,
        crate::user::handlers::create_user,
        crate::user::handlers::update_user,
        crate::user::handlers::delete_user,
        // Transaction endpoints
        crate::transaction::handlers::list_transactions,
        crate::transaction::handlers::get_transaction,
        crate::transaction::handlers::create_transaction,
        crate::transaction::handlers::update_transaction,
        crate::transaction::handlers::delete_transaction,
        // Category endpoints
        crate::category::handlers::list_categories,
        crate::category::handlers::get_category,
        crate::category::handlers::create_category,
        crate::category::handlers::update_category,
        crate::category::handlers::delete_category,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            User,
            CreateUserDto,
            UpdateUserDto,
            Transaction,
            CreateTransactionDto,
            UpdateTransactionDto,
            Category,
            CreateCategoryDto,
            UpdateCategoryDto,
        )
    )
)]
pub struct ApiDoc;
