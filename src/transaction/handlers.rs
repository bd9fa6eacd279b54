use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::debug;
use validator::Validate;

use crate::errors::{AppError, ErrorResponse, MessageResponse};
use crate::extractors::RecordId;

use super::models::{CreateTransactionDto, Transaction, UpdateTransactionDto};
use super::service::{TransactionService, TransactionStore, ERROR_KEY};

/// Mounts the transaction routes under `/transaction`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/transaction")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                debug!("Rejected transaction body: {err}");
                AppError::invalid_body(ERROR_KEY).into()
            }))
            .service(list_transactions)
            .service(create_transaction)
            .service(get_transaction)
            .service(update_transaction)
            .service(delete_transaction),
    );
}

/// GET /transaction - List all transactions
#[utoipa::path(
    get,
    path = "/transaction",
    tag = "Transactions",
    responses(
        (status = 200, description = "All transactions in insertion order", body = Vec<Transaction>)
    )
)]
#[get("")]
pub async fn list_transactions(
    store: web::Data<TransactionStore>,
) -> Result<HttpResponse, AppError> {
    let transactions = TransactionService::list_transactions(store.get_ref()).await;

    Ok(HttpResponse::Ok().json(transactions))
}

/// GET /transaction/{id} - Get a specific transaction by ID
///
/// An id that is not a number is answered with 404, not 400.
#[utoipa::path(
    get,
    path = "/transaction/{id}",
    tag = "Transactions",
    params(("id" = String, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "Transaction details", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
#[get("/{id}")]
pub async fn get_transaction(
    store: web::Data<TransactionStore>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    let transaction = TransactionService::get_transaction(store.get_ref(), id.value).await?;

    Ok(HttpResponse::Ok().json(transaction))
}

/// POST /transaction - Create a new transaction
#[utoipa::path(
    post,
    path = "/transaction",
    tag = "Transactions",
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Transaction created", body = Transaction),
        (status = 400, description = "Missing required fields", body = ErrorResponse)
    )
)]
#[post("")]
pub async fn create_transaction(
    store: web::Data<TransactionStore>,
    body: web::Json<CreateTransactionDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|_| AppError::missing_fields(ERROR_KEY))?;
    body.validate_amount()
        .map_err(|_| AppError::missing_fields(ERROR_KEY))?;

    let transaction =
        TransactionService::create_transaction(store.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(transaction))
}

/// PUT /transaction/{id} - Update a transaction
#[utoipa::path(
    put,
    path = "/transaction/{id}",
    tag = "Transactions",
    params(("id" = String, Path, description = "Transaction id")),
    request_body = UpdateTransactionDto,
    responses(
        (status = 200, description = "Transaction updated", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
#[put("/{id}")]
pub async fn update_transaction(
    store: web::Data<TransactionStore>,
    id: RecordId,
    body: web::Json<UpdateTransactionDto>,
) -> Result<HttpResponse, AppError> {
    let transaction =
        TransactionService::update_transaction(store.get_ref(), id.value, body.into_inner())
            .await?;

    Ok(HttpResponse::Ok().json(transaction))
}

/// DELETE /transaction/{id} - Delete a transaction
#[utoipa::path(
    delete,
    path = "/transaction/{id}",
    tag = "Transactions",
    params(("id" = String, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "Transaction deleted", body = MessageResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
#[delete("/{id}")]
pub async fn delete_transaction(
    store: web::Data<TransactionStore>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    TransactionService::delete_transaction(store.get_ref(), id.value).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Transaction deleted")))
}
