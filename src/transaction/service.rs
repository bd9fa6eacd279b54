use tracing::info;

use super::models::{is_nonzero, CreateTransactionDto, Transaction, UpdateTransactionDto};
use crate::errors::{AppError, ErrorKey};
use crate::store::MemoryStore;

pub type TransactionStore = MemoryStore<Transaction>;

pub(super) const ERROR_KEY: ErrorKey = ErrorKey::Error;

fn not_found() -> AppError {
    AppError::not_found(ERROR_KEY, "Transaction not found")
}

/// Service layer for transaction business logic.
///
/// Ids that do not parse are not an error here: they simply match no
/// transaction.
pub struct TransactionService;

impl TransactionService {
    pub async fn list_transactions(store: &TransactionStore) -> Vec<Transaction> {
        store.list().await
    }

    pub async fn get_transaction(
        store: &TransactionStore,
        id: Option<i64>,
    ) -> Result<Transaction, AppError> {
        let id = id.ok_or_else(not_found)?;
        store.get(id).await.ok_or_else(not_found)
    }

    pub async fn create_transaction(
        store: &TransactionStore,
        dto: CreateTransactionDto,
    ) -> Result<Transaction, AppError> {
        let (Some(date), Some(transaction_type), Some(amount), Some(category)) = (
            dto.date.filter(|v| !v.is_empty()),
            dto.transaction_type.filter(|v| !v.is_empty()),
            dto.amount.filter(is_nonzero),
            dto.category.filter(|v| !v.is_empty()),
        ) else {
            return Err(AppError::missing_fields(ERROR_KEY));
        };
        let description = dto.description;

        let transaction = store
            .insert(|id| Transaction {
                id,
                date,
                transaction_type,
                amount,
                category,
                description,
            })
            .await;

        info!(transaction_id = transaction.id, "Transaction created");
        Ok(transaction)
    }

    pub async fn update_transaction(
        store: &TransactionStore,
        id: Option<i64>,
        dto: UpdateTransactionDto,
    ) -> Result<Transaction, AppError> {
        let id = id.ok_or_else(not_found)?;
        let transaction = store
            .update(id, |transaction| dto.apply_to(transaction))
            .await
            .ok_or_else(not_found)?;

        info!(transaction_id = transaction.id, "Transaction updated");
        Ok(transaction)
    }

    pub async fn delete_transaction(store: &TransactionStore, id: Option<i64>) -> Result<(), AppError> {
        let id = id.ok_or_else(not_found)?;
        store.delete(id).await.ok_or_else(not_found)?;

        info!(transaction_id = id, "Transaction deleted");
        Ok(())
    }
}
