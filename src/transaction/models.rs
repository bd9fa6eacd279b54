use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::store::Record;

/// A JSON number counts as present only when it is non-zero.
pub(crate) fn is_nonzero(amount: &Number) -> bool {
    amount.as_f64().is_some_and(|value| value != 0.0)
}

/// Transaction record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Transaction {
    /// Transaction identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Transaction date, as sent by the client
    #[schema(example = "2024-09-01")]
    pub date: String,
    /// "income" or "expense" by convention; not enforced
    #[serde(rename = "type")]
    #[schema(example = "income")]
    pub transaction_type: String,
    /// Amount, kept exactly as the client sent it (integer or decimal)
    #[schema(value_type = f64, example = 5000)]
    pub amount: Number,
    /// Free-form category label, not linked to the category resource
    #[schema(example = "salary")]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Monthly salary")]
    pub description: Option<String>,
}

impl Record for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}

pub fn fixtures() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            date: "2024-09-01".to_string(),
            transaction_type: "income".to_string(),
            amount: Number::from(5000),
            category: "salary".to_string(),
            description: Some("Monthly salary".to_string()),
        },
        Transaction {
            id: 2,
            date: "2024-09-02".to_string(),
            transaction_type: "expense".to_string(),
            amount: Number::from(1500),
            category: "food".to_string(),
            description: Some("Grocery shopping".to_string()),
        },
    ]
}

/// Request body for creating a transaction
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTransactionDto {
    #[validate(required, length(min = 1))]
    #[schema(example = "2024-09-10")]
    pub date: Option<String>,

    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    #[schema(example = "income")]
    pub transaction_type: Option<String>,

    /// Must be non-zero
    #[schema(value_type = Option<f64>, example = 2000)]
    pub amount: Option<Number>,

    #[validate(required, length(min = 1))]
    #[schema(example = "bonus")]
    pub category: Option<String>,

    /// Optional; stored as sent, even when empty
    #[schema(example = "Bonus payment")]
    pub description: Option<String>,
}

impl CreateTransactionDto {
    /// Validate that amount is present and non-zero
    pub fn validate_amount(&self) -> Result<(), ValidationError> {
        match &self.amount {
            Some(amount) if is_nonzero(amount) => Ok(()),
            _ => Err(ValidationError::new("amount_required")),
        }
    }
}

/// Request body for updating a transaction (PUT - empty, zero or missing fields are left unchanged)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTransactionDto {
    pub date: Option<String>,

    #[serde(rename = "type")]
    pub transaction_type: Option<String>,

    #[schema(value_type = Option<f64>)]
    pub amount: Option<Number>,

    pub category: Option<String>,

    pub description: Option<String>,
}

impl UpdateTransactionDto {
    pub fn apply_to(self, transaction: &mut Transaction) {
        if let Some(date) = self.date.filter(|v| !v.is_empty()) {
            transaction.date = date;
        }
        if let Some(transaction_type) = self.transaction_type.filter(|v| !v.is_empty()) {
            transaction.transaction_type = transaction_type;
        }
        if let Some(amount) = self.amount.filter(is_nonzero) {
            transaction.amount = amount;
        }
        if let Some(category) = self.category.filter(|v| !v.is_empty()) {
            transaction.category = category;
        }
        if let Some(description) = self.description.filter(|v| !v.is_empty()) {
            transaction.description = Some(description);
        }
    }
}
