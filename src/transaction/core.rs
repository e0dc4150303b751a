//! The transaction and balance models exchanged with the finance API.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received, e.g., a salary.
    Income,
    /// Money spent, e.g., groceries.
    Outcome,
}

impl TransactionType {
    /// The value used for the type in forms, CSS classes and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "outcome" => Ok(TransactionType::Outcome),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category a transaction is filed under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub title: String,
}

/// A transaction as returned by the finance API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the API.
    pub id: String,
    /// Short text describing the transaction.
    pub title: String,
    /// The amount of money, always positive. The direction is given by `type_`.
    pub value: f64,
    /// Whether the transaction is income or an outcome.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    pub category: Category,
    /// When the transaction was recorded by the API.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The totals computed by the finance API over all transactions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Balance {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

/// The body of the response to listing transactions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

/// The payload for creating a transaction through the finance API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub title: String,
    #[serde(rename = "type")]
    pub type_: TransactionType,
    pub value: f64,
    /// The title of the category. The API creates the category if it does not exist.
    pub category: String,
}
