//! Loads transactions and the balance from the finance API and decorates them for display.

use time::OffsetDateTime;
use time_tz::Tz;

use crate::{
    api::{ApiError, TransactionApi},
    format::{format_currency, format_date},
    transaction::{Balance, Category, Transaction, TransactionType},
};

/// A transaction with its value and date formatted for display.
///
/// The formatted fields can only be derived from the source fields through
/// [DisplayTransaction::new], so the two always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransaction {
    id: String,
    title: String,
    value: f64,
    formatted_value: String,
    formatted_date: String,
    type_: TransactionType,
    category: Category,
    created_at: OffsetDateTime,
}

impl DisplayTransaction {
    /// Decorate `transaction`, formatting its date in `timezone`.
    pub fn new(transaction: Transaction, timezone: &Tz) -> Self {
        Self {
            formatted_value: format_currency(transaction.value),
            formatted_date: format_date(transaction.created_at, timezone),
            id: transaction.id,
            title: transaction.title,
            value: transaction.value,
            type_: transaction.type_,
            category: transaction.category,
            created_at: transaction.created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn formatted_value(&self) -> &str {
        &self.formatted_value
    }

    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    pub fn type_(&self) -> TransactionType {
        self.type_
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

/// The income, outcome and total computed by the finance API, formatted as currency.
///
/// The default is the empty state shown before anything has been loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl From<Balance> for FormattedBalance {
    fn from(balance: Balance) -> Self {
        Self {
            income: format_currency(balance.income),
            outcome: format_currency(balance.outcome),
            total: format_currency(balance.total),
        }
    }
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub transactions: Vec<DisplayTransaction>,
    pub balance: FormattedBalance,
}

/// Fetch the transactions and balance with a single request to `api`.
///
/// Dates are formatted in `timezone`. The list and balance are built from
/// scratch on every call.
///
/// # Errors
/// Returns the [ApiError] from the request; nothing is partially loaded.
pub async fn load_dashboard(
    api: &dyn TransactionApi,
    timezone: &Tz,
) -> Result<DashboardData, ApiError> {
    let response = api.list_transactions().await?;

    tracing::debug!(
        "loaded {} transactions from the finance API",
        response.transactions.len()
    );

    let transactions = response
        .transactions
        .into_iter()
        .map(|transaction| DisplayTransaction::new(transaction, timezone))
        .collect();

    Ok(DashboardData {
        transactions,
        balance: response.balance.into(),
    })
}
