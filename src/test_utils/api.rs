use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    api::{ApiError, TransactionApi},
    transaction::{
        Balance, Category, NewTransaction, Transaction, TransactionType, TransactionsResponse,
    },
};

/// A [TransactionApi] with canned responses that records the requests it receives.
pub(crate) struct FakeTransactionApi {
    list_result: Result<TransactionsResponse, ApiError>,
    create_result: Result<(), ApiError>,
    list_calls: AtomicUsize,
    created: Mutex<Vec<NewTransaction>>,
}

impl FakeTransactionApi {
    pub(crate) fn with_transactions(transactions: Vec<Transaction>, balance: Balance) -> Self {
        Self {
            list_result: Ok(TransactionsResponse {
                transactions,
                balance,
            }),
            create_result: Ok(()),
            list_calls: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::with_transactions(
            Vec::new(),
            Balance {
                income: 0.0,
                outcome: 0.0,
                total: 0.0,
            },
        )
    }

    pub(crate) fn failing_list(error: ApiError) -> Self {
        Self {
            list_result: Err(error),
            ..Self::empty()
        }
    }

    pub(crate) fn failing_create(error: ApiError) -> Self {
        Self {
            create_result: Err(error),
            ..Self::empty()
        }
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn created(&self) -> Vec<NewTransaction> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionApi for FakeTransactionApi {
    async fn list_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_result.clone()
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(transaction.clone());
        self.create_result.clone()
    }
}

pub(crate) fn transaction(
    id: &str,
    title: &str,
    value: f64,
    type_: TransactionType,
    category: &str,
    created_at: OffsetDateTime,
) -> Transaction {
    Transaction {
        id: id.to_owned(),
        title: title.to_owned(),
        value,
        type_,
        category: Category {
            title: category.to_owned(),
        },
        created_at,
    }
}
