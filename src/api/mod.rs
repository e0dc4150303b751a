//! Client side of the remote finance API that owns the transactions.
//!
//! Route handlers talk to the API through the [TransactionApi] trait so that
//! the HTTP client can be swapped for a fake in tests.

mod http;

use std::sync::Arc;

use async_trait::async_trait;

pub use http::HttpTransactionApi;

use crate::transaction::{NewTransaction, TransactionsResponse};

/// A handle to the finance API that can be shared between route handlers.
pub type SharedTransactionApi = Arc<dyn TransactionApi>;

/// The operations the dashboard needs from the finance API.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Get every transaction along with the balance computed by the API.
    async fn list_transactions(&self) -> Result<TransactionsResponse, ApiError>;

    /// Ask the API to record `transaction`.
    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), ApiError>;
}

/// The errors that may occur when talking to the finance API.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The base URL could not be combined with an API path.
    #[error("invalid API URL \"{0}\"")]
    InvalidUrl(String),

    /// The request could not be sent or timed out before a response arrived.
    #[error("could not reach the finance API: {0}")]
    Unreachable(String),

    /// The API responded with a non-success status code.
    ///
    /// `message` holds the reason given in the response body, if any.
    #[error("the finance API rejected the request with status {status}: {message:?}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("the finance API sent an invalid response: {0}")]
    InvalidResponse(String),
}
