//! A [TransactionApi] backed by HTTP requests to the finance API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;

use crate::{
    api::{ApiError, TransactionApi},
    transaction::{NewTransaction, TransactionsResponse},
};

const TRANSACTIONS_PATH: &str = "transactions";

/// Talks to the finance API over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    client: Client,
    transactions_url: Url,
}

/// The body the API sends along with an error status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpTransactionApi {
    /// Create a client for the API served at `base_url`, e.g. "http://localhost:3333".
    ///
    /// Requests that take longer than `timeout` are abandoned.
    ///
    /// # Errors
    /// Returns [ApiError::InvalidUrl] if `base_url` is not an absolute HTTP(S) URL,
    /// or [ApiError::Unreachable] if the HTTP client could not be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let transactions_url = transactions_url(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ApiError::Unreachable(error.to_string()))?;

        Ok(Self {
            client,
            transactions_url,
        })
    }
}

#[async_trait]
impl TransactionApi for HttpTransactionApi {
    async fn list_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        tracing::debug!("GET {}", self.transactions_url);

        let response = self
            .client
            .get(self.transactions_url.clone())
            .send()
            .await
            .map_err(|error| ApiError::Unreachable(error.to_string()))?;

        let response = check_status(response).await?;

        response
            .json::<TransactionsResponse>()
            .await
            .map_err(|error| ApiError::InvalidResponse(error.to_string()))
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), ApiError> {
        tracing::debug!("POST {} with {transaction:?}", self.transactions_url);

        let response = self
            .client
            .post(self.transactions_url.clone())
            .json(transaction)
            .send()
            .await
            .map_err(|error| ApiError::Unreachable(error.to_string()))?;

        check_status(response).await?;

        Ok(())
    }
}

/// Build the URL of the transactions resource under `base_url`.
///
/// A path in the base URL is kept, so "http://host/api" gives
/// "http://host/api/transactions".
fn transactions_url(base_url: &str) -> Result<Url, ApiError> {
    let invalid_url = || ApiError::InvalidUrl(base_url.to_owned());

    let mut base = Url::parse(base_url).map_err(|_| invalid_url())?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid_url());
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(TRANSACTIONS_PATH).map_err(|_| invalid_url())
}

/// Turn a non-success response into [ApiError::Rejected], keeping the reason from the body.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);

    tracing::warn!("finance API responded with {status}: {message:?}");

    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}
