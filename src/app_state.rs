//! Implements a struct that holds the state of the REST server.

use std::{sync::Arc, time::Duration};

use crate::{
    Error,
    api::{HttpTransactionApi, SharedTransactionApi, TransactionApi},
    timezone::get_timezone,
};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The finance API that owns the transactions.
    pub api: SharedTransactionApi,

    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that talks to the finance API at `api_url`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    /// Requests to the API that take longer than `request_timeout` are abandoned.
    ///
    /// # Errors
    /// Returns an error if the timezone is unknown or the API URL is invalid.
    pub fn new(
        api_url: &str,
        local_timezone: &str,
        request_timeout: Duration,
    ) -> Result<Self, Error> {
        let api = HttpTransactionApi::new(api_url, request_timeout)?;

        Self::with_api(Arc::new(api), local_timezone)
    }

    /// Create a new [AppState] with any implementation of the finance API.
    ///
    /// # Errors
    /// Returns an error if the timezone is unknown.
    pub fn with_api(
        api: Arc<dyn TransactionApi>,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        if get_timezone(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            api,
            local_timezone: local_timezone.to_owned(),
        })
    }
}
