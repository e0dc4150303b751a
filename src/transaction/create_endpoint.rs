//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// axum_extra's Form parses with serde_html_form, the same parser the tests use.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    api::SharedTransactionApi,
    transaction::{NewTransaction, TransactionDraft},
};

/// The state needed to create a transaction.
#[derive(Clone)]
pub struct CreateTransactionState {
    /// The finance API that records transactions.
    pub api: SharedTransactionApi,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// A route handler for creating a new transaction.
///
/// On success the client is redirected to the dashboard so that the list and
/// balance are loaded again and the form is cleared. On failure an alert is
/// returned and the form keeps what the user typed.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(draft): Form<TransactionDraft>,
) -> Response {
    let new_transaction = match NewTransaction::try_from(draft) {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::warn!("rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = state.api.create_transaction(&new_transaction).await {
        tracing::error!("could not create transaction: {error}");
        return Error::from(error).into_alert_response();
    }

    tracing::info!(
        "created {} transaction \"{}\"",
        new_transaction.type_,
        new_transaction.title
    );

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
