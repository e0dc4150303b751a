//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, api::ApiError, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to the finance API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The title of a new transaction was empty or only whitespace.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// The category of a new transaction was empty or only whitespace.
    #[error("transaction category cannot be empty")]
    EmptyCategory,

    /// The value of a new transaction was not a finite number greater than zero.
    ///
    /// Holds the text the user entered.
    #[error("\"{0}\" is not a valid transaction value")]
    InvalidValue(String),

    /// The type of a new transaction was neither income nor outcome.
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::EmptyTitle => (
                StatusCode::BAD_REQUEST,
                Alert::error("Título inválido", "Informe um título para a transação."),
            ),
            Error::EmptyCategory => (
                StatusCode::BAD_REQUEST,
                Alert::error("Categoria inválida", "Informe uma categoria para a transação."),
            ),
            Error::InvalidValue(value) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Valor inválido",
                    format!("\"{value}\" não é um valor válido. Informe um valor de pelo menos R$ 0,01."),
                ),
            ),
            Error::InvalidTransactionType(type_) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Tipo inválido",
                    format!("\"{type_}\" não é um tipo válido. Escolha Ganhos ou Gastos."),
                ),
            ),
            Error::Api(ApiError::Rejected {
                message: Some(message),
                ..
            }) => (
                StatusCode::BAD_GATEWAY,
                Alert::error("Não foi possível salvar a transação", message),
            ),
            Error::Api(error) => {
                tracing::error!("finance API request failed: {error}");
                (
                    StatusCode::BAD_GATEWAY,
                    Alert::error(
                        "Não foi possível salvar a transação",
                        "O serviço de transações não respondeu corretamente. Tente novamente.",
                    ),
                )
            }
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Invalid Timezone Settings",
                    format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
