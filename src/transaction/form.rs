//! The form for recording a new transaction and the draft it submits.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
    transaction::{NewTransaction, TransactionType},
};

/// A transaction the user has filled in but that has not been validated yet.
///
/// Every field holds the raw text from the form. Missing fields are treated as
/// empty so that they are reported by validation rather than by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionDraft {
    #[serde(default)]
    pub title: String,
    /// The amount as typed, e.g. "5000" or "12.50".
    #[serde(default)]
    pub value: String,
    /// Either "income" or "outcome".
    #[serde(default, rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub category: String,
}

impl TryFrom<TransactionDraft> for NewTransaction {
    type Error = Error;

    /// Validate the draft and coerce the value to a number.
    ///
    /// Title and category are trimmed and must not be empty. The value must
    /// be a finite number of at least one cent.
    fn try_from(draft: TransactionDraft) -> Result<Self, Self::Error> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let value = parse_value(&draft.value)?;
        let type_: TransactionType = draft.type_.trim().parse()?;

        let category = draft.category.trim();
        if category.is_empty() {
            return Err(Error::EmptyCategory);
        }

        Ok(NewTransaction {
            title: title.to_owned(),
            type_,
            value,
            category: category.to_owned(),
        })
    }
}

/// The smallest amount that can be recorded: one cent.
const MIN_VALUE: f64 = 0.01;

/// Parse an amount of at least one cent, accepting either `.` or `,` as the decimal separator.
fn parse_value(text: &str) -> Result<f64, Error> {
    match text.trim().replacen(',', ".", 1).parse::<f64>() {
        Ok(value) if value.is_finite() && value >= MIN_VALUE => Ok(value),
        _ => Err(Error::InvalidValue(text.to_owned())),
    }
}

/// Render an empty form for a new transaction that is submitted with htmx.
pub fn new_transaction_form() -> Markup {
    let create_transaction_route = endpoints::TRANSACTIONS_API;
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(create_transaction_route)
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="w-full grid grid-cols-1 md:grid-cols-5 gap-4 items-end mb-8
                p-4 rounded-lg bg-white dark:bg-slate-800"
        {
            div
            {
                label for="title" class=(FORM_LABEL_STYLE) { "Título" }

                input
                    name="title"
                    id="title"
                    type="text"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="value" class=(FORM_LABEL_STYLE) { "Valor" }

                // w-full needed to ensure input takes the full width
                div class="input-wrapper w-full"
                {
                    input
                        name="value"
                        id="value"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0,00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Categoria" }

                input
                    name="category"
                    id="category"
                    type="text"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="type" class=(FORM_LABEL_STYLE) { "Tipo" }

                select
                    name="type"
                    id="type"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Selecione" }
                    option value=(TransactionType::Income) { "Ganhos" }
                    option value=(TransactionType::Outcome) { "Gastos" }
                }
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="htmx-indicator"
                {
                    (spinner)
                }
                " SALVAR"
            }
        }
    }
}
