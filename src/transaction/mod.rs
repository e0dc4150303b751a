//! Transactions as exchanged with the finance API, and the form for creating them.

mod core;
mod create_endpoint;
mod form;

pub use core::{
    Balance, Category, NewTransaction, Transaction, TransactionType, TransactionsResponse,
};
pub use create_endpoint::create_transaction_endpoint;
pub use form::{TransactionDraft, new_transaction_form};
