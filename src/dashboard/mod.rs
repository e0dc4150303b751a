//! Dashboard module
//!
//! The single page of the app: balance cards, the new transaction form and
//! the list of transactions loaded from the finance API.

mod cards;
mod handlers;
mod loader;
mod tables;

pub use handlers::get_dashboard_page;
