//! Dashboard HTTP handler and view rendering.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    api::SharedTransactionApi,
    dashboard::{
        cards::balance_cards,
        loader::{DashboardData, load_dashboard},
        tables::transactions_table,
    },
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, currency_input_styles},
    navigation::NavBar,
    timezone::get_timezone,
    transaction::new_transaction_form,
};

/// The state needed for displaying the dashboard page.
#[derive(Clone)]
pub struct DashboardState {
    /// The finance API that owns the transactions.
    pub api: SharedTransactionApi,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the balance, the new transaction form and the list of transactions.
///
/// If the finance API cannot be reached, the page is still rendered in its
/// empty state with a message explaining that the data could not be loaded.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let timezone = get_timezone(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    let page = match load_dashboard(state.api.as_ref(), timezone).await {
        Ok(data) => dashboard_view(nav_bar, &data, None),
        Err(error) => {
            tracing::error!("could not load transactions: {error}");
            let alert = Alert::error(
                "Não foi possível carregar as transações",
                "O serviço de transações não respondeu. Recarregue a página para tentar novamente.",
            );
            dashboard_view(nav_bar, &DashboardData::default(), Some(alert))
        }
    };

    Ok(page.into_response())
}

fn dashboard_view(nav_bar: NavBar<'_>, data: &DashboardData, load_error: Option<Alert>) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        main id="dashboard-content" class=(PAGE_CONTAINER_STYLE)
        {
            @if let Some(alert) = load_error {
                div id="load-error" class="w-full" { (alert.into_html()) }
            }

            (balance_cards(&data.balance))

            (new_transaction_form())

            (transactions_table(&data.transactions))
        }
    );

    base("Dashboard", &[currency_input_styles()], &content)
}
