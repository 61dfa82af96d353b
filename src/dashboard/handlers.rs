//! Route handler for the dashboard page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::html;
use rusqlite::Connection;
use serde::Deserialize;
use time::{OffsetDateTime, macros::format_description};

use crate::{
    AppState, Error,
    budget::{get_all_budgets, parse_month_key},
    dashboard::{
        aggregation::{
            budget_vs_actual, category_totals, month_label, monthly_totals, net_total,
        },
        cards::{goals_view, summary_cards_view},
        charts::{DashboardChart, budget_chart, category_chart, charts_script, charts_view, monthly_chart},
        forms::{budget_form_view, forms_script, month_selector_view, transaction_form_view},
    },
    goal::get_all_goals,
    html::{ECHARTS_SCRIPT_URL, HeadElement, base},
    transaction::get_all_transactions,
};

/// The state needed to render the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for fetching transactions, budgets and goals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters accepted by the dashboard page.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// The "YYYY-MM" month to show in the budget comparison chart. Defaults
    /// to the current month.
    pub month: Option<String>,
}

/// Renders the dashboard page with summary cards, charts, entry forms and
/// savings goals.
///
/// # Errors
/// Returns an [Error::InvalidMonthKey] response if the `month` query parameter
/// is not a "YYYY-MM" string, or an [Error::SqlError] response if a database
/// query fails.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let (transactions, budgets, goals) = {
        let connection = state
            .db_connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        (
            get_all_transactions(&connection)?,
            get_all_budgets(&connection)?,
            get_all_goals(&connection)?,
        )
    };

    let selected_month = match query.month {
        Some(month) => month,
        None => current_month_key(),
    };

    let (year, month) = parse_month_key(&selected_month)?;
    let selected_month_label = month_label(
        time::Date::from_calendar_date(year, month, 1)
            .map_err(|_| Error::InvalidMonthKey(selected_month.clone()))?,
    );

    let monthly = monthly_totals(&transactions);
    let by_category = category_totals(&transactions);
    let comparisons = budget_vs_actual(&transactions, &budgets, &selected_month)?;

    let charts = vec![
        DashboardChart {
            id: "monthly-chart",
            options: monthly_chart(&monthly).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(&by_category).to_string(),
        },
        DashboardChart {
            id: "budget-chart",
            options: budget_chart(&comparisons, &selected_month_label).to_string(),
        },
    ];

    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        charts_script(&charts),
        forms_script(),
    ];

    let content = html! {
        h1 { "Dashboard" }

        (summary_cards_view(net_total(&transactions), &transactions, &by_category))

        (month_selector_view(&selected_month))

        (charts_view(&charts))

        section id="forms" class="forms-grid" {
            (transaction_form_view())
            (budget_form_view())
        }

        (goals_view(&goals))
    };

    Ok(base("Dashboard", &head_elements, &content).into_response())
}

/// The current month as a "YYYY-MM" key.
///
/// Uses the server's local calendar date so the default month matches the
/// dates users enter, falling back to UTC when the local offset cannot be
/// determined.
fn current_month_key() -> String {
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    // The format string only uses supported components.
    today
        .format(format_description!("[year]-[month]"))
        .unwrap_or_else(|_| format!("{:04}-{:02}", today.year(), today.month() as u8))
}
