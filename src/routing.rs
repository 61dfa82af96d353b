//! Defines the routes for the server and how each route is handled.

use axum::{
    Json, Router,
    http::StatusCode,
    response::Redirect,
    routing::get,
};
use serde_json::json;
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{create_budget_endpoint, list_budgets_endpoint},
    dashboard::get_dashboard_page,
    endpoints,
    goal::list_goals_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ROOT,
            get(|| async { Redirect::to(endpoints::DASHBOARD_VIEW) }),
        )
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint)
                .post(create_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::BUDGETS_API,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(endpoints::GOALS_API, get(list_goals_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "the requested resource does not exist"})),
    )
}
