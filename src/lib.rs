//! Pennywise is a small web app for tracking personal income and expenses.
//!
//! This library provides a JSON API for transactions, budgets and savings
//! goals, plus a server-rendered dashboard with summary cards and charts.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

pub mod app_state;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod database_id;
pub mod db;
pub mod endpoints;
pub mod goal;
pub mod html;
pub mod routing;
pub mod transaction;

pub use app_state::AppState;
pub use budget::{NewBudget, create_budget};
pub use category::Category;
pub use db::initialize as initialize_db;
pub use goal::{NewGoal, create_goal};
pub use routing::build_router;
pub use transaction::{NewTransaction, TransactionKind, create_transaction};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was missing from a request body.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A category string did not match any of the known categories.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// A date string could not be parsed as a calendar date.
    ///
    /// Dates must use the year-month-day format, e.g. "2025-07-01", so that
    /// the calendar date is unambiguous.
    #[error("could not parse \"{0}\" as a date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A month key string was not of the form "YYYY-MM".
    #[error("could not parse \"{0}\" as a month key (expected YYYY-MM)")]
    InvalidMonthKey(String),

    /// A transaction was created with a zero or negative amount.
    #[error("transaction amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    /// A budget was created with a negative amount.
    #[error("budget amount cannot be negative, got {0}")]
    NegativeBudget(f64),

    /// An empty string was used for a transaction description.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// An empty string was used for a goal name.
    #[error("goal name cannot be empty")]
    EmptyGoalName,

    /// A goal was created with a negative saved amount.
    #[error("saved amount cannot be negative, got {0}")]
    NegativeSaved(f64),

    /// A delete request did not include the `id` query parameter.
    #[error("missing query parameter \"id\"")]
    MissingDeleteId,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match self {
            Error::MissingField(_)
            | Error::InvalidCategory(_)
            | Error::InvalidDate(_)
            | Error::InvalidMonthKey(_)
            | Error::NonPositiveAmount(_)
            | Error::NegativeBudget(_)
            | Error::EmptyDescription
            | Error::EmptyGoalName
            | Error::NegativeSaved(_)
            | Error::MissingDeleteId => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            // Any other errors are not intended to be shown to the client.
            ref error => {
                tracing::error!("An unexpected error occurred: {}", error);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response();
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
