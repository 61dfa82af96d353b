//! Defines the endpoint for listing all transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Transaction, core::get_all_transactions},
};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for listing all transactions as JSON.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)?;

    Ok(Json(transactions))
}
