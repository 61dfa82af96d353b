//! Defines the endpoint for deleting a transaction by its ID.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, Error, database_id::DatabaseId, transaction::core::delete_transaction};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for deleting a transaction.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionParams {
    /// The ID of the transaction to delete.
    pub id: Option<DatabaseId>,
}

/// A route handler for deleting a transaction by the `id` query parameter.
///
/// Deleting an ID that is not in the database is treated as a success so the
/// operation is idempotent: the record is gone either way.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Query(params): Query<DeleteTransactionParams>,
) -> Result<Json<Value>, Error> {
    let id = params.id.ok_or(Error::MissingDeleteId)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let rows_affected = delete_transaction(id, &connection)?;

    if rows_affected == 0 {
        tracing::debug!("delete for missing transaction {id} was a no-op");
    }

    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Query, State},
    };
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        category::Category,
        db::initialize,
        transaction::{
            NewTransaction, count_transactions, create_transaction,
            delete_transaction_endpoint::{
                DeleteTransactionParams, DeleteTransactionState, delete_transaction_endpoint,
            },
        },
    };

    fn get_test_state() -> DeleteTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        DeleteTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn insert_transaction(state: &DeleteTransactionState) -> i64 {
        let connection = state.db_connection.lock().unwrap();
        let transaction = create_transaction(
            NewTransaction::new(1.23, "test", date!(2025 - 07 - 01), Category::Food).unwrap(),
            &connection,
        )
        .unwrap();

        transaction.id
    }

    #[tokio::test]
    async fn deletes_transaction_by_id() {
        let state = get_test_state();
        let id = insert_transaction(&state);

        let Json(body) = delete_transaction_endpoint(
            State(state.clone()),
            Query(DeleteTransactionParams { id: Some(id) }),
        )
        .await
        .expect("expected 200 response");

        assert_eq!(body["success"], true);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection), Ok(0));
    }

    #[tokio::test]
    async fn second_delete_is_idempotent() {
        let state = get_test_state();
        let id = insert_transaction(&state);

        delete_transaction_endpoint(
            State(state.clone()),
            Query(DeleteTransactionParams { id: Some(id) }),
        )
        .await
        .expect("first delete should succeed");

        let Json(body) = delete_transaction_endpoint(
            State(state.clone()),
            Query(DeleteTransactionParams { id: Some(id) }),
        )
        .await
        .expect("second delete should also succeed");

        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn rejects_missing_id() {
        let state = get_test_state();

        let result = delete_transaction_endpoint(
            State(state),
            Query(DeleteTransactionParams { id: None }),
        )
        .await;

        assert_eq!(result.map(|_| ()), Err(Error::MissingDeleteId));
    }
}
