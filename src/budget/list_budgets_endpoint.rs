//! Defines the endpoint for listing all budgets.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{Budget, core::get_all_budgets},
};

/// The state needed to list budgets.
#[derive(Debug, Clone)]
pub struct ListBudgetsState {
    /// The database connection for managing budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListBudgetsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for listing all budgets as JSON.
pub async fn list_budgets_endpoint(
    State(state): State<ListBudgetsState>,
) -> Result<Json<Vec<Budget>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let budgets = get_all_budgets(&connection)?;

    Ok(Json(budgets))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State};
    use rusqlite::Connection;

    use crate::{
        budget::{
            NewBudget, create_budget,
            list_budgets_endpoint::{ListBudgetsState, list_budgets_endpoint},
        },
        category::Category,
        db::initialize,
    };

    fn get_test_state() -> ListBudgetsState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        ListBudgetsState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn lists_stored_budgets() {
        let state = get_test_state();
        let want = {
            let connection = state.db_connection.lock().unwrap();
            vec![
                create_budget(
                    NewBudget::new(Category::Food, "2025-07", 200.0).unwrap(),
                    &connection,
                )
                .unwrap(),
            ]
        };

        let Json(got) = list_budgets_endpoint(State(state))
            .await
            .expect("expected 200 response");

        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn returns_empty_array_for_empty_store() {
        let state = get_test_state();

        let Json(got) = list_budgets_endpoint(State(state))
            .await
            .expect("expected 200 response");

        assert!(got.is_empty());
    }
}
