//! Defines the endpoint for listing all savings goals.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    goal::{Goal, core::get_all_goals},
};

/// The state needed to list savings goals.
#[derive(Debug, Clone)]
pub struct ListGoalsState {
    /// The database connection for managing goals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListGoalsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for listing all savings goals as JSON.
///
/// Goals are read-only over HTTP; they are created with the `add_goal`
/// binary.
pub async fn list_goals_endpoint(
    State(state): State<ListGoalsState>,
) -> Result<Json<Vec<Goal>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let goals = get_all_goals(&connection)?;

    Ok(Json(goals))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State};
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        goal::{
            NewGoal, create_goal,
            list_goals_endpoint::{ListGoalsState, list_goals_endpoint},
        },
    };

    fn get_test_state() -> ListGoalsState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        ListGoalsState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn lists_stored_goals() {
        let state = get_test_state();
        let want = {
            let connection = state.db_connection.lock().unwrap();
            vec![
                create_goal(NewGoal::new("Holiday", 1000.0, 250.0).unwrap(), &connection).unwrap(),
            ]
        };

        let Json(got) = list_goals_endpoint(State(state))
            .await
            .expect("expected 200 response");

        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn returns_empty_array_for_empty_store() {
        let state = get_test_state();

        let Json(got) = list_goals_endpoint(State(state))
            .await
            .expect("expected 200 response");

        assert!(got.is_empty());
    }
}
