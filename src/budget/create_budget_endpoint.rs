//! Defines the endpoint for creating a new monthly budget.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    budget::{Budget, NewBudget, core::create_budget},
    category::Category,
};

/// The state needed to create a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetState {
    /// The database connection for managing budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The request body for creating a budget.
///
/// Every field is optional at the deserialization stage so that a missing
/// field produces a named validation error instead of a generic rejection.
#[derive(Debug, Deserialize)]
pub struct BudgetPayload {
    /// The category the budget applies to.
    pub category: Option<String>,
    /// The month the budget applies to, as a "YYYY-MM" key.
    pub month: Option<String>,
    /// The planned spending limit for the month.
    pub amount: Option<f64>,
}

impl BudgetPayload {
    /// Validate the payload and convert it into a [NewBudget].
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingField] if a required field is absent,
    /// - [Error::InvalidCategory] if the category is not in the fixed set,
    /// - [Error::InvalidMonthKey] or [Error::NegativeBudget] if a field fails
    ///   its invariant.
    fn into_new_budget(self) -> Result<NewBudget, Error> {
        let category = self.category.ok_or(Error::MissingField("category"))?;
        let month = self.month.ok_or(Error::MissingField("month"))?;
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;

        let category: Category = category.parse()?;

        NewBudget::new(category, &month, amount)
    }
}

/// A route handler for creating a new budget, returns the stored budget as
/// JSON.
pub async fn create_budget_endpoint(
    State(state): State<CreateBudgetState>,
    Json(payload): Json<BudgetPayload>,
) -> Result<Json<Budget>, Error> {
    let new_budget = payload.into_new_budget()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let budget = create_budget(new_budget, &connection)?;

    Ok(Json(budget))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State};
    use rusqlite::Connection;

    use crate::{
        Error,
        budget::{
            create_budget_endpoint::{BudgetPayload, CreateBudgetState, create_budget_endpoint},
            get_all_budgets,
        },
        category::Category,
        db::initialize,
    };

    fn get_test_state() -> CreateBudgetState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateBudgetState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn full_payload() -> BudgetPayload {
        BudgetPayload {
            category: Some("Food".to_owned()),
            month: Some("2025-07".to_owned()),
            amount: Some(200.0),
        }
    }

    #[tokio::test]
    async fn creates_budget_from_valid_payload() {
        let state = get_test_state();

        let Json(budget) = create_budget_endpoint(State(state.clone()), Json(full_payload()))
            .await
            .expect("expected 200 response");

        assert_eq!(budget.category, Category::Food);
        assert_eq!(budget.month, "2025-07");
        assert_eq!(budget.amount, 200.0);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_all_budgets(&connection).unwrap(), vec![budget]);
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let cases = [
            (
                BudgetPayload {
                    category: None,
                    ..full_payload()
                },
                Error::MissingField("category"),
            ),
            (
                BudgetPayload {
                    month: None,
                    ..full_payload()
                },
                Error::MissingField("month"),
            ),
            (
                BudgetPayload {
                    amount: None,
                    ..full_payload()
                },
                Error::MissingField("amount"),
            ),
        ];

        for (payload, want) in cases {
            let state = get_test_state();

            let result = create_budget_endpoint(State(state), Json(payload)).await;

            assert_eq!(result.map(|_| ()), Err(want));
        }
    }

    #[tokio::test]
    async fn rejects_bad_month_key() {
        let state = get_test_state();
        let payload = BudgetPayload {
            month: Some("July 2025".to_owned()),
            ..full_payload()
        };

        let result = create_budget_endpoint(State(state), Json(payload)).await;

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidMonthKey("July 2025".to_owned()))
        );
    }
}
