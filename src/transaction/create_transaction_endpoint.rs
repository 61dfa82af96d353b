//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    AppState, Error,
    category::Category,
    transaction::{NewTransaction, Transaction, TransactionKind, core::create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The request body for creating a transaction.
///
/// Every field is optional at the deserialization stage so that a missing
/// field produces a named validation error instead of a generic rejection.
#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    /// The value of the transaction in dollars.
    pub amount: Option<f64>,
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The date when the transaction occurred, as "YYYY-MM-DD".
    pub date: Option<String>,
    /// The category of the transaction.
    pub category: Option<String>,
    /// Whether the transaction is an expense or income. Defaults to expense.
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
}

impl TransactionPayload {
    /// Validate the payload and convert it into a [NewTransaction].
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingField] if a required field is absent,
    /// - [Error::InvalidDate] if the date is not a "YYYY-MM-DD" string,
    /// - [Error::InvalidCategory] if the category is not in the fixed set,
    /// - [Error::NonPositiveAmount] or [Error::EmptyDescription] if a field
    ///   fails its invariant.
    fn into_new_transaction(self) -> Result<NewTransaction, Error> {
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        let description = self.description.ok_or(Error::MissingField("description"))?;
        let date = self.date.ok_or(Error::MissingField("date"))?;
        let category = self.category.ok_or(Error::MissingField("category"))?;

        let date = parse_date(&date)?;
        let category: Category = category.parse()?;

        Ok(NewTransaction::new(amount, &description, date, category)?
            .kind(self.kind.unwrap_or_default()))
    }
}

/// Parse a "YYYY-MM-DD" string as a calendar date.
///
/// Dates are plain calendar dates. There is no timezone normalization, so the
/// unambiguous year-month-day representation is required.
fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// A route handler for creating a new transaction, returns the stored
/// transaction as JSON.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(payload): Json<TransactionPayload>,
) -> Result<Json<Transaction>, Error> {
    let new_transaction = payload.into_new_transaction()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = create_transaction(new_transaction, &connection)?;

    Ok(Json(transaction))
}
