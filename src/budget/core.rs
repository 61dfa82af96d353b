//! Defines the core data model and database queries for budgets.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, category::Category, database_id::DatabaseId};

// ============================================================================
// MODELS
// ============================================================================

/// A planned spending ceiling for one category in one month.
///
/// At most one budget per (category, month) pair is the intended use, but
/// this is not enforced: a later budget for the same pair simply shadows the
/// earlier one when budgets are matched against actual spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The ID of the budget.
    pub id: DatabaseId,
    /// The category the budget applies to.
    pub category: Category,
    /// The month the budget applies to, as a "YYYY-MM" key.
    pub month: String,
    /// The planned spending limit for the month.
    pub amount: f64,
}

/// The validated data needed to create a [Budget].
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    /// The category the budget applies to.
    pub category: Category,
    /// The month the budget applies to, as a "YYYY-MM" key.
    pub month: String,
    /// The planned spending limit for the month.
    pub amount: f64,
}

impl NewBudget {
    /// Create the data for a new budget.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidMonthKey] if `month` is not a "YYYY-MM" string,
    /// - or [Error::NegativeBudget] if `amount` is negative.
    pub fn new(category: Category, month: &str, amount: f64) -> Result<Self, Error> {
        validate_month_key(month)?;

        if amount < 0.0 {
            return Err(Error::NegativeBudget(amount));
        }

        Ok(Self {
            category,
            month: month.to_owned(),
            amount,
        })
    }
}

/// Parse a "YYYY-MM" key into a year and month.
///
/// # Errors
/// Returns an [Error::InvalidMonthKey] if the string is not four digits, a
/// hyphen and two digits, or if the month is not between 1 and 12.
pub fn parse_month_key(month: &str) -> Result<(i32, time::Month), Error> {
    match sscanf::sscanf!(month, "{u16:/[0-9][0-9][0-9][0-9]/}-{u8:/[0-9][0-9]/}") {
        Some((year, month_number)) if (1..=12).contains(&month_number) => {
            let month_number = time::Month::try_from(month_number)
                .map_err(|_| Error::InvalidMonthKey(month.to_owned()))?;

            Ok((year as i32, month_number))
        }
        _ => Err(Error::InvalidMonthKey(month.to_owned())),
    }
}

/// Check that `month` is a "YYYY-MM" key with a month between 1 and 12.
///
/// # Errors
/// Returns an [Error::InvalidMonthKey] if the string does not match.
pub fn validate_month_key(month: &str) -> Result<(), Error> {
    parse_month_key(month).map(|_| ())
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new budget in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_budget(new_budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    let budget = connection
        .prepare(
            "INSERT INTO budget (category, month, amount)
             VALUES (?1, ?2, ?3)
             RETURNING id, category, month, amount",
        )?
        .query_one(
            (new_budget.category, new_budget.month, new_budget.amount),
            map_budget_row,
        )?;

    Ok(budget)
}

/// Retrieve all budgets from the database in the order they were stored.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare("SELECT id, category, month, amount FROM budget ORDER BY id ASC")?
        .query_map([], map_budget_row)?
        .map(|maybe_budget| maybe_budget.map_err(|error| error.into()))
        .collect()
}

/// Create the budget table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                month TEXT NOT NULL,
                amount REAL NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Budget.
fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        month: row.get(2)?,
        amount: row.get(3)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
