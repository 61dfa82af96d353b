//! Defines the core data model and database queries for savings goals.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

// ============================================================================
// MODELS
// ============================================================================

/// A savings target with current progress.
///
/// Goals are created out-of-band with the `add_goal` binary and are read-only
/// over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The ID of the goal.
    pub id: DatabaseId,
    /// A short name for the goal, e.g. "Emergency fund".
    pub name: String,
    /// The amount of money to save.
    pub target: f64,
    /// The amount of money saved so far.
    pub saved: f64,
}

impl Goal {
    /// The fraction of the target saved so far, clamped to the range [0, 1].
    pub fn progress(&self) -> f64 {
        (self.saved / self.target).clamp(0.0, 1.0)
    }
}

/// The validated data needed to create a [Goal].
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    /// A short name for the goal.
    pub name: String,
    /// The amount of money to save.
    pub target: f64,
    /// The amount of money saved so far.
    pub saved: f64,
}

impl NewGoal {
    /// Create the data for a new savings goal.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyGoalName] if `name` is an empty string,
    /// - [Error::NonPositiveAmount] if `target` is zero or negative,
    /// - or [Error::NegativeSaved] if `saved` is negative.
    pub fn new(name: &str, target: f64, saved: f64) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::EmptyGoalName);
        }

        if target <= 0.0 {
            return Err(Error::NonPositiveAmount(target));
        }

        if saved < 0.0 {
            return Err(Error::NegativeSaved(saved));
        }

        Ok(Self {
            name: name.to_owned(),
            target,
            saved,
        })
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new savings goal in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_goal(new_goal: NewGoal, connection: &Connection) -> Result<Goal, Error> {
    let goal = connection
        .prepare(
            "INSERT INTO goal (name, target, saved)
             VALUES (?1, ?2, ?3)
             RETURNING id, name, target, saved",
        )?
        .query_one((new_goal.name, new_goal.target, new_goal.saved), map_goal_row)?;

    Ok(goal)
}

/// Retrieve all savings goals from the database in the order they were stored.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_goals(connection: &Connection) -> Result<Vec<Goal>, Error> {
    connection
        .prepare("SELECT id, name, target, saved FROM goal ORDER BY id ASC")?
        .query_map([], map_goal_row)?
        .map(|maybe_goal| maybe_goal.map_err(|error| error.into()))
        .collect()
}

/// Create the goal table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_goal_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS goal (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                target REAL NOT NULL,
                saved REAL NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Goal.
fn map_goal_row(row: &Row) -> Result<Goal, rusqlite::Error> {
    Ok(Goal {
        id: row.get(0)?,
        name: row.get(1)?,
        target: row.get(2)?,
        saved: row.get(3)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
