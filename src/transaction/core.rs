//! Defines the core data models and database queries for transactions.

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, category::Category, database_id::DatabaseId};

// ============================================================================
// MODELS
// ============================================================================

/// Whether a transaction is money spent or money earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent. Transactions without an explicit kind default to this.
    #[default]
    Expense,
    /// Money earned.
    Income,
}

impl TransactionKind {
    /// The sign this kind contributes to net monthly totals.
    ///
    /// Expenses add to a month's total and income subtracts from it.
    pub fn signum(&self) -> f64 {
        match self {
            TransactionKind::Expense => 1.0,
            TransactionKind::Income => -1.0,
        }
    }

    /// The stored string for a transaction kind, matching its JSON representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        // Unknown kind strings are treated as expenses rather than failing the
        // whole query.
        Ok(match value.as_str()? {
            "income" => TransactionKind::Income,
            _ => TransactionKind::Expense,
        })
    }
}

/// A single dated monetary movement with a category and amount.
///
/// To create a new `Transaction`, build a [NewTransaction] and pass it to
/// [create_transaction]. Transactions are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// The category the transaction belongs to.
    pub category: Category,
    /// Whether the transaction is an expense or income.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// The validated data needed to create a [Transaction].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// The category the transaction belongs to.
    pub category: Category,
    /// Whether the transaction is an expense or income.
    pub kind: TransactionKind,
}

impl NewTransaction {
    /// Create the data for a new expense transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NonPositiveAmount] if `amount` is zero or negative,
    /// - or [Error::EmptyDescription] if `description` is an empty string.
    pub fn new(
        amount: f64,
        description: &str,
        date: Date,
        category: Category,
    ) -> Result<Self, Error> {
        if amount <= 0.0 {
            return Err(Error::NonPositiveAmount(amount));
        }

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(Self {
            amount,
            description: description.to_owned(),
            date,
            category,
            kind: TransactionKind::Expense,
        })
    }

    /// Set the kind of the transaction.
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (amount, description, date, category, kind)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, amount, description, date, category, kind",
        )?
        .query_one(
            (
                new_transaction.amount,
                new_transaction.description,
                new_transaction.date,
                new_transaction.category,
                new_transaction.kind,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve all transactions from the database in the order they were stored.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, amount, description, date, category, kind FROM \"transaction\" ORDER BY id ASC")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// The number of rows removed by a delete statement.
pub type RowsAffected = usize;

/// Delete the transaction with `id` from the database.
///
/// Returns the number of rows deleted, which is zero if `id` does not refer
/// to a stored transaction. Deleting a missing transaction is not an error.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(
    id: DatabaseId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )
        .map_err(|error| error.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                kind TEXT NOT NULL DEFAULT 'expense'
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let description = row.get(2)?;
    let date = row.get(3)?;
    let category = row.get(4)?;
    let kind = row.get(5)?;

    Ok(Transaction {
        id,
        amount,
        description,
        date,
        category,
        kind,
    })
}

// ============================================================================
// TESTS
// ============================================================================
