//! Defines the closed set of transaction categories.
//!
//! Categories are a fixed enumeration rather than free text so that category
//! strings are validated at the HTTP boundary before a transaction or budget
//! is constructed.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The category of a transaction or budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, restaurants and takeaways.
    Food,
    /// General retail purchases.
    Shopping,
    /// Rent, utilities and other recurring charges.
    Bills,
    /// Transport, accommodation and holidays.
    Travel,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// All categories in display order.
    ///
    /// Aggregates that report per-category values use this order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Shopping,
        Category::Bills,
        Category::Travel,
        Category::Other,
    ];

    /// The category name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Travel => "Travel",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "Food" => Ok(Category::Food),
            "Shopping" => Ok(Category::Shopping),
            "Bills" => Ok(Category::Bills),
            "Travel" => Ok(Category::Travel),
            "Other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(string.to_owned())),
        }
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}
