//! Budget management for the finance tracker.
//!
//! This module contains everything related to monthly category budgets:
//! - The `Budget` model and `NewBudget` for creating budgets
//! - Database functions for storing and listing budgets
//! - JSON API handlers for the budget routes
//!
//! Budgets are never updated or deleted once created.

mod core;
mod create_budget_endpoint;
mod list_budgets_endpoint;

pub use core::{
    Budget, NewBudget, create_budget, create_budget_table, get_all_budgets, parse_month_key,
};
pub use create_budget_endpoint::create_budget_endpoint;
pub use list_budgets_endpoint::list_budgets_endpoint;
