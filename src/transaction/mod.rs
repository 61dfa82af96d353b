//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - Database functions for storing, listing and deleting transactions
//! - JSON API handlers for the transaction routes

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;

pub use core::{
    NewTransaction, Transaction, TransactionKind, create_transaction, create_transaction_table,
    delete_transaction, get_all_transactions,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use list_transactions_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub use core::count_transactions;
