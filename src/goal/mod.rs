//! Savings goal management for the finance tracker.
//!
//! Goals are created out-of-band with the `add_goal` binary and read-only
//! over HTTP; the dashboard shows their progress.

mod core;
mod list_goals_endpoint;

pub use core::{Goal, NewGoal, create_goal, create_goal_table, get_all_goals};
pub use list_goals_endpoint::list_goals_endpoint;
