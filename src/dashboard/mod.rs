//! The dashboard page and its aggregation engine.
//!
//! The aggregation functions in [aggregation] turn the raw transaction and
//! budget lists into the monthly, category and budget-comparison series that
//! the charts and summary cards display.

pub mod aggregation;
mod cards;
mod charts;
mod forms;
mod handlers;

pub use handlers::{DashboardState, get_dashboard_page};
