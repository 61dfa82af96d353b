//! Defines the state shared between routes.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db};

/// The state shared between routes.
///
/// Each route extracts its own narrower state type via
/// [axum::extract::FromRef].
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create the application state, ensuring the database schema exists.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the schema cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        db::initialize(&connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(connection)),
        })
    }
}
