//! Database schema setup.

use rusqlite::Connection;

use crate::{
    Error, budget::create_budget_table, goal::create_goal_table,
    transaction::create_transaction_table,
};

/// Create the application tables if they do not exist.
///
/// All tables are created in a single transaction so the schema is never left
/// half-built.
///
/// # Errors
/// Returns an [Error::SqlError] if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let sql_transaction = connection.unchecked_transaction()?;

    create_transaction_table(&sql_transaction)?;
    create_budget_table(&sql_transaction)?;
    create_goal_table(&sql_transaction)?;

    sql_transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::db::initialize;

    #[test]
    fn creates_all_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");

        let mut statement = connection
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let table_names: Vec<String> = statement
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|name| name.unwrap())
            .collect();

        for table in ["budget", "goal", "transaction"] {
            assert!(
                table_names.iter().any(|name| name == table),
                "missing table {table}"
            );
        }
    }

    #[test]
    fn is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();
        initialize(&connection).expect("Second initialize should succeed");
    }
}
