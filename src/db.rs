//! Database set up.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, category::create_category_tables, record::create_record_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// All tables are created in a single exclusive transaction, so calling this
/// on an existing database is a no-op.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_tables(&transaction)?;
    create_record_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
