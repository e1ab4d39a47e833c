//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the REST server.
///
/// Route handlers do not take this struct directly, each one declares its own
/// state struct that implements `FromRef<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection.
    ///
    /// Handlers hold the lock for the whole of an operation so that the
    /// writes to records and to category back-references are never
    /// interleaved with another request.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}
