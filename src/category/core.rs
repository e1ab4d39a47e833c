//! Core category type and database operations.

use rusqlite::{Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Database identifier for a category.
pub type CategoryId = i64;

/// The categories created for a new database.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Home", "Transport", "Entertainment", "Food", "Other"];

/// A named grouping of expense records (e.g., 'Food', 'Transport').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The title of the category, unique across all categories.
    ///
    /// Record forms refer to categories by title.
    pub title: String,
}

/// Create a category and return it with its generated ID.
pub fn create_category(title: &str, connection: &Connection) -> Result<Category, Error> {
    connection.execute("INSERT INTO category (title) VALUES (?1);", (title,))?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        title: title.to_owned(),
    })
}

/// Retrieve a single category by ID.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, title FROM category WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve the category with exactly the title `title`.
///
/// # Errors
/// Returns [Error::UnknownCategory] if no category has the title.
pub fn get_category_by_title(title: &str, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, title FROM category WHERE title = :title;")?
        .query_row(&[(":title", &title)], map_row)
        .optional()?
        .ok_or_else(|| Error::UnknownCategory(title.to_owned()))
}

/// Retrieve all categories ordered by ID.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, title FROM category ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Insert [DEFAULT_CATEGORIES] if there are no categories yet.
///
/// Returns the number of categories that were created.
pub fn seed_default_categories(connection: &Connection) -> Result<usize, Error> {
    let count: i64 = connection.query_row("SELECT COUNT(1) FROM category;", [], |row| row.get(0))?;

    if count > 0 {
        return Ok(0);
    }

    for title in DEFAULT_CATEGORIES {
        create_category(title, connection)?;
    }

    tracing::info!("Created {} default categories", DEFAULT_CATEGORIES.len());

    Ok(DEFAULT_CATEGORIES.len())
}

/// Initialize the category table and the table holding each category's records.
pub fn create_category_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS category_record (
            position INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER NOT NULL REFERENCES category(id) ON DELETE CASCADE,
            record_id INTEGER NOT NULL UNIQUE REFERENCES record(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_category_record_category
            ON category_record(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;

    Ok(Category { id, title })
}
