//! Database operations for records.
//!
//! Every function that writes a record also updates the records list of the
//! affected categories. Both writes happen in one SQL transaction, so a
//! failure part way through leaves the database unchanged.

use rusqlite::{Connection, Row, Transaction, TransactionBehavior};

use crate::{
    Error,
    category::{Category, attach_record, detach_record, get_category_by_title},
    record::{NewRecord, Record, RecordId, RecordName, RecordWithCategory},
};

/// Create a record in the category titled `new_record.category_title` and
/// return it with its generated ID.
///
/// # Errors
/// Returns [Error::UnknownCategory] if there is no category with the title,
/// in which case nothing is written.
pub fn create_record(new_record: NewRecord, connection: &Connection) -> Result<Record, Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    let category = get_category_by_title(&new_record.category_title, &transaction)?;

    transaction.execute(
        "INSERT INTO record (name, amount, category_id) VALUES (?1, ?2, ?3);",
        (new_record.name.as_ref(), new_record.amount, category.id),
    )?;
    let id = transaction.last_insert_rowid();

    attach_record(category.id, id, &transaction)?;

    transaction.commit()?;

    Ok(Record {
        id,
        name: new_record.name,
        amount: new_record.amount,
        category_id: category.id,
    })
}

/// Retrieve a single record by ID.
pub fn get_record(record_id: RecordId, connection: &Connection) -> Result<Record, Error> {
    connection
        .prepare("SELECT id, name, amount, category_id FROM record WHERE id = :id;")?
        .query_row(&[(":id", &record_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve a single record by ID along with its category.
pub fn get_record_with_category(
    record_id: RecordId,
    connection: &Connection,
) -> Result<RecordWithCategory, Error> {
    connection
        .prepare(
            "SELECT record.id, record.name, record.amount, category.id, category.title \
            FROM record INNER JOIN category ON record.category_id = category.id \
            WHERE record.id = :id;",
        )?
        .query_row(&[(":id", &record_id)], map_row_with_category)
        .map_err(|error| error.into())
}

/// Update a record's fields and move it to the category titled
/// `new_record.category_title`, returning the updated record.
///
/// The record is detached from its current category before the new category
/// is attached, so the record appears exactly once in the new category's
/// records even if the category did not change.
///
/// # Errors
/// Returns [Error::UpdateMissingRecord] if the record does not exist and
/// [Error::UnknownCategory] if no category has the title. Nothing is written
/// in either case.
pub fn update_record(
    record_id: RecordId,
    new_record: NewRecord,
    connection: &Connection,
) -> Result<Record, Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    let current = get_record(record_id, &transaction).map_err(|error| match error {
        Error::NotFound => Error::UpdateMissingRecord,
        error => error,
    })?;

    detach_record(current.category_id, record_id, &transaction)?;

    let target = get_category_by_title(&new_record.category_title, &transaction)?;

    let rows_affected = transaction.execute(
        "UPDATE record SET name = ?1, amount = ?2, category_id = ?3 WHERE id = ?4;",
        (new_record.name.as_ref(), new_record.amount, target.id, record_id),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingRecord);
    }

    let updated = get_record(record_id, &transaction)?;

    attach_record(target.id, updated.id, &transaction)?;

    transaction.commit()?;

    Ok(updated)
}

/// Delete a record and remove it from its category's records.
///
/// # Errors
/// Returns [Error::DeleteMissingRecord] if the record does not exist.
pub fn delete_record(record_id: RecordId, connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    let record = get_record(record_id, &transaction).map_err(|error| match error {
        Error::NotFound => Error::DeleteMissingRecord,
        error => error,
    })?;

    detach_record(record.category_id, record_id, &transaction)?;

    let rows_affected = transaction.execute("DELETE FROM record WHERE id = ?1;", [record_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingRecord);
    }

    transaction.commit()?;

    Ok(())
}

/// Initialize the record table and indexes.
pub fn create_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS record (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            category_id INTEGER NOT NULL REFERENCES category(id)
        );

        CREATE INDEX IF NOT EXISTS idx_record_category ON record(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Record, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let amount = row.get(2)?;
    let category_id = row.get(3)?;

    Ok(Record {
        id,
        name: RecordName::new_unchecked(&raw_name),
        amount,
        category_id,
    })
}

/// Map a row with the columns record ID, name, amount, category ID and category title.
pub(super) fn map_row_with_category(row: &Row) -> Result<RecordWithCategory, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let amount = row.get(2)?;
    let category = Category {
        id: row.get(3)?,
        title: row.get(4)?,
    };

    Ok(RecordWithCategory {
        id,
        name: RecordName::new_unchecked(&raw_name),
        amount,
        category,
    })
}
