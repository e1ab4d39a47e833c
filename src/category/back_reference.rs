//! The list of records that belong to each category.
//!
//! A record references its category through `record.category_id`, and the
//! category keeps the IDs of its records in append order. Callers must keep
//! both sides in sync: every write path that changes a record's category
//! detaches the record from the old category and attaches it to the new one
//! within the same SQL transaction.

use rusqlite::Connection;

use crate::{Error, category::CategoryId, record::RecordId};

/// Get the IDs of the records that belong to a category, in the order they were attached.
pub fn get_category_record_ids(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<RecordId>, Error> {
    connection
        .prepare(
            "SELECT record_id FROM category_record \
            WHERE category_id = :category_id \
            ORDER BY position ASC;",
        )?
        .query_map(&[(":category_id", &category_id)], |row| row.get(0))?
        .map(|maybe_id| maybe_id.map_err(|error| error.into()))
        .collect()
}

/// Append `record_id` to the records of `category_id`.
///
/// A record belongs to at most one category, so the record is first removed
/// from whichever category held it. Attaching a record to the category it is
/// already in moves it to the end of the list.
pub fn attach_record(
    category_id: CategoryId,
    record_id: RecordId,
    connection: &Connection,
) -> Result<(), Error> {
    connection.execute(
        "DELETE FROM category_record WHERE record_id = ?1;",
        (record_id,),
    )?;
    connection.execute(
        "INSERT INTO category_record (category_id, record_id) VALUES (?1, ?2);",
        (category_id, record_id),
    )?;

    Ok(())
}

/// Remove `record_id` from the records of `category_id`.
///
/// Returns whether the record was in the category's list.
pub fn detach_record(
    category_id: CategoryId,
    record_id: RecordId,
    connection: &Connection,
) -> Result<bool, Error> {
    let rows_affected = connection.execute(
        "DELETE FROM category_record WHERE category_id = ?1 AND record_id = ?2;",
        (category_id, record_id),
    )?;

    if rows_affected == 0 {
        tracing::warn!("Record {record_id} was not in the records of category {category_id}");
    }

    Ok(rows_affected != 0)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        category::{attach_record, create_category, detach_record, get_category_record_ids},
        db::initialize,
    };

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn insert_bare_record(category_id: i64, connection: &Connection) -> i64 {
        connection
            .execute(
                "INSERT INTO record (name, amount, category_id) VALUES ('test', 1.0, ?1);",
                (category_id,),
            )
            .expect("Could not insert test record");

        connection.last_insert_rowid()
    }

    #[test]
    fn new_category_has_no_records() {
        let connection = get_test_db_connection();
        let category = create_category("Food", &connection).unwrap();

        assert_eq!(get_category_record_ids(category.id, &connection), Ok(vec![]));
    }

    #[test]
    fn attach_keeps_append_order() {
        let connection = get_test_db_connection();
        let category = create_category("Food", &connection).unwrap();
        let first = insert_bare_record(category.id, &connection);
        let second = insert_bare_record(category.id, &connection);

        attach_record(category.id, second, &connection).unwrap();
        attach_record(category.id, first, &connection).unwrap();

        assert_eq!(
            get_category_record_ids(category.id, &connection),
            Ok(vec![second, first])
        );
    }

    #[test]
    fn attach_twice_keeps_one_occurrence() {
        let connection = get_test_db_connection();
        let category = create_category("Food", &connection).unwrap();
        let record_id = insert_bare_record(category.id, &connection);

        attach_record(category.id, record_id, &connection).unwrap();
        attach_record(category.id, record_id, &connection).unwrap();

        assert_eq!(
            get_category_record_ids(category.id, &connection),
            Ok(vec![record_id])
        );
    }

    #[test]
    fn attach_moves_record_between_categories() {
        let connection = get_test_db_connection();
        let food = create_category("Food", &connection).unwrap();
        let transport = create_category("Transport", &connection).unwrap();
        let record_id = insert_bare_record(food.id, &connection);
        attach_record(food.id, record_id, &connection).unwrap();

        attach_record(transport.id, record_id, &connection).unwrap();

        assert_eq!(get_category_record_ids(food.id, &connection), Ok(vec![]));
        assert_eq!(
            get_category_record_ids(transport.id, &connection),
            Ok(vec![record_id])
        );
    }

    #[test]
    fn detach_removes_record() {
        let connection = get_test_db_connection();
        let category = create_category("Food", &connection).unwrap();
        let record_id = insert_bare_record(category.id, &connection);
        attach_record(category.id, record_id, &connection).unwrap();

        assert_eq!(detach_record(category.id, record_id, &connection), Ok(true));
        assert_eq!(get_category_record_ids(category.id, &connection), Ok(vec![]));
    }

    #[test]
    fn detach_missing_record_reports_false() {
        let connection = get_test_db_connection();
        let category = create_category("Food", &connection).unwrap();

        assert_eq!(detach_record(category.id, 42, &connection), Ok(false));
    }
}
