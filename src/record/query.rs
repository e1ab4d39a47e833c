//! Listing records with a category filter, amount sorting and keyword search.

use std::{fmt, str::FromStr};

use rusqlite::Connection;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{Error, category::CategoryId, record::RecordWithCategory};

use super::db::map_row_with_category;

/// The order to sort records by amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    /// Sort in order of increasing amount.
    #[serde(rename = "asc")]
    Ascending,
    /// Sort in order of decreasing amount.
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(format!("invalid sort order \"{other}\", expected \"asc\" or \"desc\"")),
        }
    }
}

/// The query parameters for the records page.
///
/// Every parameter is optional, and an empty value (e.g., the "All"
/// option of a select input) is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecordsQuery {
    /// Only list records in this category.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<CategoryId>,
    /// Sort records by amount. Records are listed in the order they were
    /// created when not set.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    /// Only list records whose name contains this text, ignoring case.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl RecordsQuery {
    /// The same query with a different sort order.
    pub fn with_sort(&self, sort: Option<SortOrder>) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// The URL for `route` with this query as its query string.
    pub fn to_url(&self, route: &str) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query_string) if !query_string.is_empty() => format!("{route}?{query_string}"),
            Ok(_) => route.to_owned(),
            Err(error) => {
                tracing::error!("Could not encode records query {self:?}: {error}");
                route.to_owned()
            }
        }
    }
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let maybe_text = Option::<String>::deserialize(deserializer)?;

    match maybe_text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => T::from_str(text).map_err(de::Error::custom).map(Some),
    }
}

/// The records matching a [RecordsQuery] and their total amount.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList {
    pub records: Vec<RecordWithCategory>,
    pub total: f64,
}

/// Get the records matching `query`.
///
/// The category filter and sort order are applied in SQL, then the keyword
/// search is applied to the sorted rows. The total is the sum of the
/// amounts of the records that remain.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn list_records(query: &RecordsQuery, connection: &Connection) -> Result<RecordList, Error> {
    // Break ties on ID so the order is stable for records with equal amounts.
    let order_clause = match query.sort {
        Some(SortOrder::Ascending) => "ORDER BY record.amount ASC, record.id ASC",
        Some(SortOrder::Descending) => "ORDER BY record.amount DESC, record.id ASC",
        None => "ORDER BY record.id ASC",
    };

    let sql = format!(
        "SELECT record.id, record.name, record.amount, category.id, category.title \
        FROM record INNER JOIN category ON record.category_id = category.id \
        WHERE ?1 IS NULL OR record.category_id = ?1 \
        {order_clause};"
    );

    let records = connection
        .prepare(&sql)?
        .query_map([query.filter], map_row_with_category)?
        .collect::<Result<Vec<_>, rusqlite::Error>>()?;

    let records = filter_by_keyword(records, query.keyword.as_deref().unwrap_or_default());
    let total = total_amount(&records);

    Ok(RecordList { records, total })
}

/// Keep the records whose name contains `keyword`, ignoring case.
///
/// An empty keyword keeps every record.
pub fn filter_by_keyword(
    records: Vec<RecordWithCategory>,
    keyword: &str,
) -> Vec<RecordWithCategory> {
    let keyword = keyword.trim().to_lowercase();

    if keyword.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| record.name.as_ref().to_lowercase().contains(&keyword))
        .collect()
}

/// The sum of the amounts of `records`.
pub fn total_amount(records: &[RecordWithCategory]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}
