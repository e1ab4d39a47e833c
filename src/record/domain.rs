//! Core record domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{Category, CategoryId},
};

/// Database identifier for an expense record.
pub type RecordId = i64;

/// A validated, non-empty record name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordName(String);

impl RecordName {
    /// Create a record name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyRecordName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyRecordName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a record name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordName::new(s)
    }
}

impl Display for RecordName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The ID of the record.
    pub id: RecordId,
    /// What the money was spent on.
    pub name: RecordName,
    /// How much was spent, in dollars.
    pub amount: f64,
    /// The category the record belongs to.
    pub category_id: CategoryId,
}

/// A record with its category populated, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordWithCategory {
    /// The ID of the record.
    pub id: RecordId,
    pub name: RecordName,
    pub amount: f64,
    pub category: Category,
}

/// The data needed to create or update a record.
///
/// The category is given by title, as submitted by the record form, and is
/// resolved to a category ID when the record is written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    /// What the money was spent on.
    pub name: RecordName,
    /// How much was spent, in dollars.
    pub amount: f64,
    /// The title of the category the record belongs to.
    pub category_title: String,
}

/// Form data for record creation and editing.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordFormData {
    pub name: String,
    pub amount: f64,
    /// The title of the record's category.
    pub category: String,
}

impl TryFrom<RecordFormData> for NewRecord {
    type Error = Error;

    fn try_from(form: RecordFormData) -> Result<Self, Self::Error> {
        Ok(Self {
            name: RecordName::new(&form.name)?,
            amount: form.amount,
            category_title: form.category,
        })
    }
}
