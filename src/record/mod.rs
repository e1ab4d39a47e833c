//! Expense records: storage, listing and the pages for managing them.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod form;
mod query;
mod records_page;

pub use create::{create_record_endpoint, get_new_record_page};
pub use db::{
    create_record, create_record_table, delete_record, get_record, get_record_with_category,
    update_record,
};
pub use delete::delete_record_endpoint;
pub use domain::{NewRecord, Record, RecordId, RecordName, RecordWithCategory};
pub use edit::{get_edit_record_page, update_record_endpoint};
pub use records_page::get_records_page;
