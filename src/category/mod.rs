//! Categories for grouping expense records.
//!
//! Categories are seeded when the database is created and are not managed
//! through the web interface. Each category keeps the ordered list of the
//! records that belong to it (see [back_reference]).

mod back_reference;
mod core;

pub use back_reference::{attach_record, detach_record, get_category_record_ids};
pub use core::{
    Category, CategoryId, DEFAULT_CATEGORIES, create_category, create_category_tables,
    get_all_categories, get_category, get_category_by_title, seed_default_categories,
};
