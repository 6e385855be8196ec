//! Dynamic SQL construction for catalog listings.
//!
//! Listing goes through two stages:
//!
//! 1. [`filter`] normalizes a caller's filter into typed
//!    [`Predicate`](filter::Predicate)s plus an [`Ordering`](filter::Ordering)
//!    whose field has passed the entity's sortable allow-list.
//! 2. [`builder`] assembles those into a `sqlx::QueryBuilder`.
//!
//! Only allow-listed column names and the `ASC`/`DESC` keyword are ever
//! pushed as SQL text. Every caller-supplied value goes through `push_bind`.

pub mod builder;
pub mod filter;

pub use builder::{build_by_id, build_list, SqliteQuery};
pub use filter::{normalize_races, normalize_sports, Normalized};

/// Static description of a catalog table.
#[derive(Debug)]
pub struct EntitySchema {
    pub table: &'static str,
    /// Projected columns, in the order the row mapper decodes them.
    pub columns: &'static [&'static str],
    /// Columns a caller may order by. Matched case-sensitively.
    pub sortable: &'static [&'static str],
    pub default_order: &'static str,
}

pub const RACES: EntitySchema = EntitySchema {
    table: "races",
    columns: &[
        "id",
        "meeting_id",
        "name",
        "number",
        "visible",
        "advertised_start_time",
    ],
    sortable: &[
        "name",
        "number",
        "id",
        "meeting_id",
        "visible",
        "advertised_start_time",
    ],
    default_order: "advertised_start_time",
};

pub const SPORTS: EntitySchema = EntitySchema {
    table: "sports",
    columns: &[
        "id",
        "name",
        "advertised_start_time",
        "sport",
        "current_score",
    ],
    sortable: &[
        "name",
        "id",
        "sport",
        "current_score",
        "advertised_start_time",
    ],
    default_order: "advertised_start_time",
};
