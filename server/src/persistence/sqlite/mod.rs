//! SQLite-backed repository implementations.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode**: one writer and multiple concurrent readers.
//! - **`create_if_missing`**: the file is created on first start.
//!
//! There are no embedded migrations: each repository creates its own table
//! and seeds it the first time it is used (see [`seed`]).
//!
//! ## Repository types
//!
//! | Type | Trait |
//! |------|-------|
//! | [`SqliteRaceRepository`] | `RaceRepository` |
//! | [`SqliteSportEventRepository`] | `SportEventRepository` |
//!
//! Both build their statements as `sqlx::QueryBuilder`s with [`crate::query`]
//! and run and map them positionally in [`helpers`].
//! Timestamps are stored as RFC 3339 UTC text with second precision, so
//! lexical order on the column equals chronological order.

mod database;
pub(crate) mod helpers;
mod race_repo;
pub mod seed;
mod sport_repo;

pub use database::Database;
pub use race_repo::SqliteRaceRepository;
pub use seed::SeedPlan;
pub use sport_repo::SqliteSportEventRepository;
