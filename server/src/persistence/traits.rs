//! Async repository trait definitions for the catalog.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, which tonic's `#[async_trait]` service
//! impls require.

use super::PersistenceError;
use crate::catalog::{Race, RaceFilter, SportEvent, SportFilter};
use std::future::Future;

/// Read access to races.
///
/// `list` and `get_by_id` run [`RaceRepository::init`] first, so the first
/// request after startup waits for the bootstrap rather than racing it.
pub trait RaceRepository: Send + Sync {
    /// Create and seed the table. Runs at most once per repository.
    fn init(&self) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn list(
        &self,
        filter: Option<&RaceFilter>,
    ) -> impl Future<Output = Result<Vec<Race>, PersistenceError>> + Send;
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Race>, PersistenceError>> + Send;
}

/// Read access to sport events. Same contract as [`RaceRepository`].
pub trait SportEventRepository: Send + Sync {
    fn init(&self) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn list(
        &self,
        filter: Option<&SportFilter>,
    ) -> impl Future<Output = Result<Vec<SportEvent>, PersistenceError>> + Send;
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<SportEvent>, PersistenceError>> + Send;
}
