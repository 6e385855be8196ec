//! SQLite-backed implementation of [`RaceRepository`].

use sqlx::SqlitePool;

use super::helpers::{fetch_mapped, fetch_optional_mapped, map_race_row};
use super::seed::{seed_races, SeedPlan};
use crate::catalog::{apply_status, derive_status, Clock, Race, RaceFilter, SystemClock};
use crate::persistence::traits::RaceRepository;
use crate::persistence::{InitLatch, PersistenceError};
use crate::query::{build_by_id, build_list, normalize_races, RACES};

pub struct SqliteRaceRepository<C = SystemClock> {
    pool: SqlitePool,
    seed: SeedPlan<Race>,
    clock: C,
    pub(super) latch: InitLatch,
}

impl SqliteRaceRepository {
    pub fn new(pool: SqlitePool, seed: SeedPlan<Race>) -> Self {
        Self::with_clock(pool, seed, SystemClock)
    }
}

impl<C: Clock> SqliteRaceRepository<C> {
    pub fn with_clock(pool: SqlitePool, seed: SeedPlan<Race>, clock: C) -> Self {
        Self {
            pool,
            seed,
            clock,
            latch: InitLatch::new(),
        }
    }

    async fn bootstrap(&self) -> Result<(), PersistenceError> {
        seed_races(&self.pool, &self.seed, self.clock.now()).await?;
        Ok(())
    }
}

impl<C: Clock> RaceRepository for SqliteRaceRepository<C> {
    async fn init(&self) -> Result<(), PersistenceError> {
        self.latch.run_once(|| self.bootstrap()).await
    }

    async fn list(&self, filter: Option<&RaceFilter>) -> Result<Vec<Race>, PersistenceError> {
        self.init().await?;

        let query = build_list(&RACES, &normalize_races(filter));
        tracing::debug!(sql = query.sql(), ?filter, "Listing races");

        let mut races = fetch_mapped(&self.pool, query, map_race_row).await?;
        apply_status(&mut races, self.clock.now());
        Ok(races)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Race>, PersistenceError> {
        self.init().await?;

        let query = build_by_id(&RACES, id);
        let race = fetch_optional_mapped(&self.pool, query, map_race_row).await?;
        Ok(race.map(|mut race| {
            race.status = derive_status(race.advertised_start_time, self.clock.now());
            race
        }))
    }
}
