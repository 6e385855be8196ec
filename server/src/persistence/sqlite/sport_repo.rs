//! SQLite-backed implementation of [`SportEventRepository`].

use sqlx::SqlitePool;

use super::helpers::{fetch_mapped, fetch_optional_mapped, map_sport_event_row};
use super::seed::{seed_sport_events, SeedPlan};
use crate::catalog::{apply_status, derive_status, Clock, SportEvent, SportFilter, SystemClock};
use crate::persistence::traits::SportEventRepository;
use crate::persistence::{InitLatch, PersistenceError};
use crate::query::{build_by_id, build_list, normalize_sports, SPORTS};

pub struct SqliteSportEventRepository<C = SystemClock> {
    pool: SqlitePool,
    seed: SeedPlan<SportEvent>,
    clock: C,
    pub(super) latch: InitLatch,
}

impl SqliteSportEventRepository {
    pub fn new(pool: SqlitePool, seed: SeedPlan<SportEvent>) -> Self {
        Self::with_clock(pool, seed, SystemClock)
    }
}

impl<C: Clock> SqliteSportEventRepository<C> {
    pub fn with_clock(pool: SqlitePool, seed: SeedPlan<SportEvent>, clock: C) -> Self {
        Self {
            pool,
            seed,
            clock,
            latch: InitLatch::new(),
        }
    }

    async fn bootstrap(&self) -> Result<(), PersistenceError> {
        seed_sport_events(&self.pool, &self.seed, self.clock.now()).await?;
        Ok(())
    }
}

impl<C: Clock> SportEventRepository for SqliteSportEventRepository<C> {
    async fn init(&self) -> Result<(), PersistenceError> {
        self.latch.run_once(|| self.bootstrap()).await
    }

    async fn list(
        &self,
        filter: Option<&SportFilter>,
    ) -> Result<Vec<SportEvent>, PersistenceError> {
        self.init().await?;

        let query = build_list(&SPORTS, &normalize_sports(filter));
        tracing::debug!(sql = query.sql(), ?filter, "Listing sport events");

        let mut events = fetch_mapped(&self.pool, query, map_sport_event_row).await?;
        apply_status(&mut events, self.clock.now());
        Ok(events)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<SportEvent>, PersistenceError> {
        self.init().await?;

        let query = build_by_id(&SPORTS, id);
        let event = fetch_optional_mapped(&self.pool, query, map_sport_event_row).await?;
        Ok(event.map(|mut event| {
            event.status = derive_status(event.advertised_start_time, self.clock.now());
            event
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EventStatus, FixedClock};
    use crate::persistence::sqlite::Database;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn make_event(id: i64, sport: &str, score: &str, offset_mins: i64) -> SportEvent {
        SportEvent {
            id,
            name: format!("Home {id} VS Away {id}"),
            advertised_start_time: now() + Duration::minutes(offset_mins),
            sport: sport.to_string(),
            current_score: score.to_string(),
            status: EventStatus::Open,
        }
    }

    async fn repo_with(events: Vec<SportEvent>) -> SqliteSportEventRepository<FixedClock> {
        let db = Database::new_in_memory().await.unwrap();
        SqliteSportEventRepository::with_clock(
            db.pool().clone(),
            SeedPlan::Records(events),
            FixedClock(now()),
        )
    }

    #[tokio::test]
    async fn test_sport_filter_is_case_insensitive() {
        let repo = repo_with(vec![
            make_event(1, "soccer", "1-0", 10),
            make_event(2, "Basketball", "88-91", 20),
            make_event(3, "SOCCER", "2-2", -10),
        ])
        .await;

        let filter = SportFilter {
            sport: Some("Soccer".to_string()),
            ..Default::default()
        };
        let ids: Vec<i64> = repo
            .list(Some(&filter))
            .await
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_unknown_sport_returns_everything() {
        let repo = repo_with(vec![
            make_event(1, "Hockey", "3-1", 10),
            make_event(2, "AFL", "80-62", 20),
        ])
        .await;

        let filter = SportFilter {
            sport: Some("Quidditch".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.list(Some(&filter)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ids_and_order_by_name() {
        let repo = repo_with(vec![
            make_event(1, "Hockey", "0-0", 10),
            make_event(2, "Hockey", "0-0", 20),
            make_event(3, "Hockey", "0-0", 30),
        ])
        .await;

        let filter = SportFilter {
            ids: vec![3, 1],
            order_by: Some("id".to_string()),
            sort: Some("DESC".to_string()),
            ..Default::default()
        };
        let ids: Vec<i64> = repo
            .list(Some(&filter))
            .await
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_events_receive_status() {
        let repo = repo_with(vec![
            make_event(1, "AFL", "10-12", -5),
            make_event(2, "AFL", "0-0", 5),
        ])
        .await;

        let events = repo.list(None).await.unwrap();
        assert_eq!(events[0].status, EventStatus::Closed);
        assert_eq!(events[1].status, EventStatus::Open);

        let single = repo.get_by_id(2).await.unwrap().unwrap();
        assert_eq!(single.status, EventStatus::Open);
        assert_eq!(single.current_score, "0-0");
    }

    #[tokio::test]
    async fn test_get_by_id_absent() {
        let repo = repo_with(vec![]).await;
        assert!(repo.get_by_id(9999).await.unwrap().is_none());
    }
}
