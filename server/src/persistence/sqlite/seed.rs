//! Table creation and fake-data seeding.
//!
//! Every insert is `INSERT OR IGNORE`, so seeding a database file that was
//! already populated by a previous run leaves the existing rows untouched.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use sqlx::SqlitePool;

use super::helpers::encode_timestamp;
use crate::catalog::{EventStatus, Race, SportEvent, KNOWN_SPORTS};
use crate::persistence::PersistenceError;

/// How a repository populates its table on first use.
#[derive(Debug, Clone)]
pub enum SeedPlan<T> {
    /// Generate `count` random rows with ids `1..=count`.
    Random { count: u32 },
    /// Insert exactly these records. Their `status` is ignored.
    #[cfg_attr(not(test), allow(dead_code))]
    Records(Vec<T>),
    /// Create the table and insert nothing.
    SchemaOnly,
}

impl<T> SeedPlan<T> {
    /// Random rows, or an empty table when `count` is zero.
    pub fn from_count(count: u32) -> Self {
        if count == 0 {
            SeedPlan::SchemaOnly
        } else {
            SeedPlan::Random { count }
        }
    }
}

const CREATE_RACES: &str = "CREATE TABLE IF NOT EXISTS races (\
     id INTEGER PRIMARY KEY, \
     meeting_id INTEGER, \
     name TEXT, \
     number INTEGER, \
     visible INTEGER, \
     advertised_start_time DATETIME)";

// NOCASE lets `sport = ?` match regardless of the caller's casing.
const CREATE_SPORTS: &str = "CREATE TABLE IF NOT EXISTS sports (\
     id INTEGER PRIMARY KEY, \
     name TEXT, \
     advertised_start_time DATETIME, \
     sport TEXT COLLATE NOCASE, \
     current_score TEXT)";

const PLACES: [&str; 12] = [
    "Ballarat", "Geelong", "Bendigo", "Hobart", "Darwin", "Cairns", "Perth", "Wagga",
    "Toowoomba", "Albury", "Mildura", "Launceston",
];

const MASCOTS: [&str; 12] = [
    "Falcons", "Sharks", "Wombats", "Tigers", "Magpies", "Kestrels", "Lions", "Cobras",
    "Dingoes", "Rams", "Comets", "Pelicans",
];

fn team_name(rng: &mut impl Rng) -> String {
    let place = PLACES.choose(rng).copied().unwrap_or("Sydney");
    let mascot = MASCOTS.choose(rng).copied().unwrap_or("Swans");
    format!("{place} {mascot}")
}

/// A start time between one day ago and two days from `now`.
fn start_time_near(rng: &mut impl Rng, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = rng.random_range(-86_400..=172_800);
    now + Duration::seconds(offset)
}

fn random_races(count: u32, now: DateTime<Utc>) -> Vec<Race> {
    let mut rng = rand::rng();
    (1..=i64::from(count))
        .map(|id| Race {
            id,
            meeting_id: rng.random_range(1..=10),
            name: team_name(&mut rng),
            number: rng.random_range(1..=12),
            visible: rng.random_bool(0.5),
            advertised_start_time: start_time_near(&mut rng, now),
            status: EventStatus::default(),
        })
        .collect()
}

fn random_sport_events(count: u32, now: DateTime<Utc>) -> Vec<SportEvent> {
    let mut rng = rand::rng();
    (1..=i64::from(count))
        .map(|id| {
            let home = team_name(&mut rng);
            let away = team_name(&mut rng);
            SportEvent {
                id,
                name: format!("{home} VS {away}"),
                advertised_start_time: start_time_near(&mut rng, now),
                sport: KNOWN_SPORTS.choose(&mut rng).copied().unwrap_or("AFL").to_string(),
                current_score: format!(
                    "{}-{}",
                    rng.random_range(0..=150u32),
                    rng.random_range(0..=150u32)
                ),
                status: EventStatus::default(),
            }
        })
        .collect()
}

/// Create the `races` table and populate it according to `plan`.
/// Returns the number of rows actually inserted.
pub async fn seed_races(
    pool: &SqlitePool,
    plan: &SeedPlan<Race>,
    now: DateTime<Utc>,
) -> Result<u64, PersistenceError> {
    sqlx::query(CREATE_RACES).execute(pool).await?;

    // Generated up front: the thread-local rng must not live across an await.
    let races = match plan {
        SeedPlan::Random { count } => random_races(*count, now),
        SeedPlan::Records(records) => records.clone(),
        SeedPlan::SchemaOnly => return Ok(0),
    };

    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for race in &races {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO races \
             (id, meeting_id, name, number, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(race.id)
        .bind(race.meeting_id)
        .bind(&race.name)
        .bind(race.number)
        .bind(i64::from(race.visible))
        .bind(encode_timestamp(race.advertised_start_time))
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }
    tx.commit().await?;

    tracing::info!(inserted, planned = races.len(), "Seeded races");
    Ok(inserted)
}

/// Create the `sports` table and populate it according to `plan`.
pub async fn seed_sport_events(
    pool: &SqlitePool,
    plan: &SeedPlan<SportEvent>,
    now: DateTime<Utc>,
) -> Result<u64, PersistenceError> {
    sqlx::query(CREATE_SPORTS).execute(pool).await?;

    let events = match plan {
        SeedPlan::Random { count } => random_sport_events(*count, now),
        SeedPlan::Records(records) => records.clone(),
        SeedPlan::SchemaOnly => return Ok(0),
    };

    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for event in &events {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO sports \
             (id, name, advertised_start_time, sport, current_score) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(encode_timestamp(event.advertised_start_time))
        .bind(&event.sport)
        .bind(&event.current_score)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }
    tx.commit().await?;

    tracing::info!(inserted, planned = events.len(), "Seeded sport events");
    Ok(inserted)
}
