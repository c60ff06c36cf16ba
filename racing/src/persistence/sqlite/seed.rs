//! One-time population of the races table with demo data.
//!
//! Seeding is skipped when the table already holds rows, so restarting the
//! server against an existing database file leaves it untouched.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::SqlitePool;
use tracing::info;

use crate::persistence::RepositoryError;

const SEED_RACE_COUNT: i64 = 100;
const MAX_MEETING_ID: i64 = 10;
const MAX_RACE_NUMBER: i64 = 12;

const NAME_PREFIXES: &[&str] = &[
    "North", "South", "Golden", "Silver", "Royal", "Coastal", "Valley", "Highland", "Harbour",
    "Summer",
];
const NAME_SUFFIXES: &[&str] = &[
    "Stakes", "Cup", "Plate", "Handicap", "Classic", "Sprint", "Derby", "Mile", "Guineas",
    "Trophy",
];

/// A race row to insert, before any status is derived.
#[derive(Debug, Clone)]
pub(crate) struct NewRace {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

/// Populate an empty races table. Existing rows are never overwritten.
pub(crate) async fn seed_races(pool: &SqlitePool) -> Result<(), RepositoryError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM races")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!(existing, "Races table already populated, skipping seed");
        return Ok(());
    }

    let races = generate_races(SEED_RACE_COUNT, Utc::now());
    let inserted = insert_races(pool, &races).await?;
    info!(inserted, "Seeded races table");
    Ok(())
}

/// Insert races in one transaction, ignoring ids that already exist.
/// Returns the number of rows actually written.
pub(crate) async fn insert_races(
    pool: &SqlitePool,
    races: &[NewRace],
) -> Result<u64, RepositoryError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for race in races {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO races \
             (id, meeting_id, name, number, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(race.id)
        .bind(race.meeting_id)
        .bind(&race.name)
        .bind(race.number)
        .bind(race.visible)
        .bind(race.advertised_start_time)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Random races starting between one day before and two days after `now`,
/// on whole seconds.
fn generate_races(count: i64, now: DateTime<Utc>) -> Vec<NewRace> {
    let mut rng = rand::thread_rng();
    let base = DateTime::<Utc>::from_timestamp(now.timestamp(), 0).unwrap_or(now);

    (1..=count)
        .map(|id| {
            let prefix = NAME_PREFIXES.choose(&mut rng).copied().unwrap_or("Maiden");
            let suffix = NAME_SUFFIXES.choose(&mut rng).copied().unwrap_or("Stakes");
            let offset = rng.gen_range(-Duration::days(1).num_seconds()..=Duration::days(2).num_seconds());

            NewRace {
                id,
                meeting_id: rng.gen_range(1..=MAX_MEETING_ID),
                name: format!("{prefix} {suffix}"),
                number: rng.gen_range(1..=MAX_RACE_NUMBER),
                visible: rng.gen_bool(0.5),
                advertised_start_time: base + Duration::seconds(offset),
            }
        })
        .collect()
}
