//! One-time population of the sports database with demo data.
//!
//! Sports are fixed; teams, competitions and events are generated at random.
//! Every event pairs two distinct teams of its own sport in one of that
//! sport's competitions. Seeding is skipped when events already exist.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::info;

use crate::persistence::RepositoryError;

const SEED_EVENT_COUNT: i64 = 100;

const SPORTS: &[&str] = &["NRL", "Basketball", "AFL", "Football", "Cricket"];

const TEAM_PLACES: &[&str] = &[
    "Harbour", "Valley", "Northern", "Coastal", "Western", "Capital", "River", "Bayside",
    "Highland", "Eastern",
];
const TEAM_MASCOTS: &[&str] = &[
    "Sharks", "Rams", "Eagles", "Tigers", "Storm", "Falcons", "Bulls", "Giants", "Comets",
    "Wolves",
];
const COMPETITION_WORDS: &[&str] = &[
    "Premiership", "Challenge", "Champions", "Heritage", "Pacific", "Federation",
];

#[derive(Debug, Clone)]
pub(crate) struct NewNamed {
    pub id: i64,
    pub name: String,
    pub sport_id: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct NewEvent {
    pub id: i64,
    pub sport_id: i64,
    pub competition_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: i32,
    pub away_score: i32,
    pub advertised_start_time: DateTime<Utc>,
    pub score_finalised: bool,
}

/// Reference data and events to insert, in foreign-key order.
#[derive(Debug, Clone, Default)]
pub(crate) struct SeedData {
    pub sports: Vec<(i64, String)>,
    pub teams: Vec<NewNamed>,
    pub competitions: Vec<NewNamed>,
    pub events: Vec<NewEvent>,
}

#[cfg(test)]
impl SeedData {
    /// One NRL fixture between two teams, repeated per `(id, start, finalised)`.
    pub fn fixture(events: &[(i64, DateTime<Utc>, bool)]) -> Self {
        Self {
            sports: vec![(1, "NRL".to_string())],
            teams: vec![
                NewNamed {
                    id: 1,
                    name: "Harbour Sharks".to_string(),
                    sport_id: 1,
                },
                NewNamed {
                    id: 2,
                    name: "Valley Rams".to_string(),
                    sport_id: 1,
                },
            ],
            competitions: vec![NewNamed {
                id: 1,
                name: "Premiership Cup".to_string(),
                sport_id: 1,
            }],
            events: events
                .iter()
                .map(|&(id, advertised_start_time, score_finalised)| NewEvent {
                    id,
                    sport_id: 1,
                    competition_id: 1,
                    home_team_id: 1,
                    away_team_id: 2,
                    home_score: 0,
                    away_score: 0,
                    advertised_start_time,
                    score_finalised,
                })
                .collect(),
        }
    }
}

/// Populate an empty database. Existing rows are never overwritten.
pub(crate) async fn seed_events(pool: &SqlitePool) -> Result<(), RepositoryError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!(existing, "Events table already populated, skipping seed");
        return Ok(());
    }

    let data = generate(SEED_EVENT_COUNT, Utc::now());
    info!(
        sports = data.sports.len(),
        teams = data.teams.len(),
        competitions = data.competitions.len(),
        events = data.events.len(),
        "Seeding sports database"
    );
    insert_seed_data(pool, &data).await?;
    Ok(())
}

/// Insert everything in one transaction, ignoring ids that already exist.
pub(crate) async fn insert_seed_data(
    pool: &SqlitePool,
    data: &SeedData,
) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    for (id, name) in &data.sports {
        sqlx::query("INSERT OR IGNORE INTO sports (id, name) VALUES (?, ?)")
            .bind(*id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }
    insert_named(&mut tx, "teams", &data.teams).await?;
    insert_named(&mut tx, "competitions", &data.competitions).await?;

    for event in &data.events {
        sqlx::query(
            "INSERT OR IGNORE INTO events \
             (id, sport_id, competition_id, home_team_id, away_team_id, \
              home_score, away_score, advertised_start_time, score_finalised) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(event.id)
        .bind(event.sport_id)
        .bind(event.competition_id)
        .bind(event.home_team_id)
        .bind(event.away_team_id)
        .bind(event.home_score)
        .bind(event.away_score)
        .bind(event.advertised_start_time)
        .bind(event.score_finalised)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// `table` is always one of the two fixed reference tables.
async fn insert_named(
    tx: &mut Transaction<'_, Sqlite>,
    table: &'static str,
    rows: &[NewNamed],
) -> Result<(), RepositoryError> {
    let sql = format!("INSERT OR IGNORE INTO {table} (id, name, sport_id) VALUES (?, ?, ?)");
    for row in rows {
        sqlx::query(&sql)
            .bind(row.id)
            .bind(&row.name)
            .bind(row.sport_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

fn generate(event_count: i64, now: DateTime<Utc>) -> SeedData {
    let mut rng = rand::thread_rng();
    let base = DateTime::<Utc>::from_timestamp(now.timestamp(), 0).unwrap_or(now);
    let mut data = SeedData::default();

    for (index, name) in SPORTS.iter().enumerate() {
        let sport_id = index as i64 + 1;
        data.sports.push((sport_id, name.to_string()));

        for _ in 0..rng.gen_range(2..=10) {
            let place = TEAM_PLACES.choose(&mut rng).copied().unwrap_or("City");
            let mascot = TEAM_MASCOTS.choose(&mut rng).copied().unwrap_or("United");
            data.teams.push(NewNamed {
                id: data.teams.len() as i64 + 1,
                name: format!("{place} {mascot}"),
                sport_id,
            });
        }

        for _ in 0..rng.gen_range(1..=3) {
            let word = COMPETITION_WORDS.choose(&mut rng).copied().unwrap_or("Open");
            data.competitions.push(NewNamed {
                id: data.competitions.len() as i64 + 1,
                name: format!("{word} Cup"),
                sport_id,
            });
        }
    }

    for id in 1..=event_count {
        let sport_id = rng.gen_range(1..=SPORTS.len() as i64);
        let teams: Vec<i64> = data
            .teams
            .iter()
            .filter(|t| t.sport_id == sport_id)
            .map(|t| t.id)
            .collect();
        let competitions: Vec<i64> = data
            .competitions
            .iter()
            .filter(|c| c.sport_id == sport_id)
            .map(|c| c.id)
            .collect();

        let pairing: Vec<i64> = teams.choose_multiple(&mut rng, 2).copied().collect();
        let (Some(&home_team_id), Some(&away_team_id), Some(&competition_id)) =
            (pairing.first(), pairing.get(1), competitions.choose(&mut rng))
        else {
            continue;
        };

        let offset = rng.gen_range(-Duration::days(1).num_seconds()..=Duration::days(2).num_seconds());
        data.events.push(NewEvent {
            id,
            sport_id,
            competition_id,
            home_team_id,
            away_team_id,
            home_score: 0,
            away_score: 0,
            advertised_start_time: base + Duration::seconds(offset),
            score_finalised: false,
        });
    }

    data
}
