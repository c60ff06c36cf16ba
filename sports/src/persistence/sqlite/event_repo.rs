//! SQLite-backed implementation of [`EventRepository`].

use std::sync::Arc;

use catalog_common::query::compile_sort;
use catalog_common::{derive_status, Clock, Predicates, SystemClock};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use super::queries::{
    EventSortColumn, EVENTS_LIST, EVENT_GET_BY_ID, EVENT_UPDATE_SCORE, SCORE_FINALISED,
};
use super::seed;
use crate::persistence::traits::EventRepository;
use crate::persistence::{Event, EventFilter, RepositoryError, ScoreUpdate, SortOrder};

/// Positional layout of [`EVENTS_LIST`]. Joined names are nullable.
type EventRow = (
    i64,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    i64,
    i64,
    DateTime<Utc>,
    bool,
);

pub struct SqliteEventRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
    seeded: OnceCell<()>,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self {
            pool,
            clock,
            seeded: OnceCell::new(),
        }
    }

    fn map_row(&self, row: EventRow) -> Event {
        let (
            id,
            name,
            competition,
            home_team,
            away_team,
            home_score,
            away_score,
            advertised_start_time,
            score_finalised,
        ) = row;

        Event {
            id,
            name: name.unwrap_or_default(),
            competition: competition.unwrap_or_default(),
            home_team: home_team.unwrap_or_default(),
            away_team: away_team.unwrap_or_default(),
            home_score: home_score as i32,
            away_score: away_score as i32,
            advertised_start_time,
            score_finalised,
            status: derive_status(advertised_start_time, self.clock.now()),
        }
    }
}

impl EventRepository for SqliteEventRepository {
    async fn init(&self) -> Result<(), RepositoryError> {
        self.seeded
            .get_or_try_init(|| seed::seed_events(&self.pool))
            .await?;
        Ok(())
    }

    async fn list(
        &self,
        filter: Option<&EventFilter>,
        sort: Option<&SortOrder>,
    ) -> Result<Vec<Event>, RepositoryError> {
        let order = compile_sort::<EventSortColumn>(sort)?;
        let predicates = match filter {
            Some(filter) => Predicates::new().equals(SCORE_FINALISED, filter.score_finalised),
            None => Predicates::new(),
        };
        let query = predicates.compile(EVENTS_LIST).order_by(order);

        let rows: Vec<EventRow> = query.fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(|row| self.map_row(row)).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Event>, RepositoryError> {
        let sql = format!("{}{}", EVENTS_LIST.trim_end(), EVENT_GET_BY_ID);
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| self.map_row(row)))
    }

    async fn update_score(
        &self,
        id: i64,
        update: ScoreUpdate,
    ) -> Result<Option<Event>, RepositoryError> {
        let result = sqlx::query(EVENT_UPDATE_SCORE)
            .bind(update.home_score)
            .bind(update.away_score)
            .bind(update.finalised)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "score update matched no open event");
            return Ok(None);
        }

        tracing::info!(
            id,
            home_score = update.home_score,
            away_score = update.away_score,
            finalised = update.finalised,
            "Updated event score"
        );

        // Return what the store holds, not the values we sent.
        self.get(id).await
    }
}
