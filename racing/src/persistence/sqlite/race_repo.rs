//! SQLite-backed implementation of [`RaceRepository`].

use std::sync::Arc;

use catalog_common::query::compile_sort;
use catalog_common::{derive_status, Clock, Predicates, SystemClock};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use super::queries::{RaceSortColumn, MEETING_ID, RACES_LIST, RACE_GET, VISIBLE};
use super::seed;
use crate::persistence::traits::RaceRepository;
use crate::persistence::{Race, RaceFilter, RepositoryError, SortOrder};

/// Positional layout of [`RACES_LIST`] and [`RACE_GET`].
type RaceRow = (i64, i64, String, i64, bool, DateTime<Utc>);

pub struct SqliteRaceRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
    seeded: OnceCell<()>,
}

impl SqliteRaceRepository {
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

    fn map_row(&self, row: RaceRow) -> Race {
        let (id, meeting_id, name, number, visible, advertised_start_time) = row;
        Race {
            id,
            meeting_id,
            name,
            number,
            visible,
            advertised_start_time,
            status: derive_status(advertised_start_time, self.clock.now()),
        }
    }
}

fn apply_filter(filter: Option<&RaceFilter>) -> Predicates {
    match filter {
        Some(filter) => Predicates::new()
            .is_in(MEETING_ID, &filter.meeting_ids)
            .equals(VISIBLE, filter.visible),
        None => Predicates::new(),
    }
}

impl RaceRepository for SqliteRaceRepository {
    async fn init(&self) -> Result<(), RepositoryError> {
        self.seeded
            .get_or_try_init(|| seed::seed_races(&self.pool))
            .await?;
        Ok(())
    }

    async fn list(
        &self,
        filter: Option<&RaceFilter>,
        sort: Option<&SortOrder>,
    ) -> Result<Vec<Race>, RepositoryError> {
        let order = compile_sort::<RaceSortColumn>(sort)?;
        let query = apply_filter(filter).compile(RACES_LIST).order_by(order);

        let rows: Vec<RaceRow> = query.fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(|row| self.map_row(row)).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Race>, RepositoryError> {
        let row: Option<RaceRow> = sqlx::query_as(RACE_GET)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| self.map_row(row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::sqlite::seed::{insert_races, NewRace};
    use crate::persistence::sqlite::Database;
    use crate::persistence::{SortDirection, Status};
    use catalog_common::FixedClock;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn make_race(id: i64, meeting_id: i64, visible: bool, offset_minutes: i64) -> NewRace {
        NewRace {
            id,
            meeting_id,
            name: format!("Race {id}"),
            number: id % 12 + 1,
            visible,
            advertised_start_time: now() + Duration::minutes(offset_minutes),
        }
    }

    async fn repo_with(races: &[NewRace]) -> SqliteRaceRepository {
        let db = Database::new_in_memory().await.unwrap();
        insert_races(db.pool(), races).await.unwrap();
        SqliteRaceRepository::with_clock(db.pool().clone(), Arc::new(FixedClock(now())))
    }

    fn ids(races: &[Race]) -> Vec<i64> {
        races.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_list_without_filter_returns_everything() {
        let repo = repo_with(&[
            make_race(1, 1, true, 10),
            make_race(2, 2, false, -10),
            make_race(3, 5, true, 30),
        ])
        .await;

        let races = repo.list(None, None).await.unwrap();
        assert_eq!(races.len(), 3);

        let unconstrained = repo.list(Some(&RaceFilter::default()), None).await.unwrap();
        assert_eq!(ids(&unconstrained), ids(&races));
    }

    #[tokio::test]
    async fn test_list_empty_table_is_not_an_error() {
        let repo = repo_with(&[]).await;
        let races = repo.list(None, None).await.unwrap();
        assert!(races.is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_meeting_ids() {
        let repo = repo_with(&[
            make_race(1, 1, true, 10),
            make_race(2, 2, true, 10),
            make_race(3, 5, false, 10),
            make_race(4, 7, true, 10),
        ])
        .await;

        let filter = RaceFilter {
            meeting_ids: vec![1, 5],
            visible: None,
        };
        let races = repo.list(Some(&filter), None).await.unwrap();
        let mut found = ids(&races);
        found.sort();
        assert_eq!(found, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_filter_visibility_tri_state() {
        let repo = repo_with(&[
            make_race(1, 1, true, 10),
            make_race(2, 1, false, 10),
            make_race(3, 2, true, 10),
        ])
        .await;

        let visible = RaceFilter {
            visible: Some(true),
            ..Default::default()
        };
        let races = repo.list(Some(&visible), None).await.unwrap();
        assert_eq!(races.len(), 2);
        assert!(races.iter().all(|r| r.visible));

        let hidden = RaceFilter {
            visible: Some(false),
            ..Default::default()
        };
        let races = repo.list(Some(&hidden), None).await.unwrap();
        assert_eq!(ids(&races), vec![2]);

        let unset = RaceFilter::default();
        let races = repo.list(Some(&unset), None).await.unwrap();
        assert_eq!(races.len(), 3);
    }

    #[tokio::test]
    async fn test_filters_are_combined_with_and() {
        let repo = repo_with(&[
            make_race(1, 1, true, 10),
            make_race(2, 1, false, 10),
            make_race(3, 5, false, 10),
            make_race(4, 9, false, 10),
        ])
        .await;

        let filter = RaceFilter {
            meeting_ids: vec![1, 5],
            visible: Some(false),
        };
        let mut found = ids(&repo.list(Some(&filter), None).await.unwrap());
        found.sort();
        assert_eq!(found, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_sort_by_advertised_start_time_both_directions() {
        let repo = repo_with(&[
            make_race(1, 1, true, 30),
            make_race(2, 1, true, -30),
            make_race(3, 1, true, 0),
        ])
        .await;

        let asc = SortOrder::new("advertised_start_time", SortDirection::Asc);
        assert_eq!(ids(&repo.list(None, Some(&asc)).await.unwrap()), vec![2, 3, 1]);

        let desc = SortOrder::new("advertised_start_time", SortDirection::Desc);
        assert_eq!(ids(&repo.list(None, Some(&desc)).await.unwrap()), vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn test_invalid_sort_attribute_is_rejected() {
        let repo = repo_with(&[make_race(1, 1, true, 10)]).await;

        let sort = SortOrder::new("fake_column", SortDirection::Desc);
        let result = repo.list(None, Some(&sort)).await;
        assert!(
            matches!(result, Err(RepositoryError::InvalidSortAttribute(ref a)) if a == "fake_column"),
            "expected InvalidSortAttribute, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_status_is_derived_against_clock() {
        let repo = repo_with(&[
            make_race(1, 2, true, 60),
            make_race(2, 2, false, -60),
            make_race(3, 2, false, 0),
        ])
        .await;

        let asc = SortOrder::new("id", SortDirection::Asc);
        let races = repo.list(None, Some(&asc)).await.unwrap();
        assert_eq!(races[0].status, Status::Open);
        assert_eq!(races[1].status, Status::Closed);
        // Starting exactly now counts as closed.
        assert_eq!(races[2].status, Status::Closed);
    }

    #[tokio::test]
    async fn test_get_returns_race_or_none() {
        let repo = repo_with(&[make_race(7, 3, true, 90)]).await;

        let race = repo.get(7).await.unwrap().unwrap();
        assert_eq!(race.id, 7);
        assert_eq!(race.meeting_id, 3);
        assert_eq!(race.name, "Race 7");
        assert!(race.visible);
        assert_eq!(race.advertised_start_time, now() + Duration::minutes(90));
        assert_eq!(race.status, Status::Open);

        assert!(repo.get(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_init_seeds_once() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = SqliteRaceRepository::new(db.pool().clone());

        repo.init().await.unwrap();
        let first = repo.list(None, None).await.unwrap().len();
        assert!(first > 0);

        repo.init().await.unwrap();
        let second = repo.list(None, None).await.unwrap().len();
        assert_eq!(first, second);
    }
}
