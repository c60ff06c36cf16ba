//! Filter and sort compilation for the catalog list queries.
//!
//! Filter values are always bound as parameters. Sort columns cannot be bound,
//! so they are interpolated into the SQL text, and only identifiers produced by
//! a [`SortColumn`] whitelist ever reach it.

use std::fmt::Write as _;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::error::RepositoryError;

// ── Filter Compiler ────────────────────────────────────────────────────

/// Accumulates `AND`-joined predicates for a list query.
#[derive(Debug, Default)]
pub struct Predicates {
    clauses: Vec<String>,
    args: Vec<i64>,
}

impl Predicates {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column IN (?,?,...)` with one bound argument per value. An empty set
    /// adds nothing, so it never turns into "matches nothing".
    pub fn is_in(mut self, column: &'static str, values: &[i64]) -> Self {
        if values.is_empty() {
            return self;
        }

        let placeholders = vec!["?"; values.len()].join(",");
        self.clauses.push(format!("{column} IN ({placeholders})"));
        self.args.extend_from_slice(values);
        self
    }

    /// `column = TRUE|FALSE` when the value is set; nothing when it is `None`.
    pub fn equals(mut self, column: &'static str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            let literal = if value { "TRUE" } else { "FALSE" };
            self.clauses.push(format!("{column} = {literal}"));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Append the accumulated predicates to `base` as a single `WHERE` clause.
    pub fn compile(self, base: &str) -> CompiledQuery {
        let mut sql = base.trim_end().to_string();
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }

        CompiledQuery {
            sql,
            args: self.args,
        }
    }
}

/// SQL text plus its positional arguments, in binding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub args: Vec<i64>,
}

impl CompiledQuery {
    /// Append an `ORDER BY` clause. `None` leaves the store-defined order.
    pub fn order_by(mut self, order: Option<OrderBy>) -> Self {
        if let Some(order) = order {
            let _ = write!(
                self.sql,
                " ORDER BY {} {}",
                order.column,
                order.direction.as_sql()
            );
        }
        self
    }

    /// Bind every argument in order and fetch all rows as `O`.
    pub async fn fetch_all<O>(&self, pool: &SqlitePool) -> Result<Vec<O>, sqlx::Error>
    where
        O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %self.sql, args = ?self.args, "executing list query");

        let mut query = sqlx::query_as::<Sqlite, O>(&self.sql);
        for arg in &self.args {
            query = query.bind(*arg);
        }
        query.fetch_all(pool).await
    }
}

// ── Sort Compiler ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// The whitelist of sortable columns for one resource kind.
///
/// `parse` maps a request-level attribute name to a variant; `column` returns
/// the literal identifier used in that resource's read query.
pub trait SortColumn: Sized + Copy {
    fn parse(attribute: &str) -> Option<Self>;
    fn column(self) -> &'static str;
}

/// A sort request as received from the caller, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub attribute: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(attribute: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            attribute: attribute.into(),
            direction,
        }
    }

    /// Validate the attribute against `C` and resolve it to a column.
    pub fn compile<C: SortColumn>(&self) -> Result<OrderBy, RepositoryError> {
        let column = C::parse(&self.attribute)
            .ok_or_else(|| RepositoryError::InvalidSortAttribute(self.attribute.clone()))?;

        Ok(OrderBy {
            column: column.column(),
            direction: self.direction,
        })
    }
}

/// Compile an optional sort request. An invalid attribute is an error, never
/// a silent fallback to the unsorted query.
pub fn compile_sort<C: SortColumn>(
    sort: Option<&SortOrder>,
) -> Result<Option<OrderBy>, RepositoryError> {
    sort.map(SortOrder::compile::<C>).transpose()
}

/// A validated `ORDER BY` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    column: &'static str,
    direction: SortDirection,
}

impl OrderBy {
    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "SELECT id, grp, flag FROM items";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ItemSort {
        Id,
        Group,
    }

    impl SortColumn for ItemSort {
        fn parse(attribute: &str) -> Option<Self> {
            match attribute {
                "id" => Some(Self::Id),
                "group" => Some(Self::Group),
                _ => None,
            }
        }

        fn column(self) -> &'static str {
            match self {
                Self::Id => "id",
                Self::Group => "grp",
            }
        }
    }

    #[test]
    fn no_predicates_returns_base_query() {
        let compiled = Predicates::new().compile(BASE);
        assert_eq!(compiled.sql, BASE);
        assert!(compiled.args.is_empty());
    }

    #[test]
    fn trailing_whitespace_in_base_is_trimmed() {
        let compiled = Predicates::new().compile("SELECT id FROM items\n\t\t");
        assert_eq!(compiled.sql, "SELECT id FROM items");
    }

    #[test]
    fn membership_binds_each_value_in_order() {
        let compiled = Predicates::new().is_in("grp", &[5, 1, 9]).compile(BASE);
        assert_eq!(compiled.sql, format!("{BASE} WHERE grp IN (?,?,?)"));
        assert_eq!(compiled.args, vec![5, 1, 9]);
    }

    #[test]
    fn empty_membership_set_is_omitted() {
        let compiled = Predicates::new().is_in("grp", &[]).compile(BASE);
        assert_eq!(compiled.sql, BASE);
        assert!(compiled.args.is_empty());
    }

    #[test]
    fn unset_boolean_is_omitted() {
        let predicates = Predicates::new().equals("flag", None);
        assert!(predicates.is_empty());
        assert_eq!(predicates.compile(BASE).sql, BASE);
    }

    #[test]
    fn explicit_false_is_not_conflated_with_unset() {
        let compiled = Predicates::new().equals("flag", Some(false)).compile(BASE);
        assert_eq!(compiled.sql, format!("{BASE} WHERE flag = FALSE"));
        assert!(compiled.args.is_empty());

        let compiled = Predicates::new().equals("flag", Some(true)).compile(BASE);
        assert_eq!(compiled.sql, format!("{BASE} WHERE flag = TRUE"));
    }

    #[test]
    fn multiple_predicates_share_one_where() {
        let compiled = Predicates::new()
            .is_in("grp", &[1, 5])
            .equals("flag", Some(true))
            .compile(BASE);
        assert_eq!(
            compiled.sql,
            format!("{BASE} WHERE grp IN (?,?) AND flag = TRUE")
        );
        assert_eq!(compiled.sql.matches("WHERE").count(), 1);
        assert_eq!(compiled.args, vec![1, 5]);
    }

    #[test]
    fn sort_defaults_to_ascending() {
        let sort = SortOrder {
            attribute: "group".into(),
            direction: SortDirection::default(),
        };
        let order = sort.compile::<ItemSort>().unwrap();
        assert_eq!(order.column(), "grp");
        assert_eq!(order.direction(), SortDirection::Asc);

        let compiled = Predicates::new().compile(BASE).order_by(Some(order));
        assert_eq!(compiled.sql, format!("{BASE} ORDER BY grp ASC"));
    }

    #[test]
    fn sort_follows_where_clause() {
        let order = SortOrder::new("id", SortDirection::Desc)
            .compile::<ItemSort>()
            .unwrap();
        let compiled = Predicates::new()
            .equals("flag", Some(false))
            .compile(BASE)
            .order_by(Some(order));
        assert_eq!(
            compiled.sql,
            format!("{BASE} WHERE flag = FALSE ORDER BY id DESC")
        );
    }

    #[test]
    fn no_sort_leaves_query_unchanged() {
        let compiled = Predicates::new().compile(BASE).order_by(None);
        assert_eq!(compiled.sql, BASE);
        assert_eq!(compile_sort::<ItemSort>(None).unwrap(), None);
    }

    #[test]
    fn unknown_sort_attribute_is_rejected() {
        for attribute in ["fake_column", "grp", "ID", "", "id; DROP TABLE items"] {
            let sort = SortOrder::new(attribute, SortDirection::Asc);
            let err = compile_sort::<ItemSort>(Some(&sort)).unwrap_err();
            assert!(
                matches!(&err, RepositoryError::InvalidSortAttribute(a) if a == attribute),
                "expected rejection of {attribute:?}, got {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn fetch_all_binds_arguments() {
        let pool = crate::db::connect_in_memory().await.unwrap();
        sqlx::query("CREATE TABLE items (id INTEGER PRIMARY KEY, grp INTEGER NOT NULL, flag BOOLEAN NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        for (id, grp, flag) in [(1, 1, true), (2, 2, false), (3, 5, true), (4, 5, false)] {
            sqlx::query("INSERT INTO items (id, grp, flag) VALUES (?, ?, ?)")
                .bind(id as i64)
                .bind(grp as i64)
                .bind(flag)
                .execute(&pool)
                .await
                .unwrap();
        }

        let order = SortOrder::new("id", SortDirection::Desc)
            .compile::<ItemSort>()
            .unwrap();
        let rows: Vec<(i64, i64, bool)> = Predicates::new()
            .is_in("grp", &[1, 5])
            .equals("flag", Some(true))
            .compile(BASE)
            .order_by(Some(order))
            .fetch_all(&pool)
            .await
            .unwrap();

        assert_eq!(rows, vec![(3, 5, true), (1, 1, true)]);
    }
}
