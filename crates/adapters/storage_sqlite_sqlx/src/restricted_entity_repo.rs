//! `SQLite` implementation of [`RestrictedEntityRepository`](restricted_app::ports::RestrictedEntityRepository).

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use restricted_app::ports::CrudRepository;
use restricted_domain::error::{NotFoundError, RestrictedError};
use restricted_domain::id::RestrictedEntityId;
use restricted_domain::restricted_entity::{RestrictedEntity, RestrictedEntitySortKey};
use restricted_domain::sort::{Direction, Sort};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`RestrictedEntity`].
struct Wrapper(RestrictedEntity);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<RestrictedEntity> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;

        Ok(Self(RestrictedEntity {
            id: Some(RestrictedEntityId::new(id)),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO restricted_entity (name) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT id, name FROM restricted_entity WHERE id = ?";
const UPDATE: &str = "UPDATE restricted_entity SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM restricted_entity WHERE id = ?";

/// `SELECT` for a listing. Only closed enum values reach the SQL text.
fn select_all(sort: Sort<RestrictedEntitySortKey>) -> &'static str {
    use Direction::{Asc, Desc};
    use RestrictedEntitySortKey::{Id, Name};

    match (sort.property, sort.direction) {
        (Id, Asc) => "SELECT id, name FROM restricted_entity ORDER BY id ASC",
        (Id, Desc) => "SELECT id, name FROM restricted_entity ORDER BY id DESC",
        (Name, Asc) => "SELECT id, name FROM restricted_entity ORDER BY name ASC, id ASC",
        (Name, Desc) => "SELECT id, name FROM restricted_entity ORDER BY name DESC, id DESC",
    }
}

/// `SQLite`-backed restricted entity repository.
pub struct SqliteRestrictedEntityRepository {
    pool: SqlitePool,
}

impl SqliteRestrictedEntityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CrudRepository<RestrictedEntity, RestrictedEntityId> for SqliteRestrictedEntityRepository {
    type SortKey = RestrictedEntitySortKey;

    fn save(
        &self,
        entity: RestrictedEntity,
    ) -> impl Future<Output = Result<RestrictedEntity, RestrictedError>> + Send {
        let pool = self.pool.clone();
        async move {
            let Some(id) = entity.id else {
                let result = sqlx::query(INSERT)
                    .bind(&entity.name)
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;

                let id = RestrictedEntityId::new(result.last_insert_rowid());
                tracing::debug!(%id, "inserted restricted entity");
                return Ok(entity.with_id(id));
            };

            let result = sqlx::query(UPDATE)
                .bind(&entity.name)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "RestrictedEntity",
                    id: id.to_string(),
                }
                .into());
            }

            Ok(entity)
        }
    }

    fn find_all(
        &self,
        sort: Sort<RestrictedEntitySortKey>,
    ) -> impl Future<Output = Result<Vec<RestrictedEntity>, RestrictedError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(select_all(sort))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_id(
        &self,
        id: RestrictedEntityId,
    ) -> impl Future<Output = Result<Option<RestrictedEntity>, RestrictedError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete_by_id(
        &self,
        id: RestrictedEntityId,
    ) -> impl Future<Output = Result<(), RestrictedError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
