//! Storage port: repository traits for persistence.

use std::future::Future;

use restricted_domain::error::RestrictedError;
use restricted_domain::id::RestrictedEntityId;
use restricted_domain::restricted_entity::{RestrictedEntity, RestrictedEntitySortKey};
use restricted_domain::sort::Sort;

/// Generic CRUD persistence for a record type `T` keyed by `Id`.
///
/// The storage adapter is the sole source of truth; records handed back are
/// transient copies.
pub trait CrudRepository<T, Id> {
    /// Property set a listing may be ordered by.
    type SortKey;

    /// Insert when the record has no id (the adapter assigns one), otherwise
    /// replace the row with that id.
    ///
    /// Replacing a row that does not exist fails with
    /// [`RestrictedError::NotFound`]; there is no blind upsert.
    fn save(&self, record: T) -> impl Future<Output = Result<T, RestrictedError>> + Send;

    /// Every record, in the requested order.
    fn find_all(
        &self,
        sort: Sort<Self::SortKey>,
    ) -> impl Future<Output = Result<Vec<T>, RestrictedError>> + Send;

    fn find_by_id(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<Option<T>, RestrictedError>> + Send;

    /// Remove the record. Deleting an unknown id is a no-op.
    fn delete_by_id(&self, id: Id) -> impl Future<Output = Result<(), RestrictedError>> + Send;
}

/// [`CrudRepository`] bound to [`RestrictedEntity`].
pub trait RestrictedEntityRepository:
    CrudRepository<RestrictedEntity, RestrictedEntityId, SortKey = RestrictedEntitySortKey>
{
}

impl<R> RestrictedEntityRepository for R where
    R: CrudRepository<RestrictedEntity, RestrictedEntityId, SortKey = RestrictedEntitySortKey>
{
}
