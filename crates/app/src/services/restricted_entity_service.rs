//! Restricted entity service: pass-through use-cases over the repository.

use restricted_domain::error::RestrictedError;
use restricted_domain::id::RestrictedEntityId;
use restricted_domain::restricted_entity::{RestrictedEntity, RestrictedEntitySort};

use crate::ports::RestrictedEntityRepository;

/// Application service for [`RestrictedEntity`] CRUD operations.
///
/// Adds no invariants of its own: request-shape checks happen at the
/// driving adapter, consistency is the storage adapter's concern.
pub struct RestrictedEntityService<R> {
    repo: R,
}

impl<R: RestrictedEntityRepository> RestrictedEntityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Save a record, returning the persisted copy (with its id populated
    /// when it was new).
    ///
    /// # Errors
    ///
    /// Returns [`RestrictedError::NotFound`] when updating an id that has no
    /// row, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, entity), fields(id = ?entity.id))]
    pub async fn save(&self, entity: RestrictedEntity) -> Result<RestrictedEntity, RestrictedError> {
        tracing::debug!(%entity, "request to save RestrictedEntity");
        self.repo.save(entity).await
    }

    /// List all records in the requested order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(
        &self,
        sort: RestrictedEntitySort,
    ) -> Result<Vec<RestrictedEntity>, RestrictedError> {
        tracing::debug!("request to get all RestrictedEntities");
        self.repo.find_all(sort).await
    }

    /// Look up one record by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_one(
        &self,
        id: RestrictedEntityId,
    ) -> Result<Option<RestrictedEntity>, RestrictedError> {
        tracing::debug!(%id, "request to get RestrictedEntity");
        self.repo.find_by_id(id).await
    }

    /// Delete a record by id. Succeeds whether or not it existed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: RestrictedEntityId) -> Result<(), RestrictedError> {
        tracing::debug!(%id, "request to delete RestrictedEntity");
        self.repo.delete_by_id(id).await
    }
}
