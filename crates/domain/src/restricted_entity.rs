//! `RestrictedEntity`: the single persisted record exposed by this service.
//!
//! A record is created without an id, receives one from the storage adapter
//! on first insert, and keeps it for the rest of its life.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::RestrictedEntityId;
use crate::sort::Sort;

/// One row of the `restricted_entity` table.
///
/// Equality is identity-based: two records are equal only when both carry an
/// id and the ids match. There is no `Eq`: a record without an id is not
/// equal to itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictedEntity {
    pub id: Option<RestrictedEntityId>,
    pub name: Option<String>,
}

impl RestrictedEntity {
    /// Create a builder for constructing a [`RestrictedEntity`].
    #[must_use]
    pub fn builder() -> RestrictedEntityBuilder {
        RestrictedEntityBuilder::default()
    }

    /// `true` when both records carry an id and the ids are equal.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Check that this record has never been persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdExists`] when `id` is already set.
    pub fn ensure_new(&self) -> Result<(), ValidationError> {
        match self.id {
            Some(_) => Err(ValidationError::IdExists),
            None => Ok(()),
        }
    }

    /// Check that this record targets an existing row and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdNull`] when `id` is missing.
    pub fn ensure_persisted(&self) -> Result<RestrictedEntityId, ValidationError> {
        self.id.ok_or(ValidationError::IdNull)
    }

    /// Return a copy of this record carrying the given id.
    #[must_use]
    pub fn with_id(mut self, id: RestrictedEntityId) -> Self {
        self.id = Some(id);
        self
    }
}

impl PartialEq for RestrictedEntity {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl fmt::Display for RestrictedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RestrictedEntity{{id=")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => write!(f, "null")?,
        }
        match &self.name {
            Some(name) => write!(f, ", name='{name}'}}"),
            None => write!(f, ", name=null}}"),
        }
    }
}

/// Properties a listing of [`RestrictedEntity`] can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestrictedEntitySortKey {
    #[default]
    Id,
    Name,
}

impl FromStr for RestrictedEntitySortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            _ => Err(()),
        }
    }
}

/// Sort order accepted when listing [`RestrictedEntity`] records.
pub type RestrictedEntitySort = Sort<RestrictedEntitySortKey>;

/// Step-by-step builder for [`RestrictedEntity`].
#[derive(Debug, Default)]
pub struct RestrictedEntityBuilder {
    id: Option<RestrictedEntityId>,
    name: Option<String>,
}

impl RestrictedEntityBuilder {
    #[must_use]
    pub fn id(mut self, id: RestrictedEntityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder. No field is mandatory.
    #[must_use]
    pub fn build(self) -> RestrictedEntity {
        RestrictedEntity {
            id: self.id,
            name: self.name,
        }
    }
}
