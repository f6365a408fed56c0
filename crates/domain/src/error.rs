//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RestrictedError`] via `#[from]`.

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum RestrictedError {
    /// The request shape broke a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// No record exists for the requested identifier.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed. Adapters box their own error type here.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Client shape errors, detected before any storage call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A create request carried an identifier.
    #[error("A new restrictedEntity cannot already have an ID")]
    IdExists,

    /// An update request carried no identifier.
    #[error("Invalid id")]
    IdNull,

    /// The `sort` parameter named an unknown property or direction.
    #[error("Invalid sort parameter: {0}")]
    InvalidSort(String),

    /// The request body is not a JSON record (bad syntax, wrong types, …).
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl ValidationError {
    /// Machine-readable code sent back to clients.
    #[must_use]
    pub fn error_key(&self) -> &'static str {
        match self {
            Self::IdExists => "idexists",
            Self::IdNull => "idnull",
            Self::InvalidSort(_) => "sortinvalid",
            Self::MalformedBody(_) => "bodyinvalid",
        }
    }

    /// Name of the request field that failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::IdExists | Self::IdNull => "id",
            Self::InvalidSort(_) => "sort",
            Self::MalformedBody(_) => "body",
        }
    }
}

/// Lookup miss for a given record kind and identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
