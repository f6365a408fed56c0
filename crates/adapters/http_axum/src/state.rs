//! Shared application state for axum handlers.

use std::sync::Arc;

use restricted_app::ports::RestrictedEntityRepository;
use restricted_app::services::restricted_entity_service::RestrictedEntityService;

use crate::alert::Alerts;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Restricted entity CRUD service.
    pub restricted_entity_service: Arc<RestrictedEntityService<R>>,
    /// Alert header builder.
    pub alerts: Arc<Alerts>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            restricted_entity_service: Arc::clone(&self.restricted_entity_service),
            alerts: Arc::clone(&self.alerts),
        }
    }
}

impl<R> AppState<R>
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(restricted_entity_service: RestrictedEntityService<R>, alerts: Alerts) -> Self {
        Self {
            restricted_entity_service: Arc::new(restricted_entity_service),
            alerts: Arc::new(alerts),
        }
    }
}
