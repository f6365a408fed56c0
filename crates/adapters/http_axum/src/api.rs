//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod restricted_entities;

use axum::Router;
use axum::routing::get;

use restricted_app::ports::RestrictedEntityRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/restricted-entities",
            get(restricted_entities::list::<R>)
                .post(restricted_entities::create::<R>)
                .put(restricted_entities::update::<R>),
        )
        .route(
            "/restricted-entities/{id}",
            get(restricted_entities::get::<R>).delete(restricted_entities::delete::<R>),
        )
}
