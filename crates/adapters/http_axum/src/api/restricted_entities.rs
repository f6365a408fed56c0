//! JSON REST handlers for restricted entities.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use restricted_app::ports::RestrictedEntityRepository;
use restricted_domain::error::{NotFoundError, RestrictedError, ValidationError};
use restricted_domain::id::RestrictedEntityId;
use restricted_domain::restricted_entity::{RestrictedEntity, RestrictedEntitySort};

use crate::alert::Alerts;
use crate::error::ApiError;
use crate::state::AppState;

/// Public path of the collection, used to build `Location` headers.
pub const RESOURCE_PATH: &str = "/api/restricted-entities";

/// Query string accepted by the list endpoint.
///
/// A single `sort` value is accepted; repeating it is a `sortinvalid` error.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// `property[,asc|desc]`
    pub sort: Option<String>,
}

/// Unwrap a JSON body, turning extractor failures into a 400 problem.
fn json_body(
    alerts: &Alerts,
    payload: Result<Json<RestrictedEntity>, JsonRejection>,
) -> Result<RestrictedEntity, ApiError> {
    payload
        .map(|Json(entity)| entity)
        .map_err(|err| ApiError::rejected(alerts, ValidationError::MalformedBody(err.body_text())))
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RestrictedEntity>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RestrictedEntity>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created {
        headers: HeaderMap,
        body: Json<RestrictedEntity>,
    },
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created { headers, body } => (StatusCode::CREATED, headers, body).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok {
        headers: HeaderMap,
        body: Json<RestrictedEntity>,
    },
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok { headers, body } => (StatusCode::OK, headers, body).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent { headers: HeaderMap },
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent { headers } => (StatusCode::NO_CONTENT, headers).into_response(),
        }
    }
}

/// `GET /api/restricted-entities?sort=id,desc`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|err| {
        ApiError::rejected(&state.alerts, ValidationError::InvalidSort(err.body_text()))
    })?;
    tracing::debug!(sort = ?query.sort, "REST request to get all RestrictedEntities");
    let sort = query
        .sort
        .as_deref()
        .map(str::parse::<RestrictedEntitySort>)
        .transpose()
        .map_err(|err| ApiError::rejected(&state.alerts, err))?
        .unwrap_or_default();

    let entities = state.restricted_entity_service.find_all(sort).await?;
    Ok(ListResponse::Ok(Json(entities)))
}

/// `GET /api/restricted-entities/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<RestrictedEntityId>,
) -> Result<GetResponse, ApiError>
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    tracing::debug!(%id, "REST request to get RestrictedEntity");
    let entity = state
        .restricted_entity_service
        .find_one(id)
        .await?
        .ok_or_else(|| {
            RestrictedError::from(NotFoundError {
                entity: "RestrictedEntity",
                id: id.to_string(),
            })
        })?;
    Ok(GetResponse::Ok(Json(entity)))
}

/// `POST /api/restricted-entities`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<RestrictedEntity>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    let entity = json_body(&state.alerts, payload)?;
    tracing::debug!(%entity, "REST request to save RestrictedEntity");
    entity
        .ensure_new()
        .map_err(|err| ApiError::rejected(&state.alerts, err))?;

    let created = state.restricted_entity_service.save(entity).await?;
    let id = created
        .id
        .ok_or_else(|| RestrictedError::Storage("insert returned no id".into()))?;

    let mut headers = state.alerts.created(id);
    if let Ok(location) = HeaderValue::try_from(format!("{RESOURCE_PATH}/{id}")) {
        headers.insert(LOCATION, location);
    }

    Ok(CreateResponse::Created {
        headers,
        body: Json(created),
    })
}

/// `PUT /api/restricted-entities`
///
/// Targets an existing row; an id with no row answers 404.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<RestrictedEntity>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    let entity = json_body(&state.alerts, payload)?;
    tracing::debug!(%entity, "REST request to update RestrictedEntity");
    let id = entity
        .ensure_persisted()
        .map_err(|err| ApiError::rejected(&state.alerts, err))?;

    let updated = state.restricted_entity_service.save(entity).await?;

    Ok(UpdateResponse::Ok {
        headers: state.alerts.updated(id),
        body: Json(updated),
    })
}

/// `DELETE /api/restricted-entities/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<RestrictedEntityId>,
) -> Result<DeleteResponse, ApiError>
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    tracing::debug!(%id, "REST request to delete RestrictedEntity");
    state.restricted_entity_service.delete(id).await?;
    Ok(DeleteResponse::NoContent {
        headers: state.alerts.deleted(id),
    })
}
