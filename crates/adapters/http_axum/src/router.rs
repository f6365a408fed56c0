//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use restricted_app::ports::RestrictedEntityRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and exposes `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: RestrictedEntityRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Alerts;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use restricted_app::ports::CrudRepository;
    use restricted_app::services::restricted_entity_service::RestrictedEntityService;
    use restricted_domain::error::{NotFoundError, RestrictedError};
    use restricted_domain::id::RestrictedEntityId;
    use restricted_domain::restricted_entity::{RestrictedEntity, RestrictedEntitySortKey};
    use restricted_domain::sort::{Direction, Sort};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const KNOWN_ID: i64 = 1;
    const BROKEN_ID: i64 = 500;

    /// Knows a single record with id 1; id 500 simulates a storage failure.
    struct StubRepo;

    fn known() -> RestrictedEntity {
        RestrictedEntity::builder()
            .id(RestrictedEntityId::new(KNOWN_ID))
            .name("AAAAAAAAAA")
            .build()
    }

    fn broken() -> RestrictedError {
        RestrictedError::Storage("connection lost".into())
    }

    impl CrudRepository<RestrictedEntity, RestrictedEntityId> for StubRepo {
        type SortKey = RestrictedEntitySortKey;

        async fn save(&self, entity: RestrictedEntity) -> Result<RestrictedEntity, RestrictedError> {
            match entity.id.map(RestrictedEntityId::get) {
                None => Ok(entity.with_id(RestrictedEntityId::new(2))),
                Some(KNOWN_ID) => Ok(entity),
                Some(BROKEN_ID) => Err(broken()),
                Some(id) => Err(NotFoundError {
                    entity: "RestrictedEntity",
                    id: id.to_string(),
                }
                .into()),
            }
        }

        async fn find_all(
            &self,
            sort: Sort<RestrictedEntitySortKey>,
        ) -> Result<Vec<RestrictedEntity>, RestrictedError> {
            let second = RestrictedEntity::builder()
                .id(RestrictedEntityId::new(2))
                .name("BBBBBBBBBB")
                .build();
            let mut all = vec![known(), second];
            if sort.direction == Direction::Desc {
                all.reverse();
            }
            Ok(all)
        }

        async fn find_by_id(
            &self,
            id: RestrictedEntityId,
        ) -> Result<Option<RestrictedEntity>, RestrictedError> {
            match id.get() {
                KNOWN_ID => Ok(Some(known())),
                BROKEN_ID => Err(broken()),
                _ => Ok(None),
            }
        }

        async fn delete_by_id(&self, _id: RestrictedEntityId) -> Result<(), RestrictedError> {
            Ok(())
        }
    }

    fn app() -> Router {
        let alerts = Alerts::new("restrictedMicroserviceApp").unwrap();
        build(AppState::new(RestrictedEntityService::new(StubRepo), alerts))
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app().oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_create_with_location_and_alert_headers() {
        let body = json!({ "name": "AAAAAAAAAA" });
        let response = app()
            .oneshot(json_request("POST", "/api/restricted-entities", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/api/restricted-entities/2"
        );
        assert_eq!(
            response.headers()["x-restrictedmicroserviceapp-params"],
            "2"
        );
        assert_eq!(
            body_json(response).await,
            json!({ "id": 2, "name": "AAAAAAAAAA" })
        );
    }

    #[tokio::test]
    async fn should_reject_create_when_id_present() {
        let body = json!({ "id": 1, "name": "AAAAAAAAAA" });
        let response = app()
            .oneshot(json_request("POST", "/api/restricted-entities", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["x-restrictedmicroserviceapp-error"],
            "error.idexists"
        );
        let problem = body_json(response).await;
        assert_eq!(problem["errorKey"], "idexists");
        assert_eq!(problem["field"], "id");
        assert_eq!(problem["status"], 400);
        assert_eq!(problem["message"], "error.idexists");
    }

    #[tokio::test]
    async fn should_reject_update_when_id_missing() {
        let body = json!({ "id": null, "name": "BBBBBBBBBB" });
        let response = app()
            .oneshot(json_request("PUT", "/api/restricted-entities", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem = body_json(response).await;
        assert_eq!(problem["errorKey"], "idnull");
        assert_eq!(problem["title"], "Invalid id");
    }

    #[tokio::test]
    async fn should_update_when_id_known() {
        let body = json!({ "id": KNOWN_ID, "name": "BBBBBBBBBB" });
        let response = app()
            .oneshot(json_request("PUT", "/api/restricted-entities", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["x-restrictedmicroserviceapp-alert"],
            "A restrictedMicroserviceRestrictedEntity is updated with identifier 1"
        );
        assert_eq!(body_json(response).await["name"], "BBBBBBBBBB");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_id() {
        let body = json!({ "id": 77, "name": "BBBBBBBBBB" });
        let response = app()
            .oneshot(json_request("PUT", "/api/restricted-entities", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_ignore_unknown_json_fields() {
        let body = json!({ "myField": "AAAAAAAAAA", "extra": 1 });
        let response = app()
            .oneshot(json_request("POST", "/api/restricted-entities", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({ "id": 2, "name": null }));
    }

    #[tokio::test]
    async fn should_reject_wrongly_typed_id_with_problem_body() {
        let body = json!({ "id": "abc", "name": "x" });
        let response = app()
            .oneshot(json_request("POST", "/api/restricted-entities", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["x-restrictedmicroserviceapp-error"],
            "error.bodyinvalid"
        );
        let problem = body_json(response).await;
        assert_eq!(problem["errorKey"], "bodyinvalid");
        assert_eq!(problem["field"], "body");
        assert_eq!(problem["status"], 400);
    }

    #[tokio::test]
    async fn should_reject_invalid_json_syntax_on_update() {
        let request = Request::builder()
            .method("PUT")
            .uri("/api/restricted-entities")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"id\": 1,"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["errorKey"], "bodyinvalid");
    }

    #[tokio::test]
    async fn should_reject_repeated_sort_parameter() {
        let response = app()
            .oneshot(empty_request(
                "GET",
                "/api/restricted-entities?sort=name,asc&sort=id,desc",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem = body_json(response).await;
        assert_eq!(problem["errorKey"], "sortinvalid");
        assert_eq!(problem["field"], "sort");
    }

    #[tokio::test]
    async fn should_list_in_requested_direction() {
        let response = app()
            .oneshot(empty_request("GET", "/api/restricted-entities?sort=id,desc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let list = body_json(response).await;
        assert_eq!(list[0]["id"], 2);
        assert_eq!(list[1]["id"], 1);
    }

    #[tokio::test]
    async fn should_reject_invalid_sort() {
        let response = app()
            .oneshot(empty_request("GET", "/api/restricted-entities?sort=color"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem = body_json(response).await;
        assert_eq!(problem["errorKey"], "sortinvalid");
        assert_eq!(problem["field"], "sort");
    }

    #[tokio::test]
    async fn should_get_known_record() {
        let response = app()
            .oneshot(empty_request("GET", "/api/restricted-entities/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "id": 1, "name": "AAAAAAAAAA" })
        );
    }

    #[tokio::test]
    async fn should_return_empty_not_found_when_record_missing() {
        let uri = format!("/api/restricted-entities/{}", i64::MAX);
        let response = app().oneshot(empty_request("GET", &uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn should_reject_non_numeric_id() {
        let response = app()
            .oneshot(empty_request("GET", "/api/restricted-entities/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_no_content_when_deleting() {
        let response = app()
            .oneshot(empty_request("DELETE", "/api/restricted-entities/999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers()["x-restrictedmicroserviceapp-alert"],
            "A restrictedMicroserviceRestrictedEntity is deleted with identifier 999"
        );
    }

    #[tokio::test]
    async fn should_map_storage_failure_to_internal_error() {
        let response = app()
            .oneshot(empty_request("GET", "/api/restricted-entities/500"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let problem = body_json(response).await;
        assert_eq!(problem["title"], "internal server error");
        assert!(problem.get("errorKey").is_none());
    }
}
