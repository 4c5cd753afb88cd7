//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use spothub_app::ports::{SpotRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the spot and user routes at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, UR>(state: AppState<SR, UR>) -> Router
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use spothub_app::ports::{SpotMap, UserMap};
    use spothub_app::services::spot_service::SpotService;
    use spothub_app::services::user_service::UserService;
    use spothub_domain::error::SpotHubError;
    use spothub_domain::id::{SpotId, UserId};
    use spothub_domain::record::Keyed;
    use spothub_domain::spot::Spot;
    use spothub_domain::user::{User, UserPatch};
    use tower::ServiceExt;

    struct StubSpotRepo;
    struct StubUserRepo;

    impl SpotRepository for StubSpotRepo {
        async fn create(&self, spot: Spot) -> Result<Keyed<SpotId, Spot>, SpotHubError> {
            Ok(Keyed::new(SpotId::from_sequence(1), spot))
        }
        async fn get_by_id(&self, _id: &SpotId) -> Result<Option<Spot>, SpotHubError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<SpotMap, SpotHubError> {
            Ok(SpotMap::new())
        }
        async fn find_by_zipcode(
            &self,
            _zipcode: &str,
        ) -> Result<Vec<(SpotId, Spot)>, SpotHubError> {
            Ok(vec![])
        }
        async fn delete(&self, _id: &SpotId) -> Result<Option<Spot>, SpotHubError> {
            Ok(None)
        }
    }

    impl UserRepository for StubUserRepo {
        async fn create(&self, user: User) -> Result<Keyed<UserId, User>, SpotHubError> {
            Ok(Keyed::new(UserId::from_sequence(1), user))
        }
        async fn get_by_id(&self, _id: &UserId) -> Result<Option<User>, SpotHubError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<UserMap, SpotHubError> {
            Ok(UserMap::new())
        }
        async fn patch(
            &self,
            _id: &UserId,
            _patch: UserPatch,
        ) -> Result<Option<User>, SpotHubError> {
            Ok(None)
        }
        async fn delete(&self, _id: &UserId) -> Result<Option<User>, SpotHubError> {
            Ok(None)
        }
    }

    fn test_state() -> AppState<StubSpotRepo, StubUserRepo> {
        AppState::new(SpotService::new(StubSpotRepo), UserService::new(StubUserRepo))
    }

    fn form_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_no_content_when_spot_unknown() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/spots/89320e2752aa13db5dbc61060d897af0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn should_return_json_message_when_deleting_unknown_spot() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/spots/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["message"], "Plass med id abc finnes ikke i databasen.");
    }

    #[tokio::test]
    async fn should_return_empty_array_for_unknown_zipcode() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/spots/location/Oslo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "[]");
    }

    #[tokio::test]
    async fn should_create_spot_from_form_body() {
        let app = build(test_state());

        let response = app
            .oneshot(form_request(
                "POST",
                "/spots",
                "ownerId=c81e&address=Batmans%20Cave&zipcode=72000&hour_price=75",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["id"], SpotId::from_sequence(1).to_string());
        assert_eq!(body["ownerId"], "c81e");
        assert_eq!(body["address"], "Batmans Cave");
        assert_eq!(body["hour_price"], "75");
        assert!(body.get("day_price").is_none());
    }

    #[tokio::test]
    async fn should_create_user_with_json_content_type() {
        let app = build(test_state());

        let response = app
            .oneshot(form_request(
                "POST",
                "/users",
                "firstname=Lucius&lastname=Fox&isFirm=true",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["isFirm"], true);
    }

    #[tokio::test]
    async fn should_reject_user_with_invalid_is_firm() {
        let app = build(test_state());

        let response = app
            .oneshot(form_request("POST", "/users", "firstname=Lucius&isFirm=kanskje"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().contains("isFirm"));
    }

    #[tokio::test]
    async fn should_return_plain_text_when_deleting_unknown_user() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/users/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(
            body_text(response).await,
            "Bruker med id 42 finnes ikke i databasen."
        );
    }

    #[tokio::test]
    async fn should_return_no_content_when_patching_unknown_user() {
        let app = build(test_state());

        let response = app
            .oneshot(form_request("PATCH", "/users/42", "firstname=Ghost"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
