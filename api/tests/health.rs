use std::sync::Arc;

use api::route::routes;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use kernel::model::{id::UserId, user::User};
use kernel::repository::{health::HealthCheckRepository, user::UserRepository};
use registry::AppRegistry;
use shared::error::AppResult;
use tower::util::ServiceExt; // for `oneshot`

struct StaticProbe(bool);

#[async_trait]
impl HealthCheckRepository for StaticProbe {
    async fn check_db(&self) -> bool {
        self.0
    }
}

struct NoUsers;

#[async_trait]
impl UserRepository for NoUsers {
    async fn find_by_id(&self, _user_id: UserId) -> AppResult<Option<User>> {
        Ok(None)
    }
}

fn app(db_alive: bool) -> Router {
    let registry = AppRegistry::from_parts(Arc::new(StaticProbe(db_alive)), Arc::new(NoUsers));
    routes().with_state(registry)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_endpoint_works() {
    let response = app(true).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn db_probe_reflects_store_liveness() {
    let response = app(true).oneshot(get("/health/db")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(false).oneshot(get("/health/db")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
