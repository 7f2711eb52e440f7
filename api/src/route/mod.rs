pub mod health;
pub mod user;

use axum::Router;
use registry::AppRegistry;
use tower_http::cors::{Any, CorsLayer};

use self::{health::build_health_check_routers, user::build_user_routers};

/// Composes the public surface. The CORS layer wraps the composed router so
/// that success, error, and routing-miss responses all carry
/// `Access-Control-Allow-Origin: *`.
pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_user_routers())
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
