use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::server::handlers::{dispatch, UserService};

/// Binds the user operations to `route`, which must start with `/`.
pub fn router(route: &str, service: UserService) -> Router {
    Router::new()
        .route(route, any(dispatch))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
