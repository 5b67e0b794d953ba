//! Route table of the HTTP exposure
//!
//! - GET /health, /healthz - health check
//! - GET /hotels, /cars - server-rendered listing pages
//! - GET /api/hotels, /api/cars - the same listings as paginated JSON
//!
//! Every listing route accepts `name`/`model`, `category`, `brand`, `sort`
//! and `page` query parameters.

use super::handlers::{cars_page, health_check, hotels_page, list_cars, list_hotels};
use super::host::ServerHost;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the listing routes over a host
pub fn build_routes(host: Arc<ServerHost>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/hotels", get(hotels_page))
        .route("/cars", get(cars_page))
        .route("/api/hotels", get(list_hotels))
        .route("/api/cars", get(list_cars))
        .with_state(host)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> Router {
        let host = ServerHost::new(FrontendConfig::default()).expect("should build host");
        build_routes(Arc::new(host))
    }

    #[tokio::test]
    async fn test_listing_routes_respond() {
        for path in ["/health", "/healthz", "/hotels", "/cars", "/api/hotels", "/api/cars"] {
            let request = Request::builder().uri(path).body(Body::empty()).unwrap();
            let response = router().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::builder().uri("/flights").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
