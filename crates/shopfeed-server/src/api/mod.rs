mod inventory;
mod products;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use shopfeed_upstream::{UpstreamClient, UpstreamError};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<UpstreamClient>,
}

/// Fixed-shape JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Lookup miss for `GET /product/{id}`.
    fn invalid_id() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid ID supplied".to_string(),
        }
    }

    /// No endpoint matches the request path. Also used for `/product/{id}`
    /// segments that are not positive integers, which the route contract
    /// treats as unmatched rather than as failed lookups.
    fn route_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Product not found".to_string(),
        }
    }

    /// Upstream fetch or decode failure. The process never crashes on a bad
    /// upstream; it surfaces as a gateway error instead.
    fn upstream_unavailable() -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: "upstream product feed unavailable".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(MessageBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

pub(super) fn map_upstream_error(request_id: &str, error: &UpstreamError) -> ApiError {
    tracing::error!(error = %error, request_id, "upstream fetch failed");
    ApiError::upstream_unavailable()
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/product/{id}", get(products::get_product))
        .route("/store/inventory", get(inventory::list_inventory))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}
