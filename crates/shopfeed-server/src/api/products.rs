use axum::{
    extract::{Path, State},
    Extension, Json,
};

use shopfeed_core::Product;
use shopfeed_upstream::{find_product, transform_products};

use crate::middleware::RequestId;

use super::{map_upstream_error, ApiError, AppState};

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let raw = state
        .client
        .fetch_products()
        .await
        .map_err(|e| map_upstream_error(&req_id.0, &e))?;

    Ok(Json(transform_products(&raw)))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    // The route only serves positive integer ids. Anything else (`abc`, `-1`)
    // is an unmatched route, not a failed lookup, so it gets the same JSON
    // 404 body as the fallback instead of an extractor rejection.
    let product_id = product_id
        .parse::<u64>()
        .map_err(|_| ApiError::route_not_found())?;

    let raw = state
        .client
        .fetch_products()
        .await
        .map_err(|e| map_upstream_error(&req_id.0, &e))?;

    // Upstream ids are i64; a path id beyond that range can't match anything.
    let target_id = i64::try_from(product_id).map_err(|_| ApiError::invalid_id())?;

    find_product(target_id, &raw)
        .map(Json)
        .ok_or_else(ApiError::invalid_id)
}
