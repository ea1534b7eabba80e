use axum::{extract::State, Extension, Json};

use shopfeed_core::InventoryEntry;
use shopfeed_upstream::transform_inventory;

use crate::middleware::RequestId;

use super::{map_upstream_error, ApiError, AppState};

pub(super) async fn list_inventory(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<InventoryEntry>>, ApiError> {
    let raw = state
        .client
        .fetch_products()
        .await
        .map_err(|e| map_upstream_error(&req_id.0, &e))?;

    Ok(Json(transform_inventory(&raw)))
}
