use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{PlStatus, PriceTable, TradeRecord};
use crate::engine::compute_pl;
use crate::error::AppError;
use crate::presentation::format_pl;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlRequest {
    #[serde(default)]
    pub prices: PriceTable,
    pub trade: TradeRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlResponse {
    pub pl: f64,
    pub pl_display: String,
    pub status: PlStatus,
}

/// `POST /v1/pl`: ad-hoc P/L for one trade against caller-supplied prices.
pub async fn post_pl(
    payload: Result<Json<PlRequest>, JsonRejection>,
) -> Result<Json<PlResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let pl = compute_pl(&request.prices, &request.trade);

    Ok(Json(PlResponse {
        pl,
        pl_display: format_pl(pl),
        status: PlStatus::from_pl(pl),
    }))
}
