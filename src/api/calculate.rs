use axum::extract::rejection::{QueryRejection, StringRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{PlStatus, Token, TradeResult};
use crate::engine::{calculate_with_diagnostics, CalcOutcome};
use crate::error::AppError;
use crate::parse::SkippedInput;
use crate::presentation::{format_pl, format_price, ColorAssigner};

const NO_TRADES_MESSAGE: &str = "No trades found to calculate.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateQuery {
    pub diagnostics: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculateStatus {
    Ranked,
    NoTrades,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceView {
    pub token: Token,
    pub price: f64,
    pub price_display: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeView {
    #[serde(flatten)]
    pub result: TradeResult,
    pub pl_display: String,
    pub status: PlStatus,
    pub sell_color: String,
    pub buy_color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedView {
    pub prices: Vec<SkippedInput>,
    pub trades: Vec<SkippedInput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub status: CalculateStatus,
    pub prices: Vec<PriceView>,
    pub trades: Vec<TradeView>,
    pub total: f64,
    pub total_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkippedView>,
}

/// `POST /v1/calculate`: body is the raw price line + trade lines.
pub async fn post_calculate(
    query: Result<Query<CalculateQuery>, QueryRejection>,
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let body = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let (outcome, diagnostics) = calculate_with_diagnostics(&body).map_err(|e| {
        tracing::debug!(error = %e, "Calculation rejected");
        AppError::from(e)
    })?;

    let colors = state.colors.as_ref();

    let prices = outcome
        .prices()
        .iter()
        .map(|(token, price)| PriceView {
            token: token.clone(),
            price,
            price_display: format_price(price),
            color: colors.color_for(token.as_str()),
        })
        .collect();

    let trades = outcome
        .results()
        .iter()
        .map(|result| trade_view(result, colors))
        .collect();

    let (status, message) = match &outcome {
        CalcOutcome::NoTrades { .. } => {
            (CalculateStatus::NoTrades, Some(NO_TRADES_MESSAGE.to_string()))
        }
        CalcOutcome::Ranked(_) => (CalculateStatus::Ranked, None),
    };

    let skipped = params.diagnostics.unwrap_or(false).then(|| SkippedView {
        prices: diagnostics.skipped_prices,
        trades: diagnostics.skipped_trades,
    });

    let total = outcome.total();

    Ok(Json(CalculateResponse {
        status,
        prices,
        trades,
        total,
        total_display: format_pl(total),
        message,
        skipped,
    }))
}

fn trade_view(result: &TradeResult, colors: &dyn ColorAssigner) -> TradeView {
    TradeView {
        pl_display: format_pl(result.pl),
        status: PlStatus::from_pl(result.pl),
        sell_color: colors.color_for(result.trade.sell_token.as_str()),
        buy_color: colors.color_for(result.trade.buy_token.as_str()),
        result: result.clone(),
    }
}
