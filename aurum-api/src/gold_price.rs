use axum::{extract::State, routing::get, Json, Router};
use aurum_store::reference_price::{CURRENCY, UNIT};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPriceResponse {
    pub success: bool,
    pub gold_price: f64,
    pub currency: &'static str,
    pub unit: &'static str,
    /// When this value was read
    pub last_updated: DateTime<Utc>,
    /// When the simulator last produced a value, if it has yet
    pub refreshed_at: Option<DateTime<Utc>>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/gold-price", get(current_gold_price))
}

/// GET /api/gold-price
pub async fn current_gold_price(State(state): State<AppState>) -> Json<GoldPriceResponse> {
    let quote = state.reference_price.snapshot();

    Json(GoldPriceResponse {
        success: true,
        gold_price: quote.price_per_gram,
        currency: CURRENCY,
        unit: UNIT,
        last_updated: Utc::now(),
        refreshed_at: quote.refreshed_at,
    })
}
