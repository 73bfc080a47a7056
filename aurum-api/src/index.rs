use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Luxury Engagement Rings API Server",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": "/api/products",
            "goldPrice": "/api/gold-price",
        },
        "frontend": state.frontend_url,
    }))
}
