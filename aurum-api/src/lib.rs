use axum::{http::Method, http::Uri, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod gold_price;
pub mod index;
pub mod products;
pub mod state;
pub mod worker;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // The storefront frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(index::routes())
        .merge(products::routes())
        .merge(gold_price::routes())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFoundError(format!("No route for {}", uri.path()))
}
