use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use aurum_catalog::{evaluate_catalog, CatalogRepository, FilterCriteria, PricedProduct, RawProduct};
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Raw query parameters. Anything that is not a finite number is dropped
/// rather than rejected, and a repeated key keeps its first value.
#[derive(Debug, Default)]
pub struct ProductFilterQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_popularity: Option<String>,
    pub max_popularity: Option<String>,
}

impl ProductFilterQuery {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "minPrice" => &mut query.min_price,
                "maxPrice" => &mut query.max_price,
                "minPopularity" => &mut query.min_popularity,
                "maxPopularity" => &mut query.max_popularity,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_price: parse_bound(self.min_price.as_deref()),
            max_price: parse_bound(self.max_price.as_deref()),
            min_popularity: parse_bound(self.min_popularity.as_deref()),
            max_popularity: parse_bound(self.max_popularity.as_deref()),
        }
    }
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub success: bool,
    pub data: Vec<PricedProduct>,
    pub gold_price: f64,
    pub total_products: usize,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/products", get(list_products))
}

/// GET /api/products
/// Catalog priced at the current gold price, optionally filtered
pub async fn list_products(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<ProductsResponse> {
    let pairs = pairs.map(|Query(pairs)| pairs).unwrap_or_else(|e| {
        tracing::debug!("Ignoring undecodable query: {}", e);
        Vec::new()
    });
    let criteria = ProductFilterQuery::from_pairs(pairs).criteria();

    let raw = load_catalog(state.catalog.as_ref()).await;

    // One read per request; a refresh after this point is not seen here
    let quote = state.reference_price.snapshot();
    let data = evaluate_catalog(raw, quote.price_per_gram, &criteria);

    tracing::debug!(
        "Serving {} products at {}/gram with {:?}",
        data.len(),
        quote.price_per_gram,
        criteria
    );

    Json(ProductsResponse {
        success: true,
        total_products: data.len(),
        gold_price: quote.price_per_gram,
        data,
    })
}

/// An unusable catalog source is served as an empty catalog
async fn load_catalog(catalog: &dyn CatalogRepository) -> Vec<RawProduct> {
    match catalog.load_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Error loading products: {}", e);
            Vec::new()
        }
    }
}
