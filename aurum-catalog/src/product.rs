use serde::{Deserialize, Serialize};

/// Image locators for each metal variant of a ring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImages {
    pub yellow: String,
    pub rose: String,
    pub white: String,
}

/// Catalog entry as loaded from the static source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub name: String,

    /// Normalized popularity in [0, 1]
    pub popularity_score: f64,

    /// Weight in grams
    pub weight: f64,

    pub images: ProductImages,
}

/// Catalog entry with its price and star rating derived for one request.
///
/// Serializes flat: the raw fields followed by `price` and `starRating`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedProduct {
    #[serde(flatten)]
    pub product: RawProduct,
    pub price: f64,
    pub star_rating: f64,
}

impl PricedProduct {
    pub fn popularity_score(&self) -> f64 {
        self.product.popularity_score
    }
}
