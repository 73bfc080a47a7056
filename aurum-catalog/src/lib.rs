pub mod product;
pub mod pricing;
pub mod filter;
pub mod repository;

pub use product::{PricedProduct, ProductImages, RawProduct};
pub use pricing::{compute_price, compute_star_rating, price_catalog, round_to};
pub use filter::{filter_catalog, FilterCriteria};
pub use repository::{CatalogError, CatalogRepository, InMemoryCatalog};

/// Price, rate and filter a catalog against a single reference price snapshot
pub fn evaluate_catalog(
    raw_records: Vec<RawProduct>,
    reference_unit_price: f64,
    criteria: &FilterCriteria,
) -> Vec<PricedProduct> {
    filter_catalog(price_catalog(raw_records, reference_unit_price), criteria)
}
