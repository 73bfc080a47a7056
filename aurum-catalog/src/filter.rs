use crate::product::PricedProduct;

/// Optional bounds on price and popularity. A `None` bound does not restrict;
/// `Some(0.0)` is a real bound.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_popularity: Option<f64>,
    pub max_popularity: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_popularity.is_none()
            && self.max_popularity.is_none()
    }

    /// True when the record satisfies every bound that is present
    pub fn matches(&self, record: &PricedProduct) -> bool {
        let price = record.price;
        let popularity = record.popularity_score();

        self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
            && self.min_popularity.map_or(true, |min| popularity >= min)
            && self.max_popularity.map_or(true, |max| popularity <= max)
    }
}

/// Keep the records matching `criteria`, in their original order
pub fn filter_catalog(priced_records: Vec<PricedProduct>, criteria: &FilterCriteria) -> Vec<PricedProduct> {
    if criteria.is_empty() {
        return priced_records;
    }

    priced_records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
