pub mod app_config;
pub mod catalog_repo;
pub mod price_feed;
pub mod reference_price;

pub use catalog_repo::JsonFileCatalog;
pub use price_feed::{FeedError, PriceFeed, SimulatedGoldFeed};
pub use reference_price::{
    reference_price, PriceQuote, ReferencePricePublisher, ReferencePriceReader,
    FALLBACK_PRICE_PER_GRAM,
};
