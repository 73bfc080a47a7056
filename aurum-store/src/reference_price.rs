//! Process-wide reference price (gold, per gram).
//!
//! One publisher, owned by the refresh task, and any number of readers. A
//! reader takes a [`PriceQuote`] snapshot and uses it for a whole computation,
//! so a refresh landing mid-request is only seen by later requests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

/// Price used until the first successful refresh
pub const FALLBACK_PRICE_PER_GRAM: f64 = 65.50;

pub const CURRENCY: &str = "USD";
pub const UNIT: &str = "per gram";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price_per_gram: f64,

    /// `None` while the fallback is still in effect
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Write side. Single writer, so not `Clone`.
#[derive(Debug)]
pub struct ReferencePricePublisher {
    tx: watch::Sender<PriceQuote>,
}

/// Read side, cheap to clone into request state
#[derive(Debug, Clone)]
pub struct ReferencePriceReader {
    rx: watch::Receiver<PriceQuote>,
}

/// Create a holder seeded with `initial` and no refresh time
pub fn reference_price(initial: f64) -> (ReferencePricePublisher, ReferencePriceReader) {
    let (tx, rx) = watch::channel(PriceQuote {
        price_per_gram: initial,
        refreshed_at: None,
    });
    (ReferencePricePublisher { tx }, ReferencePriceReader { rx })
}

impl ReferencePricePublisher {
    pub fn publish(&self, price_per_gram: f64) -> PriceQuote {
        let quote = PriceQuote {
            price_per_gram,
            refreshed_at: Some(Utc::now()),
        };
        // send_replace succeeds even when every reader has been dropped
        self.tx.send_replace(quote);
        quote
    }

    pub fn current(&self) -> PriceQuote {
        *self.tx.borrow()
    }
}

impl ReferencePriceReader {
    /// Latest published quote. Never waits on a refresh.
    pub fn snapshot(&self) -> PriceQuote {
        *self.rx.borrow()
    }
}
