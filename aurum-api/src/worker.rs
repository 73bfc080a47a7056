use std::sync::Arc;
use std::time::Duration;
use aurum_store::{PriceFeed, ReferencePricePublisher};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

/// Pull one price from the feed and publish it.
///
/// A failed fetch, or a price that is not finite and positive, leaves the
/// current value in place. Returns whether a new value was published.
pub async fn refresh_once(feed: &dyn PriceFeed, publisher: &ReferencePricePublisher) -> bool {
    match feed.fetch_price().await {
        Ok(price) if price.is_finite() && price > 0.0 => {
            publisher.publish(price);
            info!("Gold price updated: ${}/gram", price);
            true
        }
        Ok(price) => {
            warn!(
                "Ignoring unusable gold price {}, keeping ${}/gram",
                price,
                publisher.current().price_per_gram
            );
            false
        }
        Err(e) => {
            warn!(
                "Error fetching gold price: {}, keeping ${}/gram",
                e,
                publisher.current().price_per_gram
            );
            false
        }
    }
}

/// Refresh now, then every `period`, for the life of the process
pub fn spawn_price_refresh(
    feed: Arc<dyn PriceFeed>,
    publisher: ReferencePricePublisher,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Gold price refresh started, every {:?}", period);

        loop {
            // First tick completes immediately
            ticker.tick().await;
            refresh_once(feed.as_ref(), &publisher).await;
        }
    })
}
