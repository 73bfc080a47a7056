use rust_decimal::{Decimal, RoundingStrategy};

use crate::product::{PricedProduct, RawProduct};

/// Decimal places kept on a display price
pub const PRICE_DECIMALS: u32 = 2;

/// Decimal places kept on a star rating
pub const RATING_DECIMALS: u32 = 1;

/// Highest star rating a fully popular product receives
pub const MAX_STARS: u32 = 5;

/// Price of a product at the given reference price per gram:
/// `(popularity + 1) * weight * reference`, rounded to cents.
///
/// Inputs are not validated. Values that fall outside the decimal range
/// (non-finite, or a product that overflows) are priced with float arithmetic.
pub fn compute_price(popularity_score: f64, weight: f64, reference_unit_price: f64) -> f64 {
    let exact = to_decimal(popularity_score)
        .and_then(|p| p.checked_add(Decimal::ONE))
        .and_then(|p| p.checked_mul(to_decimal(weight)?))
        .and_then(|p| p.checked_mul(to_decimal(reference_unit_price)?));

    round_exact(exact, PRICE_DECIMALS).unwrap_or_else(|| {
        round_float((popularity_score + 1.0) * weight * reference_unit_price, PRICE_DECIMALS)
    })
}

/// Star rating on a 0-5 scale, one decimal place
pub fn compute_star_rating(popularity_score: f64) -> f64 {
    let exact = to_decimal(popularity_score)
        .and_then(|p| p.checked_mul(Decimal::from(MAX_STARS)));

    round_exact(exact, RATING_DECIMALS).unwrap_or_else(|| {
        round_float(popularity_score * f64::from(MAX_STARS), RATING_DECIMALS)
    })
}

/// Price and rate every record against one reference price, keeping input order
pub fn price_catalog(raw_records: Vec<RawProduct>, reference_unit_price: f64) -> Vec<PricedProduct> {
    raw_records
        .into_iter()
        .map(|product| PricedProduct {
            price: compute_price(product.popularity_score, product.weight, reference_unit_price),
            star_rating: compute_star_rating(product.popularity_score),
            product,
        })
        .collect()
}

/// Round half away from zero on the decimal value of `value`
pub fn round_to(value: f64, decimals: u32) -> f64 {
    round_exact(to_decimal(value), decimals).unwrap_or_else(|| round_float(value, decimals))
}

// Shortest round-trip text of an f64 is the decimal it was written as
// (`1.005` rather than `1.00499999999999989...`).
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse().ok()
}

fn round_exact(value: Option<Decimal>, decimals: u32) -> Option<f64> {
    value?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .ok()
}

fn round_float(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductImages;
    use proptest::prelude::*;

    fn ring(name: &str, popularity_score: f64, weight: f64) -> RawProduct {
        RawProduct {
            name: name.to_string(),
            popularity_score,
            weight,
            images: ProductImages {
                yellow: format!("{name}-yellow.jpg"),
                rose: format!("{name}-rose.jpg"),
                white: format!("{name}-white.jpg"),
            },
        }
    }

    #[test]
    fn test_price_at_fallback_reference() {
        // 1.8 * 2 * 65.50
        assert_eq!(compute_price(0.8, 2.0, 65.50), 235.80);
        assert_eq!(compute_star_rating(0.8), 4.0);
    }

    #[test]
    fn test_star_rating_bounds() {
        assert_eq!(compute_star_rating(0.0), 0.0);
        assert_eq!(compute_star_rating(1.0), 5.0);
        assert_eq!(compute_star_rating(0.5), 2.5);
    }

    #[test]
    fn test_midpoints_round_away_from_zero() {
        // 0.77 * 5 = 3.85 exactly in decimal
        assert_eq!(compute_star_rating(0.77), 3.9);
        assert_eq!(compute_star_rating(0.25), 1.3);

        // Float scaling would land 1.005 on 100.4999... cents
        assert_eq!(compute_price(0.0, 1.0, 1.005), 1.01);
        assert_eq!(round_to(2.675, 2), 2.68);
        assert_eq!(round_to(-2.675, 2), -2.68);
    }

    #[test]
    fn test_non_finite_inputs_pass_through() {
        assert!(compute_price(0.5, f64::INFINITY, 65.5).is_infinite());
        assert!(compute_star_rating(f64::NAN).is_nan());
    }

    #[test]
    fn test_price_catalog_preserves_order() {
        let raw = vec![ring("halo", 0.9, 3.0), ring("bezel", 0.1, 1.5), ring("pave", 0.5, 2.0)];

        let priced = price_catalog(raw.clone(), 70.0);

        assert_eq!(priced.len(), 3);
        for (priced, raw) in priced.iter().zip(&raw) {
            assert_eq!(&priced.product, raw);
        }
        assert_eq!(priced[0].price, 399.0);
        assert_eq!(priced[1].price, 115.5);
        assert_eq!(priced[2].price, 210.0);
        assert_eq!(priced[2].star_rating, 2.5);
    }

    #[test]
    fn test_price_catalog_empty() {
        assert!(price_catalog(Vec::new(), 65.5).is_empty());
    }

    proptest! {
        #[test]
        fn price_is_monotonic_in_popularity(
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
            weight in 0.01f64..50.0,
            reference in 0.01f64..500.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_price(lo, weight, reference) <= compute_price(hi, weight, reference));
        }

        #[test]
        fn price_is_monotonic_in_weight(
            popularity in 0.0f64..=1.0,
            a in 0.01f64..50.0,
            b in 0.01f64..50.0,
            reference in 0.01f64..500.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_price(popularity, lo, reference) <= compute_price(popularity, hi, reference));
        }

        #[test]
        fn price_is_monotonic_in_reference(
            popularity in 0.0f64..=1.0,
            weight in 0.01f64..50.0,
            a in 0.01f64..500.0,
            b in 0.01f64..500.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_price(popularity, weight, lo) <= compute_price(popularity, weight, hi));
        }

        #[test]
        fn star_rating_stays_in_range(popularity in 0.0f64..=1.0) {
            let stars = compute_star_rating(popularity);
            prop_assert!((0.0..=5.0).contains(&stars));
        }
    }
}
