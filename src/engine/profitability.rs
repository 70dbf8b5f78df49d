//! # engine::profitability — Keyword Profitability Scoring
//!
//! Estimates how much margin a keyword leaves on the table, given the
//! cheapest wholesale listings found for it. Each listing is priced at
//! `wholesale × multiplier` and run through the cost breakdown on the
//! consignment channel.
//!
//! ## Score bands (average margin rate)
//! | Margin   | Score |
//! |----------|-------|
//! | ≥ 40 %   | 100   |
//! | ≥ 30 %   | 80    |
//! | ≥ 20 %   | 60    |
//! | ≥ 10 %   | 40    |
//! | below    | 20    |

use tracing::debug;

use crate::engine::margin::evaluate_breakdown;
use crate::engine::round_half_up;
use crate::models::{
    CostInputs, Platform, PriceRange, ProfitabilityReport, WholesaleItem, DEFAULT_PRICE_MULTIPLIER,
};

/// Only the N cheapest listings are sampled.
pub const MAX_SAMPLES: usize = 10;

// ─── Params ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitabilityParams {
    pub platform:         Platform,
    pub price_multiplier: f64,
    pub shipping_cost:    f64,
    pub packaging_cost:   f64,
}

impl Default for ProfitabilityParams {
    fn default() -> Self {
        Self {
            platform:         Platform::Consignment,
            price_multiplier: DEFAULT_PRICE_MULTIPLIER,
            shipping_cost:    3000.0,
            packaging_cost:   500.0,
        }
    }
}

// ─── Analysis ─────────────────────────────────────────────────────────────────

pub fn analyze_profitability(
    keyword:  &str,
    products: &[WholesaleItem],
    params:   &ProfitabilityParams,
) -> ProfitabilityReport {
    // A listing whose marked-up price overflows cannot be scored.
    let mut sample: Vec<&WholesaleItem> = products
        .iter()
        .filter(|p| p.price > 0.0 && (p.price * params.price_multiplier).is_finite())
        .collect();
    sample.sort_by(|a, b| a.price.total_cmp(&b.price));
    sample.truncate(MAX_SAMPLES);

    let Some(cheapest) = sample.first() else {
        debug!(keyword, "no priced listings to sample");
        return ProfitabilityReport::empty(keyword);
    };
    debug!(keyword, cheapest = %cheapest.name, samples = sample.len(), "sampling wholesale listings");

    let prices: Vec<f64> = sample.iter().map(|p| p.price).collect();

    let n = prices.len() as f64;
    let mut margin_sum = 0.0_f64;
    let mut min_sell   = f64::INFINITY;
    let mut max_sell   = f64::NEG_INFINITY;

    for &wholesale in &prices {
        let selling_price = wholesale * params.price_multiplier;
        let breakdown = evaluate_breakdown(&CostInputs {
            wholesale_price: wholesale,
            selling_price,
            platform:        params.platform,
            shipping_cost:   params.shipping_cost,
            packaging_cost:  params.packaging_cost,
            ad_cost:         0.0,
        });

        margin_sum += breakdown.margin_percent;
        min_sell = min_sell.min(selling_price);
        max_sell = max_sell.max(selling_price);
    }

    let avg_margin_rate = margin_sum / n;
    // divide first so the sum of near-max prices stays finite
    let avg_wholesale   = prices.iter().map(|p| p / n).sum::<f64>();

    ProfitabilityReport {
        keyword:                 keyword.to_string(),
        avg_wholesale_price:     round_half_up(avg_wholesale, 0),
        avg_margin_rate:         round_half_up(avg_margin_rate, 1),
        recommended_price_range: PriceRange {
            min: round_half_up(min_sell, 0),
            max: round_half_up(max_sell, 0),
        },
        score:                   score_for(avg_margin_rate),
        sample_count:            prices.len(),
    }
}

/// Score band for an (unrounded) average margin rate.
pub fn score_for(avg_margin_rate: f64) -> u8 {
    match avg_margin_rate {
        m if m >= 40.0 => 100,
        m if m >= 30.0 => 80,
        m if m >= 20.0 => 60,
        m if m >= 10.0 => 40,
        _              => 20,
    }
}
