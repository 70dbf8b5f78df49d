//! # engine::margin — Margin Evaluator
//!
//! Pure functions: no I/O, no shared state. Safe to call from any handler
//! concurrently.
//!
//! ```text
//!  fee            = selling × fee_rate[platform]
//!  net_profit     = selling − wholesale − fee
//!  margin_percent = selling > 0 ? net_profit / selling × 100 : 0
//! ```
//!
//! Negative net profit is a normal result (selling below cost), not an error.
//! Nothing is rounded here; callers round for display.

use thiserror::Error;

use crate::models::{CostInputs, MarginBreakdown, MarginResult, Platform};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarginError {
    /// Platform name is not one of `rocket`, `wing`, `consignment`.
    #[error("Invalid platform '{0}': expected one of rocket, wing, consignment")]
    InvalidPlatform(String),
}

/// Margin for a platform given by its wire name.
pub fn evaluate(
    wholesale_price: f64,
    selling_price:   f64,
    platform:        &str,
) -> Result<MarginResult, MarginError> {
    let platform: Platform = platform.parse()?;
    Ok(evaluate_for(wholesale_price, selling_price, platform))
}

/// Infallible variant once the platform is known.
pub fn evaluate_for(wholesale_price: f64, selling_price: f64, platform: Platform) -> MarginResult {
    let fee = selling_price * platform.fee_rate();
    let net_profit = selling_price - wholesale_price - fee;

    MarginResult {
        net_profit,
        margin_percent: margin_percent(net_profit, selling_price),
    }
}

/// Full cost breakdown including shipping, packaging and advertising.
///
/// With all extra costs at zero the profit and margin match [`evaluate_for`].
pub fn evaluate_breakdown(inputs: &CostInputs) -> MarginBreakdown {
    let fee_rate   = inputs.platform.fee_rate();
    let commission = inputs.selling_price * fee_rate;

    let net_profit = inputs.selling_price
        - inputs.wholesale_price
        - inputs.shipping_cost
        - commission
        - inputs.ad_cost
        - inputs.packaging_cost;

    let roas = if inputs.ad_cost > 0.0 {
        inputs.selling_price / inputs.ad_cost * 100.0
    } else {
        0.0
    };

    // fee_rate < 1 for every platform, so the divisor is positive.
    let fixed_costs = inputs.wholesale_price
        + inputs.shipping_cost
        + inputs.packaging_cost
        + inputs.ad_cost;
    let break_even_price = fixed_costs / (1.0 - fee_rate);

    MarginBreakdown {
        wholesale_price: inputs.wholesale_price,
        selling_price:   inputs.selling_price,
        platform:        inputs.platform,
        fee_rate,
        commission,
        shipping_cost:   inputs.shipping_cost,
        packaging_cost:  inputs.packaging_cost,
        ad_cost:         inputs.ad_cost,
        net_profit,
        margin_percent:  margin_percent(net_profit, inputs.selling_price),
        roas,
        break_even_price,
    }
}

/// `net / selling × 100`, or exactly 0 when nothing is sold for.
#[inline]
fn margin_percent(net_profit: f64, selling_price: f64) -> f64 {
    if selling_price > 0.0 {
        (net_profit / selling_price) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// Two decimals, the dashboard's display convention.
    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_rocket_example() {
        let r = evaluate(100.0, 150.0, "rocket").unwrap();
        assert!(approx(r.net_profit, 33.8), "net_profit = {}", r.net_profit);
        assert_eq!(round2(r.margin_percent), 22.53);
    }

    #[test]
    fn test_wing_example() {
        let r = evaluate(200.0, 250.0, "wing").unwrap();
        assert!(approx(r.net_profit, 33.75));
        assert!(approx(r.margin_percent, 13.5));
    }

    #[test]
    fn test_consignment_example() {
        let r = evaluate(50.0, 80.0, "consignment").unwrap();
        assert!(approx(r.net_profit, 23.6));
        assert!(approx(r.margin_percent, 29.5));
    }

    #[test]
    fn test_selling_below_wholesale_is_not_an_error() {
        let r = evaluate(120.0, 100.0, "rocket").unwrap();
        assert!(approx(r.net_profit, -30.8));
        assert!(r.margin_percent < 0.0);
    }

    #[test]
    fn test_zero_selling_price_gives_zero_margin() {
        for p in Platform::ALL {
            for wholesale in [0.0, 1.0, 999.0] {
                let r = evaluate_for(wholesale, 0.0, p);
                assert_eq!(r.margin_percent, 0.0);
                assert_eq!(r.net_profit, -wholesale);
            }
        }
    }

    #[test]
    fn test_zero_wholesale_price() {
        let r = evaluate(0.0, 100.0, "wing").unwrap();
        assert!(approx(r.net_profit, 93.5));
        assert!(approx(r.margin_percent, 93.5));
    }

    #[test]
    fn test_break_even_sale() {
        let r = evaluate(100.0, 100.0, "consignment").unwrap();
        assert!(approx(r.net_profit, -8.0));
        assert!(approx(r.margin_percent, -8.0));
    }

    #[test]
    fn test_margin_is_profit_over_selling() {
        for p in Platform::ALL {
            for (w, s) in [(10.0, 33.0), (500.0, 499.0), (0.0, 0.01), (7.5, 12345.0)] {
                let r = evaluate_for(w, s, p);
                assert_eq!(r.margin_percent, r.net_profit / s * 100.0);
            }
        }
    }

    #[test]
    fn test_unknown_platform() {
        for (w, s) in [(0.0, 0.0), (100.0, 150.0), (120.0, 100.0)] {
            assert_eq!(
                evaluate(w, s, "unknown"),
                Err(MarginError::InvalidPlatform("unknown".into()))
            );
        }
    }

    #[test]
    fn test_breakdown_without_extras_matches_evaluate() {
        for p in Platform::ALL {
            let inputs = CostInputs {
                wholesale_price: 100.0,
                selling_price:   150.0,
                platform:        p,
                shipping_cost:   0.0,
                packaging_cost:  0.0,
                ad_cost:         0.0,
            };
            let b = evaluate_breakdown(&inputs);
            let r = evaluate_for(100.0, 150.0, p);
            assert_eq!(b.net_profit, r.net_profit);
            assert_eq!(b.margin_percent, r.margin_percent);
            assert_eq!(b.roas, 0.0);
        }
    }

    #[test]
    fn test_breakdown_with_costs() {
        let inputs = CostInputs {
            wholesale_price: 15000.0,
            selling_price:   37500.0,
            platform:        Platform::Rocket,
            shipping_cost:   3000.0,
            packaging_cost:  500.0,
            ad_cost:         2500.0,
        };
        let b = evaluate_breakdown(&inputs);

        assert!(approx(b.commission, 4050.0));
        assert!(approx(b.net_profit, 37500.0 - 15000.0 - 3000.0 - 4050.0 - 2500.0 - 500.0));
        assert!(approx(b.roas, 1500.0));
        assert!(approx(b.break_even_price, 21000.0 / (1.0 - 0.108)));
    }

    #[test]
    fn test_break_even_price_zeroes_profit() {
        let mut inputs = CostInputs {
            wholesale_price: 8000.0,
            selling_price:   0.0,
            platform:        Platform::Wing,
            shipping_cost:   3000.0,
            packaging_cost:  500.0,
            ad_cost:         0.0,
        };
        inputs.selling_price = evaluate_breakdown(&inputs).break_even_price;
        let b = evaluate_breakdown(&inputs);
        assert!(b.net_profit.abs() < 1e-6);
    }
}
