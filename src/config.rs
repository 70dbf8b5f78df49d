//! # config — อ่าน Config จาก Environment Variables
//!
//! | Variable                   | Default        |
//! |----------------------------|----------------|
//! | `BIND_ADDR`                | `0.0.0.0:3000` |
//! | `API_KEY`                  | (empty = open) |
//! | `DEFAULT_SHIPPING_COST`    | `3000`         |
//! | `DEFAULT_PACKAGING_COST`   | `500`          |
//! | `PROFITABILITY_MULTIPLIER` | `2.5`          |

use std::net::SocketAddr;

use anyhow::{bail, Context};

use crate::engine::profitability::ProfitabilityParams;

/// Config ทั้งหมดที่ server ต้องการ
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr:              SocketAddr,
    /// None = dev mode, ทุก request ผ่านได้
    pub api_key:                Option<String>,
    /// ค่าส่งที่ใช้เมื่อ request ไม่ได้ระบุ
    pub default_shipping_cost:  f64,
    pub default_packaging_cost: f64,
    pub profitability:          ProfitabilityParams,
}

impl Default for Config {
    fn default() -> Self {
        let profitability = ProfitabilityParams::default();
        Self {
            bind_addr:              SocketAddr::from(([0, 0, 0, 0], 3000)),
            api_key:                None,
            default_shipping_cost:  profitability.shipping_cost,
            default_packaging_cost: profitability.packaging_cost,
            profitability,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr: SocketAddr = match lookup("BIND_ADDR") {
            Some(v) => v.parse().with_context(|| format!("BIND_ADDR is not a socket address: '{v}'"))?,
            None    => defaults.bind_addr,
        };

        let api_key = lookup("API_KEY").filter(|k| !k.trim().is_empty());

        let default_shipping_cost  = env_cost(&lookup, "DEFAULT_SHIPPING_COST", defaults.default_shipping_cost)?;
        let default_packaging_cost = env_cost(&lookup, "DEFAULT_PACKAGING_COST", defaults.default_packaging_cost)?;
        let price_multiplier       = env_cost(&lookup, "PROFITABILITY_MULTIPLIER", defaults.profitability.price_multiplier)?;

        Ok(Self {
            bind_addr,
            api_key,
            default_shipping_cost,
            default_packaging_cost,
            profitability: ProfitabilityParams {
                price_multiplier,
                shipping_cost:  default_shipping_cost,
                packaging_cost: default_packaging_cost,
                ..defaults.profitability
            },
        })
    }
}

/// Non-negative finite number, or `default` when unset.
fn env_cost<F>(lookup: &F, key: &str, default: f64) -> anyhow::Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a number, got '{raw}'"))?;
    if !value.is_finite() || value < 0.0 {
        bail!("{key} must be a non-negative number, got '{raw}'");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.default_shipping_cost, 3000.0);
        assert_eq!(cfg.default_packaging_cost, 500.0);
        assert_eq!(cfg.profitability, ProfitabilityParams::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("API_KEY", "secret"),
            ("DEFAULT_SHIPPING_COST", "2500"),
            ("PROFITABILITY_MULTIPLIER", "3"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.default_shipping_cost, 2500.0);
        assert_eq!(cfg.profitability.shipping_cost, 2500.0);
        assert_eq!(cfg.profitability.price_multiplier, 3.0);
        assert_eq!(cfg.profitability.platform, Platform::Consignment);
    }

    #[test]
    fn test_blank_api_key_is_dev_mode() {
        let cfg = Config::from_lookup(lookup_from(&[("API_KEY", "  ")])).unwrap();
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup_from(&[("BIND_ADDR", "nope")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DEFAULT_SHIPPING_COST", "abc")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DEFAULT_PACKAGING_COST", "-1")])).is_err());
    }
}
