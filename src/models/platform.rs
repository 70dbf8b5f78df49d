//! # models::platform
//!
//! Defines [`Platform`] — the Coupang sales channel a product is listed on —
//! together with the static commission table.
//!
//! | Platform      | Fee rate | Fulfilment                    |
//! |---------------|----------|-------------------------------|
//! | `rocket`      | 10.8 %   | Coupang warehouse (Rocket)    |
//! | `wing`        | 6.5 %    | Seller ships directly         |
//! | `consignment` | 8.0 %    | Third-party consignment       |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::margin::MarginError;

// ─── Platform ─────────────────────────────────────────────────────────────────

/// Sales channel with a fixed commission rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Rocket,
    Wing,
    Consignment,
}

impl Platform {
    /// Every known platform, in display order.
    pub const ALL: [Platform; 3] = [Platform::Rocket, Platform::Wing, Platform::Consignment];

    /// Commission charged on the selling price, as a fraction.
    #[inline]
    pub fn fee_rate(self) -> f64 {
        match self {
            Platform::Rocket      => 0.108,
            Platform::Wing        => 0.065,
            Platform::Consignment => 0.08,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Rocket      => "rocket",
            Platform::Wing        => "wing",
            Platform::Consignment => "consignment",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = MarginError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rocket"      => Ok(Platform::Rocket),
            "wing"        => Ok(Platform::Wing),
            "consignment" => Ok(Platform::Consignment),
            other         => Err(MarginError::InvalidPlatform(other.to_string())),
        }
    }
}
