//! Domain models shared across the margin service.

pub mod margin;
pub mod platform;
pub mod profitability;
pub mod trends;

pub use margin::{
    BreakdownRequest, CostInputs, MarginBreakdown, MarginRequest, MarginResult,
    DEFAULT_PRICE_MULTIPLIER,
};
pub use platform::Platform;
pub use profitability::{PriceRange, ProfitabilityReport, ProfitabilityRequest, WholesaleItem};
pub use trends::{
    AnalyzeRequest, CompetitionLevel, CompetitionReport, Grade, SeasonalityLabel,
    SeasonalityReport, TrendAnalysis, TrendDirection, TrendPoint,
};
