//! # engine::scoring — Demand, Trend Direction, Total Score, Grade
//!
//! ```text
//!  total = round(demand × 0.4 + competition × 0.3 + profitability × 0.3)
//! ```
//!
//! | Total | Grade |
//! |-------|-------|
//! | ≥ 90  | S     |
//! | ≥ 75  | A     |
//! | ≥ 60  | B     |
//! | ≥ 40  | C     |
//! | below | D     |

use crate::engine::{
    clamp_score,
    competition::analyze_competition,
    profitability::{analyze_profitability, ProfitabilityParams},
    round_half_up,
    seasonality::analyze_seasonality,
};
use crate::models::{AnalyzeRequest, Grade, TrendAnalysis, TrendDirection, TrendPoint};

/// Full keyword analysis: demand, competition, profitability and
/// seasonality folded into a total score and grade.
pub fn analyze_trend(
    keyword: &str,
    req:     &AnalyzeRequest,
    params:  &ProfitabilityParams,
) -> TrendAnalysis {
    let supply_count = req
        .supply_count
        .unwrap_or_else(|| u32::try_from(req.products.len()).unwrap_or(u32::MAX));

    let demand        = demand_score(&req.trend);
    let competition   = analyze_competition(keyword, supply_count, req.monthly_search_volume);
    let profitability = analyze_profitability(keyword, &req.products, params);
    let seasonality   = analyze_seasonality(keyword, &req.trend);
    let total_score   = calculate_total_score(demand, competition.score, profitability.score);

    let competition_ratio = req
        .monthly_search_volume
        .filter(|volume| *volume > 0.0)
        .map(|volume| round_half_up(supply_count as f64 / volume, 2));

    TrendAnalysis {
        keyword:             keyword.to_string(),
        demand_score:        demand,
        competition_score:   competition.score,
        profitability_score: profitability.score,
        seasonality_score:   seasonality.score,
        total_score,
        grade:               grade_for(total_score),
        trend_direction:     trend_direction(&req.trend),
        peak_months:         seasonality.peak_months,
        avg_margin_rate:     profitability.avg_margin_rate,
        supply_count,
        competition_level:   competition.level,
        competition_ratio,
    }
}

pub fn calculate_total_score(demand: u8, competition: u8, profitability: u8) -> u8 {
    clamp_score(demand as f64 * 0.4 + competition as f64 * 0.3 + profitability as f64 * 0.3)
}

pub fn grade_for(total_score: u8) -> Grade {
    match total_score {
        90..=u8::MAX => Grade::S,
        75..=89      => Grade::A,
        60..=74      => Grade::B,
        40..=59      => Grade::C,
        _            => Grade::D,
    }
}

/// Last four points against the four before them; ±10 % is stable.
pub fn trend_direction(trend: &[TrendPoint]) -> TrendDirection {
    let len = trend.len();
    if len < 4 {
        return TrendDirection::Stable;
    }

    let recent   = &trend[len - 4..];
    let previous = &trend[len.saturating_sub(8)..len - 4];
    if previous.is_empty() {
        return TrendDirection::Stable;
    }

    let previous_avg = mean_ratio(previous);
    if previous_avg == 0.0 {
        return TrendDirection::Stable;
    }

    let change_rate = (mean_ratio(recent) - previous_avg) / previous_avg;
    if change_rate > 0.1 {
        TrendDirection::Rising
    } else if change_rate < -0.1 {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Average of the last three ratios, already on a 0–100 scale.
pub fn demand_score(trend: &[TrendPoint]) -> u8 {
    if trend.is_empty() {
        return 0;
    }
    let recent = &trend[trend.len().saturating_sub(3)..];
    clamp_score(mean_ratio(recent))
}

fn mean_ratio(points: &[TrendPoint]) -> f64 {
    points.iter().map(|p| p.ratio).sum::<f64>() / points.len() as f64
}
