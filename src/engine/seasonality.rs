//! # engine::seasonality — Demand Seasonality
//!
//! Coefficient of variation (population stdev / mean) of the trend ratios.
//! Peak months are the months whose ratio reaches `mean + stdev`.

use crate::engine::round_half_up;
use crate::models::{SeasonalityLabel, SeasonalityReport, TrendPoint};

/// Below this many points the series is treated as neutral.
pub const MIN_POINTS: usize = 3;

pub fn analyze_seasonality(keyword: &str, trend: &[TrendPoint]) -> SeasonalityReport {
    if trend.len() < MIN_POINTS {
        return SeasonalityReport {
            keyword:     keyword.to_string(),
            cv:          0.0,
            score:       50,
            peak_months: Vec::new(),
            label:       SeasonalityLabel::Steady,
        };
    }

    let n = trend.len() as f64;
    let mean = trend.iter().map(|p| p.ratio).sum::<f64>() / n;
    let variance = trend.iter().map(|p| (p.ratio - mean).powi(2)).sum::<f64>() / n;
    let stdev = variance.sqrt();
    let cv = if mean > 0.0 { stdev / mean } else { 0.0 };

    let threshold = mean + stdev;
    let mut peak_months: Vec<u8> = Vec::new();
    for point in trend.iter().filter(|p| p.ratio >= threshold) {
        if let Some(month) = month_of(&point.period) {
            if !peak_months.contains(&month) {
                peak_months.push(month);
            }
        }
    }

    let (score, label) = if cv < 0.15 {
        (100, SeasonalityLabel::Steady)
    } else if cv < 0.3 {
        (70, SeasonalityLabel::WeakSeason)
    } else if cv < 0.5 {
        (40, SeasonalityLabel::Seasonal)
    } else {
        (20, SeasonalityLabel::StrongSeason)
    };

    SeasonalityReport {
        keyword: keyword.to_string(),
        cv: round_half_up(cv, 3),
        score,
        peak_months,
        label,
    }
}

/// Month from a `YYYY-MM...` period string.
fn month_of(period: &str) -> Option<u8> {
    period
        .get(5..7)
        .and_then(|m| m.parse::<u8>().ok())
        .filter(|m| (1..=12).contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(ratios: &[f64]) -> Vec<TrendPoint> {
        ratios
            .iter()
            .enumerate()
            .map(|(i, &ratio)| TrendPoint { period: format!("2024-{:02}-01", i + 1), ratio })
            .collect()
    }

    #[test]
    fn test_short_series_is_neutral() {
        let r = analyze_seasonality("k", &series(&[10.0, 90.0]));
        assert_eq!(r.score, 50);
        assert_eq!(r.cv, 0.0);
        assert!(r.peak_months.is_empty());
        assert_eq!(r.label, SeasonalityLabel::Steady);
    }

    #[test]
    fn test_flat_series_is_steady() {
        let r = analyze_seasonality("k", &series(&[50.0, 50.0, 50.0]));
        assert_eq!(r.score, 100);
        assert_eq!(r.cv, 0.0);
        assert_eq!(r.label, SeasonalityLabel::Steady);
    }

    #[test]
    fn test_weak_season() {
        let r = analyze_seasonality("k", &series(&[40.0, 60.0, 40.0, 60.0]));
        assert_eq!(r.cv, 0.2);
        assert_eq!(r.score, 70);
        assert_eq!(r.peak_months, vec![2, 4]);
    }

    #[test]
    fn test_strong_season_single_peak() {
        let r = analyze_seasonality("k", &series(&[10.0, 10.0, 10.0, 10.0, 100.0]));
        assert_eq!(r.cv, 1.286);
        assert_eq!(r.score, 20);
        assert_eq!(r.label, SeasonalityLabel::StrongSeason);
        assert_eq!(r.peak_months, vec![5]);
    }

    #[test]
    fn test_peak_months_deduplicated_across_years() {
        let trend = vec![
            TrendPoint { period: "2023-12-01".into(), ratio: 100.0 },
            TrendPoint { period: "2024-06-01".into(), ratio: 10.0 },
            TrendPoint { period: "2024-07-01".into(), ratio: 10.0 },
            TrendPoint { period: "2024-12-01".into(), ratio: 100.0 },
        ];
        let r = analyze_seasonality("k", &trend);
        assert_eq!(r.peak_months, vec![12]);
    }

    #[test]
    fn test_all_zero_ratios() {
        let r = analyze_seasonality("k", &series(&[0.0, 0.0, 0.0]));
        assert_eq!(r.cv, 0.0);
        assert_eq!(r.score, 100);
    }
}
