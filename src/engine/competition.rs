//! # engine::competition — Competition Intensity
//!
//! Two modes:
//! - **Search ratio** (when monthly search volume is known): suppliers per
//!   monthly search. Fewer listings per search → bluer ocean.
//! - **Supply count** fallback: supplier count alone.
//!
//! Score is 0–100, higher = less competition.

use crate::engine::clamp_score;
use crate::models::{CompetitionLevel, CompetitionReport};

pub fn analyze_competition(
    keyword:               &str,
    supply_count:          u32,
    monthly_search_volume: Option<f64>,
) -> CompetitionReport {
    let (score, level) = match monthly_search_volume {
        Some(volume) if volume > 0.0 => by_search_ratio(supply_count as f64 / volume),
        _                            => by_supply_count(supply_count as f64),
    };

    CompetitionReport {
        keyword: keyword.to_string(),
        supply_count,
        score: clamp_score(score),
        level,
    }
}

fn by_search_ratio(ratio: f64) -> (f64, CompetitionLevel) {
    use CompetitionLevel::*;

    if ratio < 0.5 {
        (100.0, BlueOcean)
    } else if ratio < 1.0 {
        (70.0 + (1.0 - ratio) * 60.0, Niche)        // 70..100
    } else if ratio < 3.0 {
        (50.0 + (3.0 - ratio) * 10.0, Moderate)     // 50..70
    } else if ratio < 10.0 {
        (10.0 + (10.0 - ratio) * (40.0 / 7.0), Intense)
    } else {
        (10.0, RedOcean)
    }
}

fn by_supply_count(n: f64) -> (f64, CompetitionLevel) {
    use CompetitionLevel::*;

    if n <= 5.0 {
        (100.0 - n * 2.0, BlueOcean)                 // 90..100
    } else if n <= 20.0 {
        (90.0 - (n - 5.0) * (20.0 / 15.0), Niche)    // 70..90
    } else if n <= 50.0 {
        (70.0 - (n - 20.0), Moderate)                // 40..70
    } else if n <= 100.0 {
        (40.0 - (n - 50.0) * (20.0 / 50.0), Intense) // 20..40
    } else {
        ((20.0 - (n - 100.0) * 0.05).max(10.0), RedOcean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CompetitionLevel::*;

    fn score_level(supply: u32, volume: Option<f64>) -> (u8, CompetitionLevel) {
        let r = analyze_competition("k", supply, volume);
        (r.score, r.level)
    }

    #[test]
    fn test_search_ratio_bands() {
        assert_eq!(score_level(10, Some(100.0)), (100, BlueOcean));
        assert_eq!(score_level(75, Some(100.0)), (85, Niche));
        assert_eq!(score_level(200, Some(100.0)), (60, Moderate));
        assert_eq!(score_level(500, Some(100.0)), (39, Intense));
        assert_eq!(score_level(2000, Some(100.0)), (10, RedOcean));
    }

    #[test]
    fn test_supply_count_bands() {
        assert_eq!(score_level(0, None), (100, BlueOcean));
        assert_eq!(score_level(5, None), (90, BlueOcean));
        assert_eq!(score_level(20, None), (70, Niche));
        assert_eq!(score_level(35, None), (55, Moderate));
        assert_eq!(score_level(75, None), (30, Intense));
        assert_eq!(score_level(120, None), (19, RedOcean));
        assert_eq!(score_level(5000, None), (10, RedOcean));
    }

    #[test]
    fn test_zero_volume_falls_back_to_supply_count() {
        assert_eq!(score_level(35, Some(0.0)), score_level(35, None));
    }
}
