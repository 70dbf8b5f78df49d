//! Pure calculators. Nothing in here touches I/O or shared state.

pub mod competition;
pub mod margin;
pub mod profitability;
pub mod scoring;
pub mod seasonality;

/// Half-up rounding (ties toward +∞), same as the dashboard's display.
pub(crate) fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// Round to an integer score clamped to 0..=100.
pub(crate) fn clamp_score(value: f64) -> u8 {
    round_half_up(value.clamp(0.0, 100.0), 0) as u8
}
