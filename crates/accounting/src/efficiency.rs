//! Purchase price efficiency: how the standard price compares to what was
//! actually paid.

use serde::Serialize;

use nexgen_core::ValueObject;

/// Upper bound of the bounded gauge rendering.
pub const GAUGE_MAX_PERCENT: f64 = 100.0;

/// `standard / actual * 100`, with a gauge-clamped companion value.
///
/// The raw percentage exceeds 100 when the actual price came in below
/// standard. A zero actual price has no meaningful ratio: both values are
/// reported as `0.0` and [`PriceEfficiency::is_degenerate`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceEfficiency {
    raw_percent: f64,
    gauge_percent: f64,
    degenerate: bool,
}

impl ValueObject for PriceEfficiency {}

impl PriceEfficiency {
    pub fn new(standard_price: f64, actual_price: f64) -> Self {
        let ratio = standard_price / actual_price * 100.0;
        if actual_price == 0.0 || !ratio.is_finite() {
            return Self {
                raw_percent: 0.0,
                gauge_percent: 0.0,
                degenerate: true,
            };
        }
        Self {
            raw_percent: ratio,
            gauge_percent: ratio.min(GAUGE_MAX_PERCENT),
            degenerate: false,
        }
    }

    /// Unclamped percentage (may exceed 100).
    pub fn raw_percent(&self) -> f64 {
        self.raw_percent
    }

    /// Percentage clamped to at most 100, for bounded gauges.
    pub fn gauge_percent(&self) -> f64 {
        self.gauge_percent
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

impl core::fmt::Display for PriceEfficiency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}%", self.raw_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.05
    }

    #[test]
    fn actual_above_standard_is_below_hundred() {
        let e = PriceEfficiency::new(15.5, 16.2);
        assert!(approx(e.raw_percent(), 95.7));
        assert_eq!(e.gauge_percent(), e.raw_percent());
        assert_eq!(e.to_string(), "95.7%");

        let e = PriceEfficiency::new(45.0, 48.5);
        assert!(approx(e.raw_percent(), 92.8));
    }

    #[test]
    fn actual_below_standard_is_clamped_only_on_the_gauge() {
        let e = PriceEfficiency::new(1200.0, 1150.0);
        assert!(e.raw_percent() > 104.0);
        assert_eq!(e.gauge_percent(), 100.0);
        assert!(!e.is_degenerate());
    }

    #[test]
    fn zero_actual_price_falls_back_to_zero() {
        for standard in [0.0, 15.5, 1200.0] {
            let e = PriceEfficiency::new(standard, 0.0);
            assert_eq!(e.raw_percent(), 0.0);
            assert_eq!(e.gauge_percent(), 0.0);
            assert!(e.is_degenerate());
            assert!(e.raw_percent().is_finite());
        }
    }
}
