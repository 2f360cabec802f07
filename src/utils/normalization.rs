//! Normalization Utilities
//!
//! Position confidence weighting, conversion of the summed factor deltas into
//! a 0-100 impact score, and the score → category table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of the phosphoacceptor inside an 11-residue motif
pub const CENTER_INDEX: usize = 5;

/// Fixed ceiling for the combined factor delta.
///
/// Not derived from the factor ranges; changing it shifts every category boundary.
pub const MAX_THEORETICAL_IMPACT: f64 = 520.0;

/// Confidence weight for a motif position
///
/// 1.0 at the center, 0.8 within 2, 0.6 within 4, 0.3 beyond.
pub fn position_weight(position: usize) -> f64 {
    let d = position.abs_diff(CENTER_INDEX);
    if d == 0 {
        1.0
    } else if d <= 2 {
        0.8
    } else if d <= 4 {
        0.6
    } else {
        0.3
    }
}

/// Normalize a summed delta to the 0-100 scale
pub fn normalize_total(total: f64) -> f64 {
    ((total / MAX_THEORETICAL_IMPACT) * 100.0).clamp(0.0, 100.0)
}

/// Ranked qualitative impact label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactCategory {
    HighImpact,
    ModerateImpact,
    LowImpact,
    MinimalImpact,
    PotentialEnhancement,
}

impl ImpactCategory {
    /// Classify a normalized score
    ///
    /// | score      | category |
    /// |------------|----------|
    /// | >= 70      | High Impact (Likely Disruptive) |
    /// | [40, 70)   | Moderate Impact |
    /// | [10, 40)   | Low Impact |
    /// | [-10, 10)  | Minimal Impact |
    /// | < -10      | Potential Enhancement |
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 70.0 => ImpactCategory::HighImpact,
            s if s >= 40.0 => ImpactCategory::ModerateImpact,
            s if s >= 10.0 => ImpactCategory::LowImpact,
            s if s >= -10.0 => ImpactCategory::MinimalImpact,
            _ => ImpactCategory::PotentialEnhancement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactCategory::HighImpact => "High Impact (Likely Disruptive)",
            ImpactCategory::ModerateImpact => "Moderate Impact",
            ImpactCategory::LowImpact => "Low Impact",
            ImpactCategory::MinimalImpact => "Minimal Impact",
            ImpactCategory::PotentialEnhancement => "Potential Enhancement",
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_weights() {
        let weights: Vec<f64> = (0..11).map(position_weight).collect();
        assert_eq!(
            weights,
            vec![0.3, 0.6, 0.6, 0.8, 0.8, 1.0, 0.8, 0.8, 0.6, 0.6, 0.3]
        );
    }

    #[test]
    fn test_normalize_clamps() {
        assert_relative_eq!(normalize_total(260.0), 50.0, epsilon = 1e-9);
        assert_relative_eq!(normalize_total(10_000.0), 100.0);
        assert_relative_eq!(normalize_total(-80.0), 0.0);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(ImpactCategory::from_score(70.0), ImpactCategory::HighImpact);
        assert_eq!(ImpactCategory::from_score(69.999), ImpactCategory::ModerateImpact);
        assert_eq!(ImpactCategory::from_score(40.0), ImpactCategory::ModerateImpact);
        assert_eq!(ImpactCategory::from_score(39.999), ImpactCategory::LowImpact);
        assert_eq!(ImpactCategory::from_score(10.0), ImpactCategory::LowImpact);
        assert_eq!(ImpactCategory::from_score(9.999), ImpactCategory::MinimalImpact);
        assert_eq!(ImpactCategory::from_score(-10.0), ImpactCategory::MinimalImpact);
        assert_eq!(ImpactCategory::from_score(-10.001), ImpactCategory::PotentialEnhancement);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ImpactCategory::HighImpact.to_string(), "High Impact (Likely Disruptive)");
        assert_eq!(ImpactCategory::PotentialEnhancement.label(), "Potential Enhancement");
    }
}
