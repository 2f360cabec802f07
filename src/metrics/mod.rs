//! Factor calculators for mutation impact scoring
//!
//! Each factor is implemented in its own module. All six take the residue pair,
//! the motif position and the shared context RNG, and return a weighted delta
//! plus an explanatory sentence.
//!
//! Draw order matters: the scorer invokes them as
//! charge → size → hydrophobicity → polarity → probability → aromatic,
//! and each consumes the same RNG stream.

pub mod f1_charge;
pub mod f2_size;
pub mod f3_hydrophobicity;
pub mod f4_polarity;
pub mod f5_probability;
pub mod f6_aromatic;

// Re-export factor functions
pub use f1_charge::calculate_charge;
pub use f2_size::calculate_size;
pub use f3_hydrophobicity::calculate_hydrophobicity;
pub use f4_polarity::calculate_polarity;
pub use f5_probability::{calculate_probability, select_matrix};
pub use f6_aromatic::calculate_aromatic;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six scoring factors, in invocation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    Charge,
    Size,
    Hydrophobicity,
    Polarity,
    Probability,
    Aromatic,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::Charge,
        Factor::Size,
        Factor::Hydrophobicity,
        Factor::Polarity,
        Factor::Probability,
        Factor::Aromatic,
    ];

    /// Label used in the report bullets
    pub fn label(self) -> &'static str {
        match self {
            Factor::Charge => "Charge",
            Factor::Size => "Size",
            Factor::Hydrophobicity => "Hydrophobicity",
            Factor::Polarity => "Polarity",
            Factor::Probability => "Probability",
            Factor::Aromatic => "Aromatic",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    pub factor: Factor,
    /// Contribution to the summed impact (already position-weighted where applicable)
    pub delta: f64,
    pub explanation: String,
}

impl FactorResult {
    pub fn new(factor: Factor, delta: f64, explanation: String) -> Self {
        Self { factor, delta, explanation }
    }
}

/// Whole-number percentage shown in explanations (halves round to even)
pub(crate) fn rounded(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Phrase for the "critical vs peripheral" framing
pub(crate) fn framing(critical: bool, otherwise: &'static str) -> &'static str {
    if critical {
        "critical"
    } else {
        otherwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_order_and_labels() {
        let labels: Vec<&str> = Factor::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["Charge", "Size", "Hydrophobicity", "Polarity", "Probability", "Aromatic"]
        );
    }

    #[test]
    fn test_rounded() {
        assert_eq!(rounded(72.6), 73);
        assert_eq!(rounded(-0.3), 0);
        assert_eq!(rounded(-12.7), -13);
    }

    #[test]
    fn test_rounded_halves_go_to_even() {
        assert_eq!(rounded(72.5), 72);
        assert_eq!(rounded(73.5), 74);
        assert_eq!(rounded(-20.5), -20);
        assert_eq!(rounded(0.5), 0);
    }
}
