//! FACTOR 6: AROMATICITY
//!
//! Losing an aromatic ring costs π-stacking; gaining one may enhance binding,
//! so gains are scored as negative deltas.

use rand::Rng;
use crate::metrics::{rounded, Factor, FactorResult};
use crate::utils::{draw, position_weight, AminoAcid};

pub fn calculate_aromatic<R: Rng + ?Sized>(
    original: AminoAcid,
    mutated: AminoAcid,
    position: usize,
    rng: &mut R,
) -> FactorResult {
    let oa = original.is_aromatic();
    let ma = mutated.is_aromatic();
    let w = position_weight(position);

    let mut impact = 0.0;
    let mut text = "No significant aromatic change.".to_string();

    if oa && !ma {
        impact = if w > 0.6 { draw(rng, 30.0, 70.0) } else { draw(rng, 10.0, 30.0) };
        text = format!(
            "Loss of aromatic ring ({} → {}) disrupts π-π stacking. Affinity reduction of {}%.",
            original, mutated, rounded(impact)
        );
    } else if !oa && ma {
        impact = if w > 0.6 { draw(rng, -20.0, 0.0) } else { draw(rng, -10.0, 0.0) };
        text = format!(
            "Introduction of aromatic ring ({} → {}) may enhance π-π stacking. Potential enhancement of {}%.",
            original, mutated, rounded(impact.abs())
        );
    }

    FactorResult::new(Factor::Aromatic, impact * w, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng_for;

    #[test]
    fn test_ring_loss() {
        let mut rng = rng_for(&[&"aro-loss"]);
        let result = calculate_aromatic(AminoAcid::Phe, AminoAcid::Ala, 4, &mut rng);
        assert!(result.delta >= 30.0 * 0.8 && result.delta < 70.0 * 0.8);
        assert!(result.explanation.starts_with("Loss of aromatic ring (F → A)"));
    }

    #[test]
    fn test_ring_gain_is_enhancing() {
        let mut rng = rng_for(&[&"aro-gain"]);
        let result = calculate_aromatic(AminoAcid::Ala, AminoAcid::Trp, 10, &mut rng);
        assert!(result.delta <= 0.0 && result.delta >= -10.0 * 0.3);
        assert!(result.explanation.contains("Potential enhancement of"));
    }

    #[test]
    fn test_both_aromatic() {
        let mut rng = rng_for(&[&"aro-both"]);
        let result = calculate_aromatic(AminoAcid::Tyr, AminoAcid::Phe, 5, &mut rng);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.explanation, "No significant aromatic change.");
    }
}
