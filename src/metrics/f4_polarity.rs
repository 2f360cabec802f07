//! FACTOR 4: POLARITY
//!
//! Loss or gain of side-chain polarity, plus a small floor for the
//! Ser ↔ Thr swap, which keeps polarity but shifts hydroxyl geometry.

use rand::Rng;
use crate::metrics::{framing, rounded, Factor, FactorResult};
use crate::utils::{draw, position_weight, AminoAcid};

pub fn calculate_polarity<R: Rng + ?Sized>(
    original: AminoAcid,
    mutated: AminoAcid,
    position: usize,
    rng: &mut R,
) -> FactorResult {
    let op = original.is_polar();
    let mp = mutated.is_polar();
    let w = position_weight(position);

    let mut impact = 0.0;
    let mut text = "No significant polarity change.".to_string();

    if op && !mp {
        impact = if w > 0.6 { draw(rng, 40.0, 70.0) } else { draw(rng, 10.0, 30.0) };
        text = format!(
            "Polar ({}) → non-polar ({}) eliminates hydrogen bonds. Affinity reduction of {}% due to {} position.",
            original, mutated, rounded(impact), framing(w > 0.6, "redundant")
        );
    } else if !op && mp {
        impact = if w > 0.6 { draw(rng, 40.0, 80.0) } else { draw(rng, 10.0, 40.0) };
        text = format!(
            "Non-polar ({}) → polar ({}) introduces unaccommodated polarity. Potential impact of {}%.",
            original, mutated, rounded(impact)
        );
    }

    if is_ser_thr_swap(original, mutated) {
        let dip = draw(rng, 0.0, 20.0);
        impact = f64::max(impact, dip);
        text.push_str(&format!(
            " (Subtle polarity shift ({} → {}) may alter bond angles, impact {}%).",
            original, mutated, rounded(dip)
        ));
    }

    FactorResult::new(Factor::Polarity, impact * w, text)
}

fn is_ser_thr_swap(original: AminoAcid, mutated: AminoAcid) -> bool {
    matches!(
        (original, mutated),
        (AminoAcid::Ser, AminoAcid::Thr) | (AminoAcid::Thr, AminoAcid::Ser)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng_for;

    #[test]
    fn test_polar_loss_at_critical_position() {
        let mut rng = rng_for(&[&"polar-loss"]);
        let result = calculate_polarity(AminoAcid::Gln, AminoAcid::Leu, 6, &mut rng);
        assert!(result.delta >= 40.0 * 0.8 && result.delta < 70.0 * 0.8);
        assert!(result.explanation.contains("critical position"));
    }

    #[test]
    fn test_polar_loss_at_redundant_position() {
        let mut rng = rng_for(&[&"polar-redundant"]);
        let result = calculate_polarity(AminoAcid::Gln, AminoAcid::Leu, 1, &mut rng);
        assert!(result.delta >= 10.0 * 0.6 && result.delta < 30.0 * 0.6);
        assert!(result.explanation.contains("redundant position"));
    }

    #[test]
    fn test_ser_thr_swap_floor() {
        let mut rng = rng_for(&[&"polar-st"]);
        let result = calculate_polarity(AminoAcid::Ser, AminoAcid::Thr, 2, &mut rng);
        assert!(result.delta >= 0.0 && result.delta < 20.0 * 0.6);
        assert!(result.explanation.starts_with("No significant polarity change. (Subtle polarity shift (S → T)"));
    }

    #[test]
    fn test_no_swap_for_identical_residues() {
        assert!(!is_ser_thr_swap(AminoAcid::Ser, AminoAcid::Ser));
        assert!(is_ser_thr_swap(AminoAcid::Thr, AminoAcid::Ser));
    }
}
