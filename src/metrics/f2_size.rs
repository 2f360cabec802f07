//! FACTOR 2: SIZE
//!
//! Compares size buckets. Jumps of two or more buckets are steric events;
//! one-bucket shifts are moderate. Gly→Pro additionally rigidifies the motif.

use rand::Rng;
use crate::metrics::{rounded, Factor, FactorResult};
use crate::utils::{draw, position_weight, AminoAcid};

pub fn calculate_size<R: Rng + ?Sized>(
    original: AminoAcid,
    mutated: AminoAcid,
    position: usize,
    rng: &mut R,
) -> FactorResult {
    let o_cat = original.size();
    let m_cat = mutated.size();
    let (o_idx, m_idx) = (o_cat.rank(), m_cat.rank());
    let w = position_weight(position);

    let mut impact = 0.0;
    let mut text = "No significant size change.".to_string();

    if m_idx > o_idx + 1 {
        impact = if w > 0.7 { draw(rng, 60.0, 90.0) } else { draw(rng, 20.0, 50.0) };
        text = format!(
            "Size increase ({} ({}) → {} ({})) causes steric hindrance. Affinity loss of {}% {}.",
            original, o_cat, mutated, m_cat, rounded(impact),
            if w > 0.7 { "near phosphorylation site" } else { "at distal position" }
        );
    } else if m_idx < o_idx - 1 {
        impact = draw(rng, 20.0, 60.0);
        text = format!(
            "Size decrease ({} ({}) → {} ({})) reduces stabilizing contacts. Affinity drop of {}%.",
            original, o_cat, mutated, m_cat, rounded(impact)
        );
    } else if (m_idx - o_idx).abs() == 1 {
        impact = draw(rng, 10.0, 30.0);
        text = format!(
            "Moderate size change ({} ({}) → {} ({})). Impact of {}%.",
            original, o_cat, mutated, m_cat, rounded(impact)
        );
    }

    if original == AminoAcid::Gly && mutated == AminoAcid::Pro {
        let flex = draw(rng, 30.0, 70.0);
        impact = f64::max(impact, flex);
        text.push_str(&format!(
            " (Glycine to Proline mutation may rigidify flexible regions, altering motif dynamics and reducing adaptability, impact {}%).",
            rounded(flex)
        ));
    }

    FactorResult::new(Factor::Size, impact * w, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng_for;

    #[test]
    fn test_same_bucket() {
        let mut rng = rng_for(&[&"size-same"]);
        let result = calculate_size(AminoAcid::Leu, AminoAcid::Ile, 3, &mut rng);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.explanation, "No significant size change.");
    }

    #[test]
    fn test_large_increase_near_center() {
        let mut rng = rng_for(&[&"size-up"]);
        // small → largest at weight 0.8
        let result = calculate_size(AminoAcid::Ala, AminoAcid::Trp, 4, &mut rng);
        assert!(result.delta >= 60.0 * 0.8 && result.delta < 90.0 * 0.8);
        assert!(result.explanation.contains("(A (small) → W (largest))"));
        assert!(result.explanation.ends_with("near phosphorylation site."));
    }

    #[test]
    fn test_large_decrease() {
        let mut rng = rng_for(&[&"size-down"]);
        let result = calculate_size(AminoAcid::Trp, AminoAcid::Ser, 9, &mut rng);
        assert!(result.delta >= 20.0 * 0.6 && result.delta < 60.0 * 0.6);
        assert!(result.explanation.starts_with("Size decrease"));
    }

    #[test]
    fn test_one_bucket_change() {
        let mut rng = rng_for(&[&"size-one"]);
        let result = calculate_size(AminoAcid::Val, AminoAcid::Ala, 10, &mut rng);
        assert!(result.delta >= 10.0 * 0.3 && result.delta < 30.0 * 0.3);
        assert!(result.explanation.starts_with("Moderate size change (V (medium) → A (small))"));
    }

    #[test]
    fn test_glycine_to_proline_floor() {
        let mut rng = rng_for(&[&"size-gp"]);
        let result = calculate_size(AminoAcid::Gly, AminoAcid::Pro, 5, &mut rng);

        // two-bucket increase [60,90) then max with flex [30,70)
        assert!(result.delta >= 60.0 && result.delta < 90.0);
        assert!(result.explanation.contains("Glycine to Proline mutation may rigidify"));
    }
}
