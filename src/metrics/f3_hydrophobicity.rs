//! FACTOR 3: HYDROPHOBICITY
//!
//! Hydrophobic ↔ hydrophilic transitions. At the center the mismatch is
//! treated as buried and floored at a near-maximal draw.

use rand::Rng;
use crate::metrics::{framing, rounded, Factor, FactorResult};
use crate::utils::{draw, position_weight, AminoAcid};

pub fn calculate_hydrophobicity<R: Rng + ?Sized>(
    original: AminoAcid,
    mutated: AminoAcid,
    position: usize,
    rng: &mut R,
) -> FactorResult {
    let oh = original.is_hydrophobic();
    let mh = mutated.is_hydrophobic();
    let w = position_weight(position);

    let mut impact = 0.0;
    let mut text = "No significant hydrophobicity change.".to_string();

    if oh && !mh {
        impact = if w > 0.6 { draw(rng, 50.0, 90.0) } else { draw(rng, 20.0, 40.0) };
        text = format!(
            "Hydrophobic ({}) → hydrophilic ({}) disrupts non-polar interactions. Affinity reduction of {}% due to {} position.",
            original, mutated, rounded(impact), framing(w > 0.6, "peripheral")
        );
    } else if !oh && mh {
        impact = if w > 0.6 { draw(rng, 40.0, 80.0) } else { draw(rng, 10.0, 30.0) };
        text = format!(
            "Hydrophilic ({}) → hydrophobic ({}) removes polar interactions. Affinity reduction of {}% due to {} position.",
            original, mutated, rounded(impact), framing(w > 0.6, "peripheral")
        );
    }

    if w > 0.8 && oh != mh {
        impact = f64::max(impact, draw(rng, 80.0, 100.0));
        text.push_str(" (Amplified impact due to likely buried position and property mismatch).");
    }

    FactorResult::new(Factor::Hydrophobicity, impact * w, text)
}
