//! FACTOR 1: CHARGE
//!
//! Scores loss, gain, or reversal of side-chain charge. Deltas near the
//! phosphoacceptor (positions 3-7) are floored at a strong draw; deltas at the
//! motif edges (positions 0, 1, 10) are capped at a weak draw.

use rand::Rng;
use crate::metrics::{framing, rounded, Factor, FactorResult};
use crate::utils::{draw, position_weight, AminoAcid};

pub fn calculate_charge<R: Rng + ?Sized>(
    original: AminoAcid,
    mutated: AminoAcid,
    position: usize,
    rng: &mut R,
) -> FactorResult {
    let oc = original.charge();
    let mc = mutated.charge();
    let w = position_weight(position);

    let mut impact = 0.0;
    let mut text = "No significant charge change.".to_string();

    if oc != 0 && mc == 0 {
        impact = if w > 0.7 { draw(rng, 60.0, 90.0) } else { draw(rng, 20.0, 40.0) };
        text = format!(
            "Loss of charge ({} ({:+}) → {} (0)) disrupts electrostatic interactions. Affinity reduction of {}% due to {} position.",
            original, oc, mutated, rounded(impact), framing(w > 0.7, "peripheral")
        );
    } else if oc == 0 && mc != 0 {
        impact = draw(rng, 40.0, 80.0);
        text = format!(
            "Introduction of charge ({} (0) → {} ({:+})) may cause electrostatic clash. Disruption of {}%.",
            original, mutated, mc, rounded(impact)
        );
    } else if oc != 0 && mc != 0 && oc.signum() != mc.signum() {
        impact = draw(rng, 70.0, 95.0);
        text = format!(
            "Charge reversal ({} ({:+}) → {} ({:+})) severely disrupts binding. Impact of {}%.",
            original, oc, mutated, mc, rounded(impact)
        );
    }

    if (3..=7).contains(&position) && impact != 0.0 {
        impact = f64::max(impact, draw(rng, 70.0, 100.0));
        text.push_str(" (Mutation is closer to the phosphorylation site, amplifying impact).");
    } else if (position < 2 || position > 9) && impact != 0.0 {
        impact = f64::min(impact, draw(rng, 10.0, 30.0));
        text.push_str(" (Mutation is at a distal residue, reducing impact).");
    }

    FactorResult::new(Factor::Charge, impact * w, text)
}
