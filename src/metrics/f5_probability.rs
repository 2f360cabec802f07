//! FACTOR 5: POSITION PROBABILITY MATRIX
//!
//! Compares the kinase's positional preference for the original and mutant
//! residue. The matrix family is chosen by the motif center: tyrosine-centered
//! motifs use the tyrosine matrices, everything else the Ser/Thr matrices.
//!
//! This delta is not position-weighted; positive values are losses, negative
//! values are enhancements.

use rand::Rng;
use crate::data::{ProbabilityMatrix, ReferenceData};
use crate::metrics::{rounded, Factor, FactorResult};
use crate::utils::{draw, AminoAcid, CENTER_INDEX};

/// Matrix family for a motif, keyed on the residue at the center
pub fn select_matrix<'a>(motif: &str, data: &'a ReferenceData) -> &'a ProbabilityMatrix {
    match motif.chars().nth(CENTER_INDEX) {
        Some('Y') => &data.tyrosine_matrices,
        _ => &data.serthr_matrices,
    }
}

pub fn calculate_probability<R: Rng + ?Sized>(
    kinase: &str,
    motif: &str,
    original: AminoAcid,
    mutated: AminoAcid,
    position: usize,
    data: &ReferenceData,
    rng: &mut R,
) -> FactorResult {
    let matrix = select_matrix(motif, data);
    let relative_position = position as i32 - CENTER_INDEX as i32;

    let p_orig = matrix.probability(kinase, relative_position, original);
    let p_mut = matrix.probability(kinase, relative_position, mutated);

    let mut impact = 0.0;
    let mut text = "No significant probability change.".to_string();

    if p_orig > 0.0 && p_mut > 0.0 {
        let ratio = p_mut / p_orig;
        if ratio < 0.5 {
            impact = draw(rng, 50.0, 90.0);
            text = format!(
                "Significant decrease in probability ({:.2} -> {:.2}). Impact: {}%.",
                p_orig, p_mut, rounded(impact)
            );
        } else if ratio > 2.0 {
            impact = draw(rng, -30.0, -10.0);
            text = format!(
                "Significant increase in probability ({:.2} -> {:.2}). Impact: {}% (enhancement).",
                p_orig, p_mut, rounded(impact)
            );
        } else if ratio < 1.0 {
            impact = draw(rng, 10.0, 40.0);
            text = format!(
                "Slight decrease in probability ({:.2} -> {:.2}). Impact: {}%.",
                p_orig, p_mut, rounded(impact)
            );
        } else if ratio > 1.0 {
            impact = draw(rng, -10.0, 0.0);
            text = format!(
                "Slight increase in probability ({:.2} -> {:.2}). Impact: {}% (slight enhancement).",
                p_orig, p_mut, rounded(impact)
            );
        }
    } else if p_orig > 0.0 && p_mut == 0.0 {
        impact = draw(rng, 80.0, 100.0);
        text = format!(
            "Loss of probability ({:.2} -> {:.2}). Severe impact: {}%.",
            p_orig, p_mut, rounded(impact)
        );
    } else if p_orig == 0.0 && p_mut > 0.0 {
        impact = draw(rng, -50.0, -20.0);
        text = format!(
            "Gain of probability ({:.2} -> {:.2}). Enhancement: {}%.",
            p_orig, p_mut, rounded(impact.abs())
        );
    }

    FactorResult::new(Factor::Probability, impact, text)
}
