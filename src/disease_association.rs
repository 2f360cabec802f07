//! Disease association and mutation plausibility
//!
//! The correlator maps a motif-relative mutation onto absolute sequence
//! coordinates through the phosphosite table, then looks for known disease
//! mutations of the same residue pair within `PROXIMITY_WINDOW` residues.
//!
//! Window layout: a phosphosite's sequence window starts 7 residues upstream of
//! the site, so a motif found at `offset` inside the window places its
//! 1-based position `p` at `(site - 7) + offset + (p - 1)`.

use crate::data::ReferenceData;
use crate::utils::AminoAcid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Max distance (residues) between the mapped mutation and a disease record
pub const PROXIMITY_WINDOW: i64 = 5;

/// Residues between a window's first residue and its phosphosite
const WINDOW_UPSTREAM: i64 = 7;

/// Result of correlating one mutation against the disease table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseAssociation {
    /// Phosphosite or disease table is empty
    NoData,
    /// No phosphosite record for the gene
    GeneNotFound,
    /// Gene found but no sequence window contains the motif
    MotifNotFound,
    /// Windows matched but no nearby disease mutation with the same residues
    NoMatch,
    /// Deduplicated `(phenotype, mutation)` pairs in discovery order
    Found(Vec<DiseaseHit>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseHit {
    pub phenotype: String,
    /// Upper-cased three-letter code
    pub mutation: String,
}

impl fmt::Display for DiseaseHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  - Phenotype: {} (Mutation: {})", self.phenotype, self.mutation)
    }
}

impl fmt::Display for DiseaseAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiseaseAssociation::NoData => {
                f.write_str("No disease association data available.")
            }
            DiseaseAssociation::GeneNotFound => {
                f.write_str("No disease association found for the given Gene in Ochoa data.")
            }
            DiseaseAssociation::MotifNotFound => f.write_str(
                "No disease association found for the given 11-letter Substrate in Ochoa data.",
            ),
            DiseaseAssociation::NoMatch => f.write_str(
                "No specific disease association found for this mutation and substrate combination.",
            ),
            DiseaseAssociation::Found(hits) => {
                let lines: Vec<String> = hits.iter().map(|h| h.to_string()).collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

impl DiseaseAssociation {
    pub fn hits(&self) -> &[DiseaseHit] {
        match self {
            DiseaseAssociation::Found(hits) => hits,
            _ => &[],
        }
    }
}

/// Correlate a motif mutation with known disease mutations
///
/// `motif_position` is 1-based.
pub fn check_disease_association(
    data: &ReferenceData,
    gene: &str,
    motif: &str,
    original: AminoAcid,
    motif_position: usize,
    mutated: AminoAcid,
) -> DiseaseAssociation {
    if data.phosphosites.is_empty() || data.disease_mutations.is_empty() {
        return DiseaseAssociation::NoData;
    }

    let gene_upper = gene.to_uppercase();
    let gene_sites: Vec<_> = data
        .phosphosites
        .iter()
        .filter(|site| site.gene.to_uppercase() == gene_upper)
        .collect();
    if gene_sites.is_empty() {
        return DiseaseAssociation::GeneNotFound;
    }

    let motif_upper = motif.to_uppercase();
    let windows: Vec<_> = gene_sites
        .into_iter()
        .filter(|site| site.sequence_window.to_uppercase().contains(&motif_upper))
        .collect();
    if windows.is_empty() {
        return DiseaseAssociation::MotifNotFound;
    }

    let mut hits: Vec<DiseaseHit> = Vec::new();
    for site in windows {
        let Some(site_position) = site.absolute_position() else {
            continue;
        };
        let window = site.sequence_window.to_uppercase();
        let Some(offset) = window.find(&motif_upper) else {
            continue;
        };
        let mutation_position = (site_position - WINDOW_UPSTREAM)
            + (offset as i64 + (motif_position as i64 - 1));

        let site_gene = site.gene.to_uppercase();
        for record in &data.disease_mutations {
            if record.gene.to_uppercase() != site_gene {
                continue;
            }
            let Some((d_orig, d_pos, d_new)) = record.decode() else {
                continue;
            };
            if (mutation_position - d_pos).abs() <= PROXIMITY_WINDOW
                && d_orig == original
                && d_new == mutated
            {
                let hit = DiseaseHit {
                    phenotype: record.phenotype.clone(),
                    mutation: record.mutation.trim().to_uppercase(),
                };
                if !hits.contains(&hit) {
                    hits.push(hit);
                }
            }
        }
    }

    tracing::debug!(
        "Disease correlation for {} {}{}{}: {} hit(s)",
        gene, original, motif_position, mutated, hits.len()
    );

    if hits.is_empty() {
        DiseaseAssociation::NoMatch
    } else {
        DiseaseAssociation::Found(hits)
    }
}

/// Whether a substitution pair occurs in the observed-mutation reference set
pub fn is_observed_substitution(data: &ReferenceData, original: AminoAcid, mutated: AminoAcid) -> bool {
    data.possible_mutations.contains(&(original, mutated))
}

/// Informational sentence about the plausibility of a substitution
///
/// Never affects the score.
pub fn plausibility_note(data: &ReferenceData, original: AminoAcid, mutated: AminoAcid) -> String {
    if is_observed_substitution(data, original, mutated) {
        format!("The mutation from {} to {} is experimentally validated.", original, mutated)
    } else {
        format!(
            "The mutation from {} to {} is not possible as per the experimental data from OMIM.",
            original, mutated
        )
    }
}
