//! Request validation
//!
//! Enforces the motif/position/residue invariants before any scoring runs.
//! Errors render as the descriptive text shown in an "Invalid Input" report.

use crate::utils::AminoAcid;
use thiserror::Error;

/// Residues per motif
pub const MOTIF_LENGTH: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error: Motif must be exactly 11 amino acids long.")]
    MotifLength { found: usize },

    #[error("Error: Position must be between 0 and 10.")]
    PositionOutOfRange { position: i64 },

    #[error("Error: Position {} in motif is {found}, not {claimed}.", .position + 1)]
    ResidueMismatch { position: usize, found: char, claimed: char },

    #[error("Error: '{0}' is not a canonical amino acid.")]
    UnknownResidue(char),

    #[error("Error: Replacement residue must be a single amino-acid letter, got '{0}'.")]
    ReplacementResidue(String),

    /// Outer-layer failure: empty substrate or 1-based position outside it
    #[error("Please ensure substrate and position are valid.")]
    SubstrateRange,
}

/// A validated mutation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationQuery {
    pub kinase: String,
    pub gene: String,
    motif: String,
    position: usize,
    original: AminoAcid,
    mutated: AminoAcid,
}

impl MutationQuery {
    /// Validate a request
    ///
    /// Checks, in order: motif length, position range, `motif[position] == original`,
    /// and that both residues are canonical amino acids.
    pub fn new(
        kinase: &str,
        gene: &str,
        motif: &str,
        position: i64,
        original: char,
        mutated: char,
    ) -> Result<Self, ValidationError> {
        let residues: Vec<char> = motif.chars().collect();
        if residues.len() != MOTIF_LENGTH {
            return Err(ValidationError::MotifLength { found: residues.len() });
        }

        if !(0..MOTIF_LENGTH as i64).contains(&position) {
            return Err(ValidationError::PositionOutOfRange { position });
        }
        let position = position as usize;

        let found = residues[position];
        if found != original {
            return Err(ValidationError::ResidueMismatch { position, found, claimed: original });
        }

        let original = AminoAcid::from_one_letter(original)
            .ok_or(ValidationError::UnknownResidue(original))?;
        let mutated = AminoAcid::from_one_letter(mutated)
            .ok_or(ValidationError::UnknownResidue(mutated))?;

        Ok(Self {
            kinase: kinase.to_string(),
            gene: gene.to_string(),
            motif: motif.to_string(),
            position,
            original,
            mutated,
        })
    }

    pub fn motif(&self) -> &str {
        &self.motif
    }

    /// Zero-based mutated position
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn original(&self) -> AminoAcid {
        self.original
    }

    pub fn mutated(&self) -> AminoAcid {
        self.mutated
    }
}
