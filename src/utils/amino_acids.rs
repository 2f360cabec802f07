//! Amino Acid Property Tables
//!
//! Static biochemical properties of the 20 canonical residues used by the
//! factor calculators: net charge, size bucket, hydrophobic/polar/aromatic flags.
//!
//! The residue set is closed; lookups are `match` arms, never a runtime map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 20 canonical amino acids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala, Arg, Asn, Asp, Cys, Gln, Glu, Gly,
    His, Ile, Leu, Lys, Met, Phe, Pro, Ser,
    Thr, Trp, Tyr, Val,
}

/// Ordered size buckets (smallest < small < medium < large < largest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeCategory {
    Smallest,
    Small,
    Medium,
    Large,
    Largest,
}

impl SizeCategory {
    /// Position in the size ordering (0 = smallest)
    pub fn rank(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Smallest => "smallest",
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::Largest => "largest",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl AminoAcid {
    pub const ALL: [AminoAcid; 20] = [
        Self::Ala, Self::Arg, Self::Asn, Self::Asp, Self::Cys,
        Self::Gln, Self::Glu, Self::Gly, Self::His, Self::Ile,
        Self::Leu, Self::Lys, Self::Met, Self::Phe, Self::Pro,
        Self::Ser, Self::Thr, Self::Trp, Self::Tyr, Self::Val,
    ];

    /// Parse a one-letter code (case-insensitive)
    pub fn from_one_letter(code: char) -> Option<Self> {
        let aa = match code.to_ascii_uppercase() {
            'A' => Self::Ala,
            'R' => Self::Arg,
            'N' => Self::Asn,
            'D' => Self::Asp,
            'C' => Self::Cys,
            'Q' => Self::Gln,
            'E' => Self::Glu,
            'G' => Self::Gly,
            'H' => Self::His,
            'I' => Self::Ile,
            'L' => Self::Leu,
            'K' => Self::Lys,
            'M' => Self::Met,
            'F' => Self::Phe,
            'P' => Self::Pro,
            'S' => Self::Ser,
            'T' => Self::Thr,
            'W' => Self::Trp,
            'Y' => Self::Tyr,
            'V' => Self::Val,
            _ => return None,
        };
        Some(aa)
    }

    /// Parse a three-letter code such as "ARG" or "Arg"
    pub fn from_three_letter(code: &str) -> Option<Self> {
        let upper = code.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|aa| aa.three_letter() == upper)
    }

    pub fn one_letter(self) -> char {
        match self {
            Self::Ala => 'A', Self::Arg => 'R', Self::Asn => 'N', Self::Asp => 'D',
            Self::Cys => 'C', Self::Gln => 'Q', Self::Glu => 'E', Self::Gly => 'G',
            Self::His => 'H', Self::Ile => 'I', Self::Leu => 'L', Self::Lys => 'K',
            Self::Met => 'M', Self::Phe => 'F', Self::Pro => 'P', Self::Ser => 'S',
            Self::Thr => 'T', Self::Trp => 'W', Self::Tyr => 'Y', Self::Val => 'V',
        }
    }

    /// Upper-case three-letter code, as used in disease mutation strings
    pub fn three_letter(self) -> &'static str {
        match self {
            Self::Ala => "ALA", Self::Arg => "ARG", Self::Asn => "ASN", Self::Asp => "ASP",
            Self::Cys => "CYS", Self::Gln => "GLN", Self::Glu => "GLU", Self::Gly => "GLY",
            Self::His => "HIS", Self::Ile => "ILE", Self::Leu => "LEU", Self::Lys => "LYS",
            Self::Met => "MET", Self::Phe => "PHE", Self::Pro => "PRO", Self::Ser => "SER",
            Self::Thr => "THR", Self::Trp => "TRP", Self::Tyr => "TYR", Self::Val => "VAL",
        }
    }

    /// Net side-chain charge at physiological pH (-1, 0, +1)
    pub fn charge(self) -> i32 {
        match self {
            Self::Arg | Self::Lys => 1,
            Self::Asp | Self::Glu => -1,
            _ => 0,
        }
    }

    pub fn size(self) -> SizeCategory {
        match self {
            Self::Gly => SizeCategory::Smallest,
            Self::Ala | Self::Ser | Self::Cys => SizeCategory::Small,
            Self::Asn | Self::Asp | Self::Gln | Self::Glu
            | Self::His | Self::Pro | Self::Thr | Self::Val => SizeCategory::Medium,
            Self::Arg | Self::Ile | Self::Leu | Self::Lys
            | Self::Met | Self::Phe | Self::Tyr => SizeCategory::Large,
            Self::Trp => SizeCategory::Largest,
        }
    }

    pub fn is_hydrophobic(self) -> bool {
        matches!(
            self,
            Self::Ala | Self::Cys | Self::Gly | Self::Ile | Self::Leu
                | Self::Met | Self::Phe | Self::Pro | Self::Trp | Self::Val
        )
    }

    // Polarity is the exact complement of hydrophobicity in this table.
    pub fn is_polar(self) -> bool {
        matches!(
            self,
            Self::Arg | Self::Asn | Self::Asp | Self::Gln | Self::Glu
                | Self::His | Self::Lys | Self::Ser | Self::Thr | Self::Tyr
        )
    }

    pub fn is_aromatic(self) -> bool {
        matches!(self, Self::His | Self::Phe | Self::Trp | Self::Tyr)
    }

    /// Serine, threonine and tyrosine carry the acceptor hydroxyl
    pub fn is_phosphorylatable(self) -> bool {
        matches!(self, Self::Ser | Self::Thr | Self::Tyr)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}
