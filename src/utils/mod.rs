//! Utility modules for mutation scoring
//!
//! Contains shared functionality used across multiple factor calculators:
//! - Amino acids: Static residue property tables
//! - Context RNG: Hash-seeded generator per mutation
//! - Normalization: Position weights, score scaling, categories

pub mod amino_acids;
pub mod context_rng;
pub mod normalization;

// Re-export commonly used types
pub use amino_acids::{AminoAcid, SizeCategory};
pub use context_rng::{context_seed, draw, rng_for, ContextRng};
pub use normalization::{
    normalize_total, position_weight, ImpactCategory, CENTER_INDEX, MAX_THEORETICAL_IMPACT,
};
