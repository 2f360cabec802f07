use serde::{Deserialize, Serialize};
use crate::disease_association::DiseaseAssociation;
use crate::metrics::FactorResult;
use crate::utils::{AminoAcid, ImpactCategory};
use crate::validation::ValidationError;

/// Category label reported for rejected requests
pub const INVALID_INPUT: &str = "Invalid Input";

/// Complete assessment of one mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub kinase: String,
    pub gene: String,
    pub motif: String,
    /// Zero-based motif position
    pub position: usize,
    pub original: AminoAcid,
    pub mutated: AminoAcid,
    pub category: ImpactCategory,
    /// Normalized 0-100 score; `None` when the phosphoacceptor itself was lost
    pub score: Option<f64>,
    /// Observed-substitution sentence (six-factor path only)
    pub plausibility: Option<String>,
    /// Per-factor deltas in invocation order; empty on the short-circuit path
    pub factors: Vec<FactorResult>,
    pub disease: DiseaseAssociation,
}

impl ImpactReport {
    /// True when classification skipped the factor computation
    pub fn is_acceptor_loss(&self) -> bool {
        self.score.is_none()
    }

    /// Summed factor deltas before normalization
    pub fn total_delta(&self) -> f64 {
        self.factors.iter().map(|f| f.delta).sum()
    }
}

/// Outcome of a prediction request: a report or the reason it was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Scored(ImpactReport),
    Invalid(ValidationError),
}

impl Prediction {
    /// Overall category label, or "Invalid Input"
    pub fn overall(&self) -> &'static str {
        match self {
            Prediction::Scored(report) => report.category.label(),
            Prediction::Invalid(_) => INVALID_INPUT,
        }
    }

    /// Markdown explanation (or the validation message)
    pub fn details(&self) -> String {
        match self {
            Prediction::Scored(report) => crate::explanation::MarkdownFormatter::format(report),
            Prediction::Invalid(err) => err.to_string(),
        }
    }

    pub fn report(&self) -> Option<&ImpactReport> {
        match self {
            Prediction::Scored(report) => Some(report),
            Prediction::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Prediction::Scored(_))
    }
}
