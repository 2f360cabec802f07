//! Mutation Scorer - Main coordinator for impact predictions
//!
//! Flow per request: validate → (acceptor-loss short-circuit | context RNG →
//! six factors → normalize → classify) → disease correlation → report.
//! Includes both single and parallel (Rayon) batch entry points.

use crate::data::{DataPaths, ReferenceData};
use crate::disease_association::{check_disease_association, plausibility_note};
use crate::explanation::{ImpactReport, Prediction};
use crate::metrics::*;
use crate::utils::{normalize_total, rng_for, ImpactCategory, CENTER_INDEX};
use crate::validation::{MutationQuery, ValidationError};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

/// Request as received at the HTTP boundary (1-based position)
///
/// Missing or null fields read as empty (position 0) so the scorer, not the
/// extractor, reports the problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kinase: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gene: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub substrate: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_aa: String,
}

impl PredictionRequest {
    /// Canonical form: trimmed names, upper-cased substrate and residue
    ///
    /// Requests with equal normalized forms always yield the same prediction.
    pub fn normalized(&self) -> Self {
        Self {
            kinase: self.kinase.trim().to_string(),
            gene: self.gene.trim().to_string(),
            substrate: self.substrate.trim().to_uppercase(),
            position: self.position,
            new_aa: self.new_aa.trim().to_uppercase(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Main mutation scorer
pub struct MutationScorer {
    data: ReferenceData,
}

impl MutationScorer {
    pub fn new(data: ReferenceData) -> Self {
        Self { data }
    }

    /// Load reference tables from a data directory (missing files → empty tables)
    pub fn load(paths: &DataPaths) -> Self {
        Self::new(ReferenceData::load(paths))
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Predict the impact of a substitution at a 0-based motif position
    pub fn predict(
        &self,
        kinase: &str,
        gene: &str,
        motif: &str,
        position: i64,
        original: char,
        mutated: char,
    ) -> Prediction {
        match MutationQuery::new(kinase, gene, motif, position, original, mutated) {
            Ok(query) => Prediction::Scored(self.score_query(&query)),
            Err(e) => {
                tracing::debug!("Rejected query ({} {} pos {}): {}", kinase, motif, position, e);
                Prediction::Invalid(e)
            }
        }
    }

    /// Boundary entry point: 1-based position, residue derived from the substrate
    ///
    /// Substrate and replacement are upper-cased before validation.
    pub fn predict_once(
        &self,
        kinase: &str,
        gene: &str,
        substrate: &str,
        position: i64,
        new_aa: &str,
    ) -> Prediction {
        let substrate = substrate.trim().to_uppercase();
        let residues: Vec<char> = substrate.chars().collect();
        if residues.is_empty() || position < 1 || position > residues.len() as i64 {
            return Prediction::Invalid(ValidationError::SubstrateRange);
        }
        let original = residues[(position - 1) as usize];

        let new_aa = new_aa.trim().to_uppercase();
        let mut letters = new_aa.chars();
        let mutated = match (letters.next(), letters.next()) {
            (Some(c), None) => c,
            _ => return Prediction::Invalid(ValidationError::ReplacementResidue(new_aa)),
        };

        self.predict(kinase.trim(), gene.trim(), &substrate, position - 1, original, mutated)
    }

    pub fn predict_request(&self, request: &PredictionRequest) -> Prediction {
        self.predict_once(
            &request.kinase,
            &request.gene,
            &request.substrate,
            request.position,
            &request.new_aa,
        )
    }

    /// Score many requests in parallel; output order matches input order
    pub fn predict_batch(&self, requests: &[PredictionRequest]) -> Vec<Prediction> {
        requests
            .par_iter()
            .map(|request| self.predict_request(request))
            .collect()
    }

    /// Score a validated query
    pub fn score_query(&self, query: &MutationQuery) -> ImpactReport {
        let position = query.position();
        let original = query.original();
        let mutated = query.mutated();
        let motif = query.motif();

        let disease = check_disease_association(
            &self.data,
            &query.gene,
            motif,
            original,
            position + 1,
            mutated,
        );

        // Losing the acceptor residue itself needs no further evidence
        if position == CENTER_INDEX && original.is_phosphorylatable() && !mutated.is_phosphorylatable() {
            tracing::debug!("{} {}: phosphoacceptor {} lost", query.kinase, motif, original);
            return ImpactReport {
                kinase: query.kinase.clone(),
                gene: query.gene.clone(),
                motif: motif.to_string(),
                position,
                original,
                mutated,
                category: ImpactCategory::HighImpact,
                score: None,
                plausibility: None,
                factors: Vec::new(),
                disease,
            };
        }

        let plausibility = plausibility_note(&self.data, original, mutated);
        let factors = self.compute_factors(query);

        let total: f64 = factors.iter().map(|f| f.delta).sum();
        let score = normalize_total(total);
        let category = ImpactCategory::from_score(score);

        tracing::debug!(
            "{} {} {}{}{}: total={:.2} score={:.1} ({})",
            query.kinase, motif, original, position + 1, mutated, total, score, category
        );

        ImpactReport {
            kinase: query.kinase.clone(),
            gene: query.gene.clone(),
            motif: motif.to_string(),
            position,
            original,
            mutated,
            category,
            score: Some(score),
            plausibility: Some(plausibility),
            factors,
            disease,
        }
    }

    /// Run the six factors against one context-seeded RNG stream
    ///
    /// Invocation order fixes which draws each factor receives.
    pub fn compute_factors(&self, query: &MutationQuery) -> Vec<FactorResult> {
        let position = query.position();
        let original = query.original();
        let mutated = query.mutated();

        let mut rng = rng_for(&[&query.kinase, &query.motif(), &position, &mutated]);

        let charge = calculate_charge(original, mutated, position, &mut rng);
        let size = calculate_size(original, mutated, position, &mut rng);
        let hydrophobicity = calculate_hydrophobicity(original, mutated, position, &mut rng);
        let polarity = calculate_polarity(original, mutated, position, &mut rng);
        let probability = calculate_probability(
            &query.kinase,
            query.motif(),
            original,
            mutated,
            position,
            &self.data,
            &mut rng,
        );
        let aromatic = calculate_aromatic(original, mutated, position, &mut rng);

        vec![charge, size, hydrophobicity, polarity, probability, aromatic]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProbabilityMatrix;
    use crate::utils::AminoAcid;
    use approx::assert_relative_eq;

    fn scorer() -> MutationScorer {
        let mut serthr = ProbabilityMatrix::default();
        serthr.insert("PKA", -3, AminoAcid::Arg, 0.45);
        serthr.insert("PKA", -3, AminoAcid::Ala, 0.02);
        MutationScorer::new(ReferenceData::empty().with_serthr_matrices(serthr))
    }

    #[test]
    fn test_invalid_inputs() {
        let s = scorer();
        assert_eq!(s.predict("PKA", "X", "RRASV", 2, 'A', 'G').overall(), "Invalid Input");
        assert_eq!(s.predict("PKA", "X", "LRRASVAGSLS", 11, 'A', 'G').overall(), "Invalid Input");
        assert_eq!(s.predict("PKA", "X", "LRRASVAGSLS", 2, 'A', 'G').overall(), "Invalid Input");
    }

    #[test]
    fn test_acceptor_loss_short_circuits() {
        let prediction = scorer().predict("PKA", "X", "LRRASSAGSLS", 5, 'S', 'A');
        let report = prediction.report().unwrap();

        assert_eq!(report.category, ImpactCategory::HighImpact);
        assert!(report.is_acceptor_loss());
        assert!(report.factors.is_empty());
    }

    #[test]
    fn test_acceptor_swap_is_scored() {
        // S → T keeps the hydroxyl; full factor path runs
        let prediction = scorer().predict("PKA", "X", "LRRASSAGSLS", 5, 'S', 'T');
        let report = prediction.report().unwrap();
        assert_eq!(report.factors.len(), 6);
        assert!(report.score.is_some());
    }

    #[test]
    fn test_score_matches_factor_sum() {
        let prediction = scorer().predict("PKA", "X", "LRRASSAGSLS", 2, 'R', 'A');
        let report = prediction.report().unwrap();

        let expected = normalize_total(report.total_delta());
        assert_relative_eq!(report.score.unwrap(), expected);
        assert_eq!(report.category, ImpactCategory::from_score(expected));

        // probability ratio 0.02/0.45 < 0.5 → loss in [50, 90)
        let probability = &report.factors[4];
        assert_eq!(probability.factor, Factor::Probability);
        assert!(probability.delta >= 50.0 && probability.delta < 90.0);
    }

    #[test]
    fn test_predict_once_boundary_handling() {
        let s = scorer();
        assert_eq!(
            s.predict_once("PKA", "X", "", 1, "A"),
            Prediction::Invalid(ValidationError::SubstrateRange)
        );
        assert_eq!(
            s.predict_once("PKA", "X", "lrrassagsls", 12, "a"),
            Prediction::Invalid(ValidationError::SubstrateRange)
        );
        assert_eq!(
            s.predict_once("PKA", "X", "lrrassagsls", 3, "AL"),
            Prediction::Invalid(ValidationError::ReplacementResidue("AL".into()))
        );

        let lowercase = s.predict_once("PKA", "X", "lrrassagsls", 3, "a");
        let uppercase = s.predict("PKA", "X", "LRRASSAGSLS", 2, 'R', 'A');
        assert_eq!(lowercase, uppercase);
    }

    #[test]
    fn test_request_missing_and_null_fields_default() {
        let request: PredictionRequest = serde_json::from_str(
            r#"{"kinase": null, "substrate": "LRRASSAGSLS", "position": null}"#,
        )
        .unwrap();
        assert_eq!(request.kinase, "");
        assert_eq!(request.gene, "");
        assert_eq!(request.position, 0);
        assert_eq!(request.new_aa, "");

        assert_eq!(
            scorer().predict_request(&request),
            Prediction::Invalid(ValidationError::SubstrateRange)
        );
    }

    #[test]
    fn test_normalized_request_keeps_fields_apart() {
        let a = PredictionRequest {
            kinase: "CK1:X".into(),
            gene: "EGFR".into(),
            substrate: "lrrassagsls".into(),
            position: 3,
            new_aa: " a".into(),
        };
        let b = PredictionRequest { kinase: "CK1".into(), gene: "X:EGFR".into(), ..a.clone() };

        assert_ne!(a.normalized(), b.normalized());
        assert_eq!(a.normalized().substrate, "LRRASSAGSLS");
        assert_eq!(a.normalized().new_aa, "A");
    }

    #[test]
    fn test_batch_preserves_order() {
        let s = scorer();
        let requests: Vec<PredictionRequest> = (1..=11)
            .map(|position| PredictionRequest {
                kinase: "PKA".into(),
                gene: "X".into(),
                substrate: "LRRASSAGSLS".into(),
                position,
                new_aa: "G".into(),
            })
            .collect();

        let batch = s.predict_batch(&requests);
        assert_eq!(batch.len(), requests.len());
        for (request, prediction) in requests.iter().zip(&batch) {
            assert_eq!(prediction, &s.predict_request(request));
        }
    }
}
