//! Benchmarks for mutation impact prediction
//!
//! - Single prediction (six-factor path and acceptor-loss short-circuit)
//! - Parallel batch scoring over every substitution of one motif

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kinase_impact_scorer::data::{DiseaseMutationRecord, PhosphositeRecord, ProbabilityMatrix};
use kinase_impact_scorer::{AminoAcid, MutationScorer, PredictionRequest, ReferenceData};

const MOTIF: &str = "RPQSPVGTGSY";

fn create_scorer() -> MutationScorer {
    let mut serthr = ProbabilityMatrix::default();
    for relative in -5..=5 {
        for (i, aa) in AminoAcid::ALL.iter().enumerate() {
            serthr.insert("EGFR", relative, *aa, (i as f64 + 1.0) / 210.0);
        }
    }

    let data = ReferenceData::empty()
        .with_possible_mutations([(AminoAcid::Val, AminoAcid::Ala)])
        .with_serthr_matrices(serthr)
        .with_phosphosites(vec![PhosphositeRecord::new("EGFR", "S100", "MKLRPQSPVGTGSYE")])
        .with_disease_mutations(vec![DiseaseMutationRecord::new(
            "EGFR",
            "VAL101ALA",
            "Lung adenocarcinoma",
        )]);

    MutationScorer::new(data)
}

// ============================================================================
// SINGLE PREDICTION
// ============================================================================

fn bench_single_prediction(c: &mut Criterion) {
    let scorer = create_scorer();
    let mut group = c.benchmark_group("Single Prediction");

    group.bench_function("six_factor", |b| {
        b.iter(|| black_box(scorer.predict("EGFR", "EGFR", black_box(MOTIF), 5, 'V', 'A')))
    });

    group.bench_function("acceptor_loss", |b| {
        b.iter(|| black_box(scorer.predict("EGFR", "EGFR", black_box("RPQSPSGTGSY"), 5, 'S', 'A')))
    });

    group.bench_function("with_markdown", |b| {
        b.iter(|| black_box(scorer.predict("EGFR", "EGFR", MOTIF, 5, 'V', 'A').details()))
    });

    group.finish();
}

// ============================================================================
// BATCH SCORING
// ============================================================================

fn bench_batch(c: &mut Criterion) {
    let scorer = create_scorer();
    let mut group = c.benchmark_group("Batch Prediction");

    for repeats in [1usize, 10, 50].iter() {
        let requests: Vec<PredictionRequest> = (0..*repeats)
            .flat_map(|_| {
                (1..=11).flat_map(|position| {
                    AminoAcid::ALL.into_iter().map(move |aa| PredictionRequest {
                        kinase: "EGFR".into(),
                        gene: "EGFR".into(),
                        substrate: MOTIF.into(),
                        position,
                        new_aa: aa.one_letter().to_string(),
                    })
                })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("predict_batch", requests.len()),
            &requests,
            |b, requests| b.iter(|| black_box(scorer.predict_batch(requests))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_prediction, bench_batch);
criterion_main!(benches);
