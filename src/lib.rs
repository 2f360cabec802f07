//! Kinase Mutation Impact Scorer
//!
//! Predicts how a single amino-acid substitution inside an 11-residue
//! kinase substrate motif changes phosphorylation, and correlates the
//! mutation with known disease variants.
//!
//! Module layout:
//! - `utils/`: amino-acid tables, context-seeded RNG, normalization
//! - `data`: reference tables and their loaders (calamine + Polars)
//! - `metrics/`: one file per factor (F1-F6)
//! - `validation`: request invariants
//! - `disease_association`: disease correlation and plausibility lookup
//! - `scorer`: aggregation, classification and batch scoring
//! - `explanation/`: report types and markdown/JSON/HTML formatters

pub mod utils;
pub mod data;
pub mod metrics;
pub mod validation;
pub mod disease_association;
pub mod explanation;
pub mod scorer;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use data::{DataPaths, ReferenceData};
pub use disease_association::DiseaseAssociation;
pub use explanation::{ImpactReport, MarkdownFormatter, Prediction};
pub use metrics::{Factor, FactorResult};
pub use scorer::{MutationScorer, PredictionRequest};
pub use utils::{AminoAcid, ImpactCategory};
pub use validation::{MutationQuery, ValidationError};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
