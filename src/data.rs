//! Reference Data Loading and Management
//!
//! Holds the read-only tables every prediction consults:
//! - experimentally observed substitution pairs (plausibility flag)
//! - tyrosine and serine/threonine positional probability matrices
//! - disease-associated mutations
//! - phosphosite records with their sequence windows
//!
//! Loading never fails: a missing or malformed file is logged and the
//! corresponding table stays empty, so dependent features report "no data"
//! instead of erroring.

use crate::utils::AminoAcid;
use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, DataType, Reader};
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// `ARG123CYS`-style mutation codes (anchored at the start only)
static THREE_LETTER_MUTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{3})(\d+)([A-Z]{3})").expect("valid regex"));

/// `S123`-style phosphosite labels
static PHOSPHOSITE_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z])(\d+)").expect("valid regex"));

/// `-3R`-style matrix column headers
static MATRIX_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?\d+)\s*([A-Za-z])\s*$").expect("valid regex"));

/// Ordered (original, replacement) residue pair
pub type SubstitutionPair = (AminoAcid, AminoAcid);

/// Decode `ORIG<pos>NEW` into residues and absolute position
///
/// Unknown three-letter codes yield `None`.
pub fn decode_three_letter_mutation(code: &str) -> Option<(AminoAcid, i64, AminoAcid)> {
    let upper = code.trim().to_ascii_uppercase();
    let caps = THREE_LETTER_MUTATION.captures(&upper)?;
    let original = AminoAcid::from_three_letter(&caps[1])?;
    let position = caps[2].parse().ok()?;
    let mutated = AminoAcid::from_three_letter(&caps[3])?;
    Some((original, position, mutated))
}

/// Positional substrate-preference probabilities for a family of kinases
///
/// Keyed by kinase name, then by (position relative to the center, residue).
#[derive(Debug, Clone, Default)]
pub struct ProbabilityMatrix {
    kinases: FxHashMap<String, FxHashMap<(i32, AminoAcid), f64>>,
}

impl ProbabilityMatrix {
    pub fn insert(&mut self, kinase: &str, relative_position: i32, residue: AminoAcid, probability: f64) {
        self.kinases
            .entry(kinase.to_string())
            .or_default()
            .insert((relative_position, residue), probability);
    }

    /// Probability for a residue at a relative position; 0.0 when absent
    pub fn probability(&self, kinase: &str, relative_position: i32, residue: AminoAcid) -> f64 {
        self.kinases
            .get(kinase)
            .and_then(|row| row.get(&(relative_position, residue)))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn contains_kinase(&self, kinase: &str) -> bool {
        self.kinases.contains_key(kinase)
    }

    pub fn kinase_count(&self) -> usize {
        self.kinases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinases.is_empty()
    }

    /// Parse a column header such as `-3R` or `0S`
    pub fn parse_column(header: &str) -> Option<(i32, AminoAcid)> {
        let caps = MATRIX_COLUMN.captures(header)?;
        let position = caps[1].parse().ok()?;
        let residue = caps[2].chars().next().and_then(AminoAcid::from_one_letter)?;
        Some((position, residue))
    }
}

/// Documented phosphorylation site with its surrounding sequence window
#[derive(Debug, Clone, PartialEq)]
pub struct PhosphositeRecord {
    pub gene: String,
    /// Site label such as `S1046`
    pub phosphosite: String,
    pub sequence_window: String,
}

impl PhosphositeRecord {
    pub fn new(gene: &str, phosphosite: &str, sequence_window: &str) -> Self {
        Self {
            gene: gene.to_string(),
            phosphosite: phosphosite.to_string(),
            sequence_window: sequence_window.to_string(),
        }
    }

    /// Absolute sequence position of the site, if the label parses
    pub fn absolute_position(&self) -> Option<i64> {
        let upper = self.phosphosite.trim().to_ascii_uppercase();
        PHOSPHOSITE_LABEL
            .captures(&upper)
            .and_then(|caps| caps[2].parse().ok())
    }
}

/// Disease-associated point mutation
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseMutationRecord {
    pub gene: String,
    /// Three-letter code, e.g. `ARG776CYS`
    pub mutation: String,
    pub phenotype: String,
}

impl DiseaseMutationRecord {
    pub fn new(gene: &str, mutation: &str, phenotype: &str) -> Self {
        Self {
            gene: gene.to_string(),
            mutation: mutation.to_string(),
            phenotype: phenotype.to_string(),
        }
    }

    pub fn decode(&self) -> Option<(AminoAcid, i64, AminoAcid)> {
        decode_three_letter_mutation(&self.mutation)
    }
}

/// Locations of the reference files inside a data directory
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub mutations: PathBuf,
    pub tyrosine_matrices: PathBuf,
    pub serthr_matrices: PathBuf,
    pub disease_associations: PathBuf,
    pub phosphosite_parts: Vec<PathBuf>,
    pub kinase_list: PathBuf,
    pub gene_list: PathBuf,
}

pub const TYROSINE_SHEET: &str = "tyrosine_all_norm_matrices";
pub const SERTHR_SHEET: &str = "ser_thr_all_norm_matrices";

impl DataPaths {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            mutations: dir.join("filtered_valid_mutations.xlsx"),
            tyrosine_matrices: dir.join("Tyrosine.xlsx"),
            serthr_matrices: dir.join("SerThr.xlsx"),
            disease_associations: dir.join("Disease_Association_Data.xlsx"),
            phosphosite_parts: (1..=4)
                .map(|i| dir.join(format!("ochoa_part_{}.csv", i)))
                .collect(),
            kinase_list: dir.join("kinase_list.txt"),
            gene_list: dir.join("gene_list.txt"),
        }
    }
}

/// All reference tables, loaded once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub possible_mutations: FxHashSet<SubstitutionPair>,
    pub tyrosine_matrices: ProbabilityMatrix,
    pub serthr_matrices: ProbabilityMatrix,
    pub disease_mutations: Vec<DiseaseMutationRecord>,
    pub phosphosites: Vec<PhosphositeRecord>,
}

impl ReferenceData {
    /// Tables with no rows; every lookup degrades to its neutral result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_possible_mutations(mut self, pairs: impl IntoIterator<Item = SubstitutionPair>) -> Self {
        self.possible_mutations.extend(pairs);
        self
    }

    pub fn with_tyrosine_matrices(mut self, matrix: ProbabilityMatrix) -> Self {
        self.tyrosine_matrices = matrix;
        self
    }

    pub fn with_serthr_matrices(mut self, matrix: ProbabilityMatrix) -> Self {
        self.serthr_matrices = matrix;
        self
    }

    pub fn with_disease_mutations(mut self, records: Vec<DiseaseMutationRecord>) -> Self {
        self.disease_mutations = records;
        self
    }

    pub fn with_phosphosites(mut self, records: Vec<PhosphositeRecord>) -> Self {
        self.phosphosites = records;
        self
    }

    /// Load every table, substituting an empty table for any that fails
    pub fn load(paths: &DataPaths) -> Self {
        tracing::info!("Loading reference tables...");

        let possible_mutations = or_empty(
            Self::load_possible_mutations(&paths.mutations),
            "mutation set",
        );
        let tyrosine_matrices = or_empty(
            Self::load_probability_matrix(&paths.tyrosine_matrices, TYROSINE_SHEET),
            "tyrosine matrices",
        );
        let serthr_matrices = or_empty(
            Self::load_probability_matrix(&paths.serthr_matrices, SERTHR_SHEET),
            "ser/thr matrices",
        );
        let disease_mutations = or_empty(
            Self::load_disease_associations(&paths.disease_associations),
            "disease associations",
        );
        let phosphosites = Self::load_phosphosites(&paths.phosphosite_parts);

        tracing::info!("  Observed substitutions: {}", possible_mutations.len());
        tracing::info!("  Tyrosine kinases: {}", tyrosine_matrices.kinase_count());
        tracing::info!("  Ser/Thr kinases: {}", serthr_matrices.kinase_count());
        tracing::info!("  Disease mutations: {}", disease_mutations.len());
        tracing::info!("  Phosphosites: {}", phosphosites.len());

        Self {
            possible_mutations,
            tyrosine_matrices,
            serthr_matrices,
            disease_mutations,
            phosphosites,
        }
    }

    /// Substitution pairs from the `Mutation` column of the observed-mutation sheet
    fn load_possible_mutations(path: &Path) -> Result<FxHashSet<SubstitutionPair>> {
        let (headers, rows) = read_sheet(path, None)?;
        let mutation_idx = column_index(&headers, "Mutation")?;

        let pairs = rows
            .iter()
            .filter_map(|row| row.get(mutation_idx))
            .filter_map(|cell| decode_three_letter_mutation(&cell_to_string(cell)))
            .map(|(original, _, mutated)| (original, mutated))
            .collect();

        Ok(pairs)
    }

    /// Matrix sheet: first column = kinase, remaining headers = `{pos}{residue}`
    fn load_probability_matrix(path: &Path, sheet: &str) -> Result<ProbabilityMatrix> {
        let (headers, rows) = read_sheet(path, Some(sheet))?;

        let columns: Vec<(usize, i32, AminoAcid)> = headers
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(idx, h)| {
                ProbabilityMatrix::parse_column(h).map(|(pos, aa)| (idx, pos, aa))
            })
            .collect();

        let mut matrix = ProbabilityMatrix::default();
        for row in &rows {
            let kinase = match row.first().map(cell_to_string) {
                Some(k) if !k.is_empty() => k,
                _ => continue,
            };
            for &(idx, pos, aa) in &columns {
                if let Some(p) = row.get(idx).and_then(cell_to_f64) {
                    matrix.insert(&kinase, pos, aa, p);
                }
            }
        }

        Ok(matrix)
    }

    fn load_disease_associations(path: &Path) -> Result<Vec<DiseaseMutationRecord>> {
        let (headers, rows) = read_sheet(path, None)?;
        let gene_idx = column_index(&headers, "Gene")?;
        let mutation_idx = column_index(&headers, "Mutation")?;
        let phenotype_idx = headers.iter().position(|h| h == "Phenotype");

        let records = rows
            .iter()
            .filter_map(|row| {
                let gene = row.get(gene_idx).map(cell_to_string)?;
                let mutation = row.get(mutation_idx).map(cell_to_string)?;
                let phenotype = phenotype_idx
                    .and_then(|i| row.get(i))
                    .map(cell_to_string)
                    .unwrap_or_default();
                Some(DiseaseMutationRecord { gene, mutation, phenotype })
            })
            .collect();

        Ok(records)
    }

    /// Concatenate phosphosite CSV parts in order; unreadable parts are skipped
    fn load_phosphosites(parts: &[PathBuf]) -> Vec<PhosphositeRecord> {
        let mut records = Vec::new();
        for part in parts {
            if !part.exists() {
                tracing::debug!("Phosphosite part not found: {:?}", part);
                continue;
            }
            match Self::load_phosphosite_part(part) {
                Ok(mut rows) => records.append(&mut rows),
                Err(e) => tracing::warn!("Skipping phosphosite part {:?}: {:#}", part, e),
            }
        }
        records
    }

    /// Columns: Gene, Phosphosite, sequence_window (all read as strings)
    fn load_phosphosite_part(path: &Path) -> Result<Vec<PhosphositeRecord>> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load phosphosite CSV: {:?}", path))?;

        let genes = df.column("Gene")
            .with_context(|| "Column 'Gene' not found")?
            .str()
            .with_context(|| "Column 'Gene' is not string type")?;
        let sites = df.column("Phosphosite")
            .with_context(|| "Column 'Phosphosite' not found")?
            .str()
            .with_context(|| "Column 'Phosphosite' is not string type")?;
        let windows = df.column("sequence_window")
            .with_context(|| "Column 'sequence_window' not found")?
            .str()
            .with_context(|| "Column 'sequence_window' is not string type")?;

        let mut records = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            if let (Some(gene), Some(window)) = (genes.get(idx), windows.get(idx)) {
                records.push(PhosphositeRecord::new(gene, sites.get(idx).unwrap_or(""), window));
            }
        }

        Ok(records)
    }
}

/// Names from a one-per-line text file; empty when the file is unreadable
pub fn load_name_list(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            tracing::warn!("Name list {:?} unavailable: {}", path, e);
            Vec::new()
        }
    }
}

fn or_empty<T: Default>(result: Result<T>, table: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("Reference table '{}' unavailable, using empty table: {:#}", table, e);
        T::default()
    })
}

/// Header row plus data rows of a worksheet (named, or the first one)
fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<(Vec<String>, Vec<Vec<DataType>>)> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {:?}", path))?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook.worksheet_range_at(0),
    }
    .ok_or_else(|| anyhow!("Worksheet {:?} missing in {:?}", sheet, path))?
    .with_context(|| format!("Failed to read worksheet in {:?}", path))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .ok_or_else(|| anyhow!("Empty worksheet in {:?}", path))?
        .iter()
        .map(cell_to_string)
        .collect();
    let data = rows.map(|r| r.to_vec()).collect();

    Ok((headers, data))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow!("Column '{}' not found. Available columns: {:?}", name, headers))
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.trim().to_string(),
        DataType::Empty => String::new(),
        DataType::Bool(b) => b.to_string(),
        DataType::Error(e) => format!("ERR({e:?})"),
        DataType::Float(n) | DataType::Duration(n) => n.to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::DateTime(f) => f.to_string(),
        DataType::DateTimeIso(s) | DataType::DurationIso(s) => s.clone(),
    }
}

fn cell_to_f64(cell: &DataType) -> Option<f64> {
    let value = match cell {
        DataType::Float(f) => *f,
        DataType::Int(i) => *i as f64,
        DataType::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
