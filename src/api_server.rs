// Axum API Server Module
//
// Purpose: REST boundary over MutationScorer (single + batch predictions,
// kinase/gene name lists for form population)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::data::{load_name_list, DataPaths};
use crate::explanation::{HtmlFormatter, Prediction};
use crate::scorer::{MutationScorer, PredictionRequest};

/// Upper bound on requests accepted by the batch endpoint
pub const MAX_BATCH_SIZE: usize = 1_000;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<MutationScorer>,
    pub kinases: Arc<Vec<String>>,
    pub genes: Arc<Vec<String>>,
    /// Rendered prediction responses keyed by normalised request
    pub cache: Cache<PredictionRequest, Value>,
}

impl AppState {
    /// Load reference tables and name lists from `data_dir`
    pub async fn new(data_dir: &str) -> anyhow::Result<Self> {
        let paths = DataPaths::from_dir(data_dir);

        tracing::info!("Loading reference tables from {}...", data_dir);
        let (scorer, kinases, genes) = tokio::task::spawn_blocking(move || {
            let scorer = MutationScorer::load(&paths);
            let kinases = load_name_list(&paths.kinase_list);
            let genes = load_name_list(&paths.gene_list);
            (scorer, kinases, genes)
        })
        .await?;

        tracing::info!("Loaded {} kinase names, {} gene names", kinases.len(), genes.len());
        Ok(Self::with_scorer(scorer, kinases, genes))
    }

    /// Build state around an already-constructed scorer
    pub fn with_scorer(scorer: MutationScorer, kinases: Vec<String>, genes: Vec<String>) -> Self {
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(3600))
            .build();

        Self {
            scorer: Arc::new(scorer),
            kinases: Arc::new(kinases),
            genes: Arc::new(genes),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))

        // Name lists for the input form
        .route("/api/kinases", get(list_kinases))
        .route("/api/genes", get(list_genes))

        // Predictions
        .route("/api/predict", post(predict))
        .route("/api/predict/batch", post(predict_batch))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_kinases(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "count": state.kinases.len(),
        "kinases": state.kinases.as_ref(),
    }))
}

async fn list_genes(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "count": state.genes.len(),
        "genes": state.genes.as_ref(),
    }))
}

async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictionRequest>,
) -> Result<Json<Value>, AppError> {
    let cache_key = payload.normalized();
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    // CPU-bound work: run in blocking thread pool
    let scorer = state.scorer.clone();
    let result = tokio::task::spawn_blocking(move || {
        let prediction = scorer.predict_request(&payload);
        response_value(&prediction)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct BatchPredictionRequest {
    pub requests: Vec<PredictionRequest>,
}

async fn predict_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchPredictionRequest>,
) -> Result<Json<Value>, AppError> {
    let count = payload.requests.len();
    if count == 0 {
        return Err(AppError::BadRequest("No requests supplied".to_string()));
    }
    if count > MAX_BATCH_SIZE {
        return Err(AppError::BadRequest(format!(
            "Batch of {} exceeds the limit of {}",
            count, MAX_BATCH_SIZE
        )));
    }

    tracing::info!("Scoring batch of {} mutations", count);

    // Rayon fans out inside the blocking pool
    let scorer = state.scorer.clone();
    let results = tokio::task::spawn_blocking(move || {
        scorer
            .predict_batch(&payload.requests)
            .iter()
            .map(response_value)
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(serde_json::json!({
        "count": count,
        "results": results,
    })))
}

/// `{overall, details_markdown, details_html}`
pub fn response_value(prediction: &Prediction) -> Value {
    let markdown = prediction.details();
    serde_json::json!({
        "overall": prediction.overall(),
        "details_html": HtmlFormatter::render_markdown(&markdown),
        "details_markdown": markdown,
    })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
