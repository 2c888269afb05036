//! API routes for algoscope endpoints

use algoscope_core::{
    complexity_entries, note_of, ClassificationRequest, ClassificationResult, Language,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::OpenApi;

use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::middleware::not_found;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check handler
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze request
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct AnalyzeRequest {
    /// Source code to classify
    #[serde(default)]
    pub code: Option<String>,
    /// Caller-asserted algorithm; only `/analyze/asserted` honours it
    #[serde(default)]
    pub algorithm: Option<String>,
}

impl From<AnalyzeRequest> for ClassificationRequest {
    fn from(req: AnalyzeRequest) -> Self {
        ClassificationRequest {
            code: req.code,
            algorithm: req.algorithm,
        }
    }
}

/// Analyze response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// `null` when no algorithm signature matched
    pub algorithm: Option<String>,
    pub language: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub note: String,
}

impl From<ClassificationResult> for AnalyzeResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            algorithm: result.algorithm.map(|a| a.name().to_string()),
            language: result.language.name().to_string(),
            time_complexity: result.time_complexity,
            space_complexity: result.space_complexity,
            note: result.note,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum AnalyzeMode {
    Detect,
    Asserted,
}

fn run_analysis(
    state: &AppState,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
    mode: AnalyzeMode,
) -> ApiResult<Json<AnalyzeResponse>> {
    let metrics = state.metrics();
    metrics.record_request();

    let Json(req) = payload.map_err(|rejection| {
        metrics.record_bad_request();
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed analyze body");
        ApiError::from(rejection)
    })?;

    let request = ClassificationRequest::from(req);
    tracing::debug!(
        code_bytes = request.code.as_ref().map(String::len).unwrap_or(0),
        asserted_algorithm = ?request.algorithm,
        mode = ?mode,
        "Analyze request"
    );

    let classifier = state.classifier();
    let outcome = match mode {
        AnalyzeMode::Detect => classifier.classify(&request),
        AnalyzeMode::Asserted => classifier.classify_asserted(&request),
    };

    match outcome {
        Ok(result) => {
            metrics.record_result(&result);
            Ok(Json(AnalyzeResponse::from(result)))
        }
        Err(e) => {
            metrics.record_rejection(&e);
            tracing::warn!(code = e.code(), "Error: {}", e);
            Err(e.into())
        }
    }
}

/// Classify a snippet, detecting the algorithm
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Snippet classified", body = AnalyzeResponse),
        (status = 400, description = "Missing code, unsupported language or malformed body", body = ErrorResponse),
        (status = 413, description = "Body exceeds the configured limit", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalyzeResponse>> {
    run_analysis(&state, payload, AnalyzeMode::Detect)
}

/// Classify a snippet using the caller-asserted algorithm when given
#[utoipa::path(
    post,
    path = "/analyze/asserted",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Snippet classified", body = AnalyzeResponse),
        (status = 400, description = "Missing code, invalid algorithm, unsupported language or malformed body", body = ErrorResponse),
        (status = 413, description = "Body exceeds the configured limit", body = ErrorResponse)
    )
)]
pub async fn analyze_asserted(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalyzeResponse>> {
    run_analysis(&state, payload, AnalyzeMode::Asserted)
}

/// Supported language entry
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LanguageEntry {
    pub name: String,
    pub note: String,
}

/// Supported algorithm entry
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmEntry {
    pub name: String,
    pub time_complexity: String,
    pub space_complexity: String,
}

/// Everything the classifier can report
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogResponse {
    /// In detection-rule order
    pub languages: Vec<LanguageEntry>,
    pub algorithms: Vec<AlgorithmEntry>,
}

/// Catalog handler
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    responses(
        (status = 200, description = "Supported languages and algorithms", body = CatalogResponse)
    )
)]
pub async fn catalog() -> Json<CatalogResponse> {
    let languages = Language::ALL
        .iter()
        .map(|l| LanguageEntry {
            name: l.name().to_string(),
            note: note_of(*l).to_string(),
        })
        .collect();

    let algorithms = complexity_entries()
        .map(|(algorithm, entry)| AlgorithmEntry {
            name: algorithm.name().to_string(),
            time_complexity: entry.time.to_string(),
            space_complexity: entry.space.to_string(),
        })
        .collect();

    Json(CatalogResponse {
        languages,
        algorithms,
    })
}

/// Prometheus metrics handler
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus formatted metrics", body = String)
    )
)]
pub async fn get_prometheus_metrics(State(state): State<AppState>) -> String {
    state.metrics().snapshot().to_prometheus()
}

#[derive(OpenApi)]
#[openapi(
    paths(health, analyze, analyze_asserted, catalog, get_prometheus_metrics),
    components(schemas(
        HealthResponse,
        AnalyzeRequest,
        AnalyzeResponse,
        CatalogResponse,
        LanguageEntry,
        AlgorithmEntry,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the API router
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/analyze/asserted", post(analyze_asserted))
        .route("/api/v1/catalog", get(catalog))
        .route("/metrics", get(get_prometheus_metrics))
        .fallback(not_found)
        .with_state(state)
}
