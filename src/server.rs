use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::trace::TraceLayer;

use crate::api::{
    ApiAnalyzeRequest, ApiAnalyzeResponse, ApiError, ApiHealthResponse, ApiPredictRequest,
    ApiPredictResponse,
};
use credibility_engine::config::EngineConfig;
use credibility_engine::CredibilityEngine;

#[derive(Clone)]
struct AppState {
    engine: Arc<CredibilityEngine>,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs, config: EngineConfig) -> Result<(), String> {
    let engine = CredibilityEngine::from_config(&config);
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/", get(home))
        .route("/api/health", get(health))
        .route("/predict", post(predict_handler))
        .route("/api/analyze", post(analyze_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    tracing::info!(%addr, "credibility service listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn home() -> &'static str {
    "Fake News Detector API is running"
}

async fn health(State(state): State<AppState>) -> Json<ApiHealthResponse> {
    let fingerprints = state
        .engine
        .capability()
        .and_then(|capability| capability.fingerprints());
    Json(ApiHealthResponse {
        status: if state.engine.is_ready() { "ok" } else { "degraded" },
        model_ready: state.engine.is_ready(),
        vectorizer_fingerprint: fingerprints.map(|f| f.vectorizer.clone()),
        classifier_fingerprint: fingerprints.map(|f| f.classifier.clone()),
    })
}

async fn predict_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApiPredictRequest>, JsonRejection>,
) -> Result<Json<ApiPredictResponse>, ApiError> {
    let Json(request) = payload.map_err(log_rejection)?;
    let text = request.text.unwrap_or_default();
    let verdict = state.engine.evaluate(&text).map_err(log_failure)?;
    Ok(Json(ApiPredictResponse {
        prediction: verdict.model_prediction,
    }))
}

async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApiAnalyzeRequest>, JsonRejection>,
) -> Result<Json<ApiAnalyzeResponse>, ApiError> {
    let Json(request) = payload.map_err(log_rejection)?;
    let request_id = request.request_id.unwrap_or_else(generate_request_id);
    let text = request.text.unwrap_or_default();
    let verdict = state.engine.evaluate(&text).map_err(log_failure)?;
    tracing::info!(
        %request_id,
        score = verdict.score,
        status = verdict.status.label(),
        "analysis complete"
    );
    Ok(Json(ApiAnalyzeResponse::from_verdict(verdict, request_id)))
}

fn log_failure(err: credibility_engine::EngineError) -> ApiError {
    tracing::warn!(kind = err.kind(), error = %err, "evaluation failed");
    ApiError::from(err)
}

fn log_rejection(rejection: JsonRejection) -> ApiError {
    tracing::warn!(error = %rejection.body_text(), "rejected request body");
    ApiError::from(rejection)
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
