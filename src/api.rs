use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use credibility_engine::{CredibilityStatus, EngineError, Indicators, Prediction, Verdict};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
    #[serde(alias = "requestId")]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiPredictRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiPredictResponse {
    pub prediction: Prediction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnalyzeResponse {
    pub request_id: String,
    pub score: u8,
    pub status: CredibilityStatus,
    pub indicators: Indicators,
    pub recommendations: Vec<String>,
    pub model_prediction: Prediction,
    pub confidence_real: f64,
    pub confidence_fake: f64,
}

impl ApiAnalyzeResponse {
    pub fn from_verdict(verdict: Verdict, request_id: String) -> Self {
        Self {
            request_id,
            score: verdict.score,
            status: verdict.status,
            indicators: verdict.indicators,
            recommendations: verdict.recommendations,
            model_prediction: verdict.model_prediction,
            confidence_real: verdict.confidence_real,
            confidence_fake: verdict.confidence_fake,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub model_ready: bool,
    pub vectorizer_fingerprint: Option<String>,
    pub classifier_fingerprint: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Failure rendered as `{"error": {"kind", "message"}}`.
#[derive(Debug)]
pub enum ApiError {
    Engine(EngineError),
    InvalidRequest(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Engine(EngineError::EmptyInput) => StatusCode::BAD_REQUEST,
            ApiError::Engine(EngineError::ClassifierUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Engine(EngineError::ClassificationFailure { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Engine(err) => err.kind(),
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn envelope(&self) -> ApiErrorEnvelope {
        let message = match self {
            ApiError::Engine(err) => err.to_string(),
            ApiError::InvalidRequest(detail) => format!("invalid request body: {}", detail),
        };
        ApiErrorEnvelope {
            error: ApiErrorBody {
                kind: self.kind(),
                message,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.envelope())).into_response()
    }
}
