use resumo_core::{AnalysisReport, OptimizationOutput, RequestId, ScoreResults};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request cancelled")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Client(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationRequest {
    pub resume: String,
    pub job_description: String,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisReport, ApiError>,
    },
    OptimizationCompleted {
        request_id: RequestId,
        result: Result<OptimizationOutput, ApiError>,
    },
    ScoreCompleted {
        result: Result<ScoreResults, ApiError>,
    },
    /// A navigation target was loaded and checked for page toast metadata.
    Navigated {
        path: String,
        result: Result<(), ApiError>,
    },
}
