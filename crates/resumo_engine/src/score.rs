use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use resumo_core::{ScoreResults, MAX_SCORE};
use serde::{Deserialize, Serialize};

use crate::http::map_reqwest_error;
use crate::{ApiError, HttpClient};

#[derive(Debug, Serialize)]
struct ScoreRequestBody<'a> {
    job_description: &'a str,
}

/// Body of a successful `POST /api/resume/{id}/score`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreResponse {
    pub ats_score: f64,
    #[serde(default)]
    pub matching_skills: Option<Vec<String>>,
    #[serde(default)]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl From<ScoreResponse> for ScoreResults {
    fn from(response: ScoreResponse) -> Self {
        let score = if response.ats_score.is_finite() {
            response.ats_score.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
        } else {
            0
        };
        ScoreResults {
            ats_score: score,
            matching_skills: response.matching_skills.unwrap_or_default(),
            missing_skills: response.missing_skills.unwrap_or_default(),
            recommendation: response.recommendation.unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
pub trait ScoreClient: Send + Sync {
    async fn score(&self, resume_id: &str, job_description: &str)
        -> Result<ScoreResults, ApiError>;
}

#[derive(Clone)]
pub struct ReqwestScoreClient {
    http: HttpClient,
}

impl ReqwestScoreClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl ScoreClient for ReqwestScoreClient {
    async fn score(
        &self,
        resume_id: &str,
        job_description: &str,
    ) -> Result<ScoreResults, ApiError> {
        let url = self
            .http
            .endpoint(&["api", "resume", resume_id, "score"])?;
        let body = serde_json::to_vec(&ScoreRequestBody { job_description })
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        let builder = self
            .http
            .request(Method::POST, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);
        let response = self.http.send(builder).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: ScoreResponse =
            serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(parsed.into())
    }
}
