/// Recommendation service access
///
/// The submitter reaches the service through the `RecommendEndpoint`
/// trait so tests can swap in a canned endpoint. The HTTP
/// implementation folds every failure into `FetchResult` at this
/// boundary; no `Err` crosses it.
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ProfileRequest, RecommendResponse},
};

const RECOMMEND_ENDPOINT: &str = "/recommend";
const HEALTH_ENDPOINT: &str = "/health";

/// Outcome of one submission exchange
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// The service answered with a parseable envelope. Its status field
    /// may still report an application-level failure.
    Success(RecommendResponse),
    /// The exchange failed or the body was not a valid envelope
    TransportFailure(String),
}

/// Trait for recommendation backends
#[async_trait]
pub trait RecommendEndpoint: Send + Sync {
    /// Submits a profile and returns the exchange outcome
    async fn recommend(&self, request: ProfileRequest) -> FetchResult;
}

#[derive(Clone)]
pub struct HttpRecommendEndpoint {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendEndpoint {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Probes the service health route. The host may call this at
    /// startup; submissions never do.
    pub async fn health(&self) -> AppResult<()> {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Health check returned status {}: {}",
                status, body
            )));
        }

        Ok(())
    }

    async fn try_recommend(&self, request: &ProfileRequest) -> AppResult<RecommendResponse> {
        let url = format!("{}{}", self.base_url, RECOMMEND_ENDPOINT);
        let response = self.http_client.post(&url).json(request).send().await?;

        // The service reports application failures inside the JSON
        // envelope (with a 500 status), so the body is parsed regardless
        // of HTTP status.
        let status = response.status();
        let response_text = response.text().await?;
        tracing::debug!(status = %status, response = %response_text, "Raw recommendation response");

        let envelope: RecommendResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                status = %status,
                response = %response_text,
                "Failed to deserialize recommendation response"
            );
            AppError::MalformedResponse(e)
        })?;

        Ok(envelope)
    }
}

#[async_trait]
impl RecommendEndpoint for HttpRecommendEndpoint {
    async fn recommend(&self, request: ProfileRequest) -> FetchResult {
        let submission_id = Uuid::new_v4();
        tracing::info!(
            submission_id = %submission_id,
            skills = request.skills.len(),
            top_k = request.top_k,
            "Submitting profile"
        );

        match self.try_recommend(&request).await {
            Ok(envelope) => {
                tracing::info!(
                    submission_id = %submission_id,
                    status = %envelope.status,
                    results = envelope.recommendations.len(),
                    "Recommendation exchange completed"
                );
                FetchResult::Success(envelope)
            }
            Err(e) => {
                tracing::warn!(
                    submission_id = %submission_id,
                    error = %e,
                    "Recommendation exchange failed"
                );
                FetchResult::TransportFailure(e.to_string())
            }
        }
    }
}
