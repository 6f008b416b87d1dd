//! HTTP recommendation backend
//!
//! Posts the request as JSON to `{base_url}/recommend`. Only success vs. non-success
//! is distinguished; error bodies are never read.

use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{RecommendationRequest, RecommendationResponse},
    services::recommender::Recommender,
};

#[derive(Clone, Debug)]
pub struct HttpRecommender {
    http_client: HttpClient,
    endpoint: String,
}

impl HttpRecommender {
    /// Creates a client for the service at `base_url`.
    ///
    /// With `timeout` unset, requests wait on the transport's own defaults.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            endpoint: format!("{}/recommend", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Recommender for HttpRecommender {
    #[instrument(
        skip(self, request),
        fields(endpoint = %self.endpoint, job_role = %request.job_role)
    )]
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationResponse> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Recommendation service rejected request");
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: RecommendationResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            product_count = parsed.recommended_products.len(),
            score_count = parsed.confidence_scores.len(),
            "Received recommendations"
        );

        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
