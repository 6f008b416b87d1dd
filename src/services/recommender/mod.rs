//! Recommendation service abstraction
//!
//! The submission flow only needs "request in, ranked products out". Keeping that
//! behind a trait lets the web layer run against the real HTTP service while tests
//! substitute a mock or a scripted fake.

use crate::{
    error::AppResult,
    models::{RecommendationRequest, RecommendationResponse},
};

pub mod http;

pub use http::HttpRecommender;

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Recommender: Send + Sync {
    /// Fetch ranked recommendations for one request
    ///
    /// Any failure (transport, non-success status, undecodable body) is returned as
    /// an error; callers do not get partial results.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationResponse>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
