use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    render::Renderer,
    services::{HttpRecommender, Recommender},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<dyn Recommender>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    /// Builds state backed by the HTTP recommendation service from `config`
    pub fn new(config: &Config) -> AppResult<Self> {
        let recommender =
            HttpRecommender::new(&config.recommend_api_url, config.request_timeout())?;
        Self::with_recommender(Arc::new(recommender))
    }

    pub fn with_recommender(recommender: Arc<dyn Recommender>) -> AppResult<Self> {
        Ok(Self {
            recommender,
            renderer: Arc::new(Renderer::new()?),
        })
    }
}
