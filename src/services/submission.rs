use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use serde::Serialize;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::RecommendationRequest,
    render::{Renderer, ERROR_HTML, LOADING_HTML},
    services::recommender::Recommender,
};

/// Lifecycle of the results area for one submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Errored,
}

/// What a single `submit` call ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Rendered { product_count: usize },
    Errored,
    /// A newer submission started before this one finished; the view was left alone
    Superseded,
}

/// The UI surface a submission writes into
#[async_trait::async_trait]
pub trait ResultsView: Send + Sync {
    /// Make the results area visible and show the loading indicator
    async fn show_loading(&self, html: &str);

    /// Replace the area's content with rendered result blocks
    async fn show_results(&self, html: String);

    /// Replace the area's content with the generic error block
    async fn show_error(&self, html: &str);
}

/// Snapshot of a results area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsArea {
    pub state: SubmissionState,
    pub visible: bool,
    pub html: String,
}

/// In-memory results area, read back after a submission completes
#[derive(Debug, Clone, Default)]
pub struct BufferedView {
    area: Arc<RwLock<ResultsArea>>,
}

impl BufferedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> ResultsArea {
        self.area.read().await.clone()
    }

    async fn set(&self, state: SubmissionState, html: String) {
        let mut area = self.area.write().await;
        area.state = state;
        area.visible = true;
        area.html = html;
    }
}

#[async_trait::async_trait]
impl ResultsView for BufferedView {
    async fn show_loading(&self, html: &str) {
        self.set(SubmissionState::Loading, html.to_string()).await;
    }

    async fn show_results(&self, html: String) {
        self.set(SubmissionState::Rendered, html).await;
    }

    async fn show_error(&self, html: &str) {
        self.set(SubmissionState::Errored, html.to_string()).await;
    }
}

/// Drives one form submission from loading to a rendered or errored results area.
///
/// Every call to [`submit`](Self::submit) takes a fresh token. When a call finishes
/// after a newer one has started, its result is dropped so the view always reflects
/// the most recent submission. The token only matters when one handler is shared
/// across submissions; the web adapter builds a fresh handler per request.
pub struct SubmissionHandler<V> {
    recommender: Arc<dyn Recommender>,
    renderer: Arc<Renderer>,
    view: V,
    latest_token: AtomicU64,
}

impl<V: ResultsView> SubmissionHandler<V> {
    pub fn new(recommender: Arc<dyn Recommender>, renderer: Arc<Renderer>, view: V) -> Self {
        Self {
            recommender,
            renderer,
            view,
            latest_token: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn submit(&self, request: &RecommendationRequest) -> SubmissionOutcome {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;

        self.view.show_loading(LOADING_HTML).await;

        let result = self.fetch_and_render(request).await;

        if self.latest_token.load(Ordering::SeqCst) != token {
            tracing::debug!(token, "Dropping response for superseded submission");
            return SubmissionOutcome::Superseded;
        }

        match result {
            Ok((html, product_count)) => {
                self.view.show_results(html).await;
                tracing::info!(token, product_count, "Rendered recommendations");
                SubmissionOutcome::Rendered { product_count }
            }
            Err(e) => {
                tracing::error!(
                    token,
                    backend = self.recommender.name(),
                    error = %e,
                    "Recommendation submission failed"
                );
                self.view.show_error(ERROR_HTML).await;
                SubmissionOutcome::Errored
            }
        }
    }

    async fn fetch_and_render(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<(String, usize)> {
        let response = self.recommender.recommend(request).await?;

        if !response.is_aligned() {
            tracing::warn!(
                product_count = response.recommended_products.len(),
                score_count = response.confidence_scores.len(),
                "Confidence scores do not line up with products"
            );
        }

        let html = self.renderer.render_results(&response)?;
        Ok((html, response.recommended_products.len()))
    }
}
