use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Html,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::RecommendationRequest,
    services::{BufferedView, SubmissionHandler},
};

use super::{form::parse_submission, AppState};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Form page with an empty, hidden results area
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = state
        .renderer
        .render_page(&RecommendationRequest::default(), None)?;
    Ok(Html(page))
}

/// Handles a form submission and returns the page with its results area filled in.
///
/// Recommendation failures are part of the page (the generic error block), so the
/// status is 200 either way.
pub async fn submit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Html<String>> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let is_form = content_type
            .to_str()
            .map(|ct| ct.starts_with(FORM_CONTENT_TYPE))
            .unwrap_or(false);
        if !is_form {
            return Err(AppError::InvalidInput(format!(
                "Expected {} body",
                FORM_CONTENT_TYPE
            )));
        }
    }

    let request = parse_submission(&body);

    tracing::info!(
        request_id = %request_id,
        job_role = %request.job_role,
        needs_count = request.assessment_needs.len(),
        experience_level = %request.experience_level,
        "Processing recommendation submission"
    );

    let handler = SubmissionHandler::new(
        state.recommender.clone(),
        state.renderer.clone(),
        BufferedView::new(),
    );
    let outcome = handler.submit(&request).await;
    let area = handler.view().snapshot().await;

    tracing::info!(
        request_id = %request_id,
        outcome = ?outcome,
        "Submission completed"
    );

    let page = state.renderer.render_page(&request, Some(&area.html))?;
    Ok(Html(page))
}
