//! HTML rendering for the form page and the results area.
//!
//! Templates are compiled into the binary and auto-escaped, so product text coming
//! back from the recommendation service can never inject markup.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::{
    error::AppResult,
    models::{
        format_percent, FormOption, RecommendationRequest, RecommendationResponse,
        ASSESSMENT_NEEDS, EXPERIENCE_LEVELS, JOB_ROLES,
    },
};

const PAGE_TEMPLATE: &str = "page.html";
const RESULTS_TEMPLATE: &str = "results.html";

/// Markup shown in the results area while a request is in flight
pub const LOADING_HTML: &str = concat!(
    r#"<div class="loading"><div class="spinner-border loading-spinner" role="status">"#,
    r#"<span class="visually-hidden">Loading...</span></div></div>"#,
);

/// The single generic message shown for every kind of failure
pub const ERROR_HTML: &str = concat!(
    r#"<div class="alert alert-danger" role="alert">"#,
    "Error getting recommendations. Please try again.",
    "</div>",
);

/// Template context for one result block
#[derive(Debug, Serialize)]
struct ResultBlock<'a> {
    name: &'a str,
    description: &'a str,
    assessment_type: &'a str,
    duration: &'a str,
    semantic_similarity: String,
    role_match: String,
    category_match: String,
    /// Empty badge when the service sent no score for this position
    confidence: Option<String>,
}

#[derive(Debug, Serialize)]
struct SelectOption<'a> {
    value: &'a str,
    label: &'a str,
    selected: bool,
}

fn select_options<'a>(options: &'a [FormOption], chosen: &[&str]) -> Vec<SelectOption<'a>> {
    options
        .iter()
        .map(|option| SelectOption {
            value: option.value,
            label: option.label,
            selected: chosen.contains(&option.value),
        })
        .collect()
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("../../templates/page.html"))?;
        env.add_template(RESULTS_TEMPLATE, include_str!("../../templates/results.html"))?;
        Ok(Self { env })
    }

    /// Renders one block per product, paired with the score at the same index
    pub fn render_results(&self, response: &RecommendationResponse) -> AppResult<String> {
        let blocks: Vec<ResultBlock<'_>> = response
            .entries()
            .into_iter()
            .map(|entry| {
                let details = &entry.product.match_details;
                ResultBlock {
                    name: &entry.product.name,
                    description: &entry.product.description,
                    assessment_type: &entry.product.assessment_type,
                    duration: &entry.product.duration,
                    semantic_similarity: format_percent(details.semantic_similarity),
                    role_match: format_percent(details.role_match),
                    category_match: format_percent(details.category_match),
                    confidence: entry.confidence.map(format_percent),
                }
            })
            .collect();

        let template = self.env.get_template(RESULTS_TEMPLATE)?;
        Ok(template.render(context! { blocks => blocks })?)
    }

    /// Renders the full page.
    ///
    /// `selection` preselects the submitted values; `results_html` is inserted
    /// verbatim into the results list, and the results area stays hidden when it
    /// is `None`.
    pub fn render_page(
        &self,
        selection: &RecommendationRequest,
        results_html: Option<&str>,
    ) -> AppResult<String> {
        let needs: Vec<&str> = selection
            .assessment_needs
            .iter()
            .map(String::as_str)
            .collect();
        let job_role = [selection.job_role.as_str()];
        let experience_level = [selection.experience_level.as_str()];

        let template = self.env.get_template(PAGE_TEMPLATE)?;
        let page = template.render(context! {
            job_roles => select_options(JOB_ROLES, &job_role),
            assessment_needs => select_options(ASSESSMENT_NEEDS, &needs),
            experience_levels => select_options(EXPERIENCE_LEVELS, &experience_level),
            results_visible => results_html.is_some(),
            results_html => results_html.unwrap_or_default(),
        })?;

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchDetails, Product};

    fn product(name: &str, description: &str) -> Product {
        Product {
            name: name.to_string(),
            description: description.to_string(),
            assessment_type: "Personality & Behavior".to_string(),
            duration: "25 minutes".to_string(),
            match_details: MatchDetails {
                semantic_similarity: 0.873,
                role_match: 0.5,
                category_match: 1.0,
            },
        }
    }

    fn block_count(html: &str) -> usize {
        html.matches(r#"class="list-group-item""#).count()
    }

    #[test]
    fn test_renders_one_block_per_product() {
        let renderer = Renderer::new().unwrap();
        let response = RecommendationResponse {
            recommended_products: vec![
                product("OPQ32r", "Occupational personality"),
                product("Verify G+", "General ability"),
            ],
            confidence_scores: vec![0.91, 0.42],
        };

        let html = renderer.render_results(&response).unwrap();

        assert_eq!(block_count(&html), 2);
        assert!(html.contains("OPQ32r"));
        assert!(html.contains("Type: Personality &amp; Behavior"));
        assert!(html.contains("Duration: 25 minutes"));
        assert!(html.contains("Semantic Similarity: 87.3%"));
        assert!(html.contains("Role Match: 50.0%"));
        assert!(html.contains("Category Match: 100.0%"));
        assert!(html.contains("91.0% Match"));
        assert!(html.contains("42.0% Match"));
    }

    #[test]
    fn test_blocks_keep_server_order() {
        let renderer = Renderer::new().unwrap();
        let response = RecommendationResponse {
            recommended_products: vec![product("first", "a"), product("second", "b")],
            confidence_scores: vec![0.2, 0.9],
        };

        let html = renderer.render_results(&response).unwrap();
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert!(html.find("20.0% Match").unwrap() < html.find("90.0% Match").unwrap());
    }

    #[test]
    fn test_missing_score_renders_empty_badge() {
        let renderer = Renderer::new().unwrap();
        let response = RecommendationResponse {
            recommended_products: vec![product("a", "a"), product("b", "b")],
            confidence_scores: vec![0.75],
        };

        let html = renderer.render_results(&response).unwrap();

        assert_eq!(block_count(&html), 2);
        assert_eq!(html.matches("% Match").count(), 1);
        assert!(html.contains(r#"confidence-score"></span>"#));
    }

    #[test]
    fn test_empty_response_renders_nothing() {
        let renderer = Renderer::new().unwrap();
        let response = RecommendationResponse {
            recommended_products: vec![],
            confidence_scores: vec![],
        };

        let html = renderer.render_results(&response).unwrap();
        assert_eq!(block_count(&html), 0);
    }

    #[test]
    fn test_product_text_is_escaped() {
        let renderer = Renderer::new().unwrap();
        let response = RecommendationResponse {
            recommended_products: vec![product("<script>alert(1)</script>", "a < b")],
            confidence_scores: vec![0.5],
        };

        let html = renderer.render_results(&response).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_page_hides_results_until_submission() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_page(&RecommendationRequest::default(), None)
            .unwrap();

        let ids = [
            "recommendationForm",
            "jobRole",
            "assessmentNeeds",
            "experienceLevel",
            "recommendationsList",
            "results",
        ];
        for id in ids {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing #{}", id);
        }
        assert!(html.contains("display: none;"));
        assert!(!html.contains(" selected"));
    }

    #[test]
    fn test_page_preselects_submission_and_shows_results() {
        let renderer = Renderer::new().unwrap();
        let selection = RecommendationRequest {
            job_role: "data_analyst".to_string(),
            assessment_needs: vec!["personality".to_string(), "language".to_string()],
            experience_level: "senior".to_string(),
        };

        let html = renderer.render_page(&selection, Some(ERROR_HTML)).unwrap();

        assert!(html.contains(r#"<option value="data_analyst" selected>"#));
        assert!(html.contains(r#"<option value="personality" selected>"#));
        assert!(html.contains(r#"<option value="language" selected>"#));
        assert!(html.contains(r#"<option value="senior" selected>"#));
        assert!(!html.contains(r#"<option value="technical_skills" selected>"#));
        assert!(html.contains("display: block;"));
        assert!(html.contains(ERROR_HTML));
    }
}
