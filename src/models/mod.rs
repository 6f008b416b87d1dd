use serde::{Deserialize, Serialize};

pub mod form_options;

pub use form_options::{FormOption, ASSESSMENT_NEEDS, EXPERIENCE_LEVELS, JOB_ROLES};

/// Payload sent to the recommendation service
///
/// Values are forwarded exactly as the form produced them; nothing here checks
/// them against the option sets the form offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub job_role: String,
    pub assessment_needs: Vec<String>,
    pub experience_level: String,
}

/// Body returned by the recommendation service on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Products in server-assigned rank order
    pub recommended_products: Vec<Product>,
    /// Overall match per product, positionally aligned with `recommended_products`
    pub confidence_scores: Vec<f64>,
}

/// A recommended assessment product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub assessment_type: String,
    /// Free-form display text, e.g. "30 minutes"
    pub duration: String,
    pub match_details: MatchDetails,
}

/// Sub-scores explaining how a confidence score was composed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub semantic_similarity: f64,
    pub role_match: f64,
    pub category_match: f64,
}

/// A product paired with the score at the same index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationEntry<'a> {
    pub rank: usize,
    pub product: &'a Product,
    /// `None` when the service sent fewer scores than products
    pub confidence: Option<f64>,
}

impl RecommendationResponse {
    /// Pairs every product with `confidence_scores[i]`.
    ///
    /// One entry is produced per product. Surplus scores are ignored and missing
    /// ones come back as `None`; neither case is treated as an error.
    pub fn entries(&self) -> Vec<RecommendationEntry<'_>> {
        self.recommended_products
            .iter()
            .enumerate()
            .map(|(rank, product)| RecommendationEntry {
                rank,
                product,
                confidence: self.confidence_scores.get(rank).copied(),
            })
            .collect()
    }

    /// Whether the product and score sequences have the same length
    pub fn is_aligned(&self) -> bool {
        self.recommended_products.len() == self.confidence_scores.len()
    }
}

/// Formats a fraction as a percentage with one decimal place (`0.873` -> `87.3%`).
///
/// Exact halfway values round away from zero (`0.1225` -> `12.3%`); `{:.1}` alone
/// would round them to even.
pub fn format_percent(fraction: f64) -> String {
    let scaled = fraction * 100.0;

    // A binary float sits exactly halfway between two tenths only when its
    // fractional part is .25 or .75, i.e. when `scaled * 4` is an odd integer.
    let quarters = scaled * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (scaled * 10.0).abs().ceil().copysign(scaled);
        return format!("{:.1}%", tenths / 10.0);
    }

    format!("{:.1}%", scaled)
}
