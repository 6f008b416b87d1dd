use url::form_urlencoded;

use crate::models::RecommendationRequest;

/// Decodes an `application/x-www-form-urlencoded` submission.
///
/// The multi-select arrives as repeated `assessment_needs` keys and keeps its order.
/// Missing fields stay empty; unknown keys are ignored.
pub fn parse_submission(body: &[u8]) -> RecommendationRequest {
    let mut request = RecommendationRequest::default();

    for (key, value) in form_urlencoded::parse(body) {
        match key.as_ref() {
            "job_role" => request.job_role = value.into_owned(),
            "assessment_needs" => request.assessment_needs.push(value.into_owned()),
            "experience_level" => request.experience_level = value.into_owned(),
            _ => {}
        }
    }

    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_fields() {
        let body = concat!(
            "job_role=software_engineer",
            "&assessment_needs=technical_skills",
            "&assessment_needs=personality",
            "&experience_level=senior",
        );
        let request = parse_submission(body.as_bytes());

        assert_eq!(request.job_role, "software_engineer");
        assert_eq!(request.assessment_needs, vec!["technical_skills", "personality"]);
        assert_eq!(request.experience_level, "senior");
    }

    #[test]
    fn test_values_are_percent_decoded() {
        let request = parse_submission(b"job_role=Sales+Lead&experience_level=mid%2Flevel");
        assert_eq!(request.job_role, "Sales Lead");
        assert_eq!(request.experience_level, "mid/level");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let request = parse_submission(b"job_role=data_analyst&csrf=ignored");
        assert_eq!(request.job_role, "data_analyst");
        assert!(request.assessment_needs.is_empty());
        assert_eq!(request.experience_level, "");
    }
}
