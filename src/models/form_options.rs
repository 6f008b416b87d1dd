use serde::Serialize;

/// One `<option>` of a form select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FormOption {
    FormOption { value, label }
}

pub const JOB_ROLES: &[FormOption] = &[
    opt("software_engineer", "Software Engineer"),
    opt("data_analyst", "Data Analyst"),
    opt("sales_representative", "Sales Representative"),
    opt("customer_service", "Customer Service"),
    opt("project_manager", "Project Manager"),
    opt("administrative_assistant", "Administrative Assistant"),
];

pub const ASSESSMENT_NEEDS: &[FormOption] = &[
    opt("cognitive_ability", "Cognitive Ability"),
    opt("personality", "Personality"),
    opt("technical_skills", "Technical Skills"),
    opt("situational_judgement", "Situational Judgement"),
    opt("behavioral", "Behavioral"),
    opt("language", "Language"),
];

pub const EXPERIENCE_LEVELS: &[FormOption] = &[
    opt("entry", "Entry Level"),
    opt("mid", "Mid Level"),
    opt("senior", "Senior"),
    opt("executive", "Executive"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_option_values_are_unique() {
        for options in [JOB_ROLES, ASSESSMENT_NEEDS, EXPERIENCE_LEVELS] {
            let values: HashSet<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(values.len(), options.len());
        }
    }
}
