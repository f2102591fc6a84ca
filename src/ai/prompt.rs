use crate::profile::{Choice, Profile};

pub struct PromptBuilder;

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the recommendation request for one profile.
    ///
    /// User text is embedded as typed, without escaping.
    pub fn build_recommendation_prompt(&self, profile: &Profile) -> String {
        format!(
            r#"You are a smart assistant helping students in India find suitable government schemes and scholarships.
Based on the following user details, recommend the most relevant and personalized central or state government schemes with a short explanation each:

- Age: {age}
- Gender: {gender}
- Education: {education}
- Annual Income: {income}
- Caste Category: {caste}
- State: {state}
- Disability: {disability}
- Skill Interests: {skills}

Provide 3-5 best scheme recommendations with:
1. Scheme name (bold this)
2. Brief description (1-2 sentences)
3. Eligibility criteria
4. Official website link if available

Format the output clearly with bullet points and proper spacing.
"#,
            age = profile.age,
            gender = profile.gender.label(),
            education = profile.education.label(),
            income = profile.income,
            caste = profile.caste.label(),
            state = profile.state,
            disability = profile.disability.label(),
            skills = profile.skills,
        )
    }
}
