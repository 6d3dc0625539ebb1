//! Prompt Templates
//!
//! All generative-text prompts in one place so wording changes never touch
//! callers. The feature prompt carries an example bullet list to steer the
//! model toward output the line parser accepts.

use crate::constants::pipeline::DEFAULT_PROJECT_TYPE;

/// Prompt asking for a detected stack plus alternative suggestions, replied
/// as a brace-delimited object with `detectedStack` and `suggestions` keys.
pub fn stack_detection(idea: &str, project_type: Option<&str>) -> String {
    let project_type = project_type.unwrap_or(DEFAULT_PROJECT_TYPE);
    format!(
        r#"Analyze this project idea: "{idea}"
1. Identify if any tech stack is already mentioned.
2. Suggest the best 3 suitable {project_type} tech stack combinations for the project idea.
3. Return response in this format:
{{
    "detectedStack": "Tech Stack Name",
    "suggestions": [
        "Tech Stack Combination 1",
        "Tech Stack Combination 2",
        "Tech Stack Combination 3"
    ]
}}"#
    )
}

/// Prompt asking for the idea's key features as short bullet-list titles.
pub fn feature_breakdown(idea: &str, tech_stack: &str, project_type: Option<&str>) -> String {
    let project_type = project_type.unwrap_or(DEFAULT_PROJECT_TYPE);
    format!(
        r#"Project Idea: "{idea}"
Tech Stack: "{tech_stack}"
Project Type: "{project_type}"
Break down this project idea into key features. Provide a list of 3-6 words per feature (short titles only). Avoid including long descriptions or implementation details.

Example Output:
* User Authentication
* Resume Template Selection
* AI Content Generation
* Skill Extraction
* Export Options

Provide the output in a clean and concise bullet-point format."#
    )
}

/// Prompt asking for a short illustrative code sample for one feature.
pub fn code_snippet(feature: &str, tech_stack: &str) -> String {
    format!(
        r#"Project Feature: "{feature}"
Tech Stack: "{tech_stack}"
Please generate a basic code snippet (1-2 functions) that demonstrates the implementation of this feature.
Keep it simple and relevant to the tech stack."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_detection_defaults_project_type() {
        let prompt = stack_detection("Build a blog platform", None);
        assert!(prompt.contains("Fullstack tech stack combinations"));
        assert!(prompt.contains("detectedStack"));
    }

    #[test]
    fn test_stack_detection_uses_given_project_type() {
        let prompt = stack_detection("Build a blog platform", Some("Frontend"));
        assert!(prompt.contains("Frontend tech stack combinations"));
    }

    #[test]
    fn test_feature_breakdown_carries_example_bullets() {
        let prompt = feature_breakdown("Build a blog platform", "MERN Stack", None);
        assert!(prompt.contains("* User Authentication"));
        assert!(prompt.contains("MERN Stack"));
    }

    #[test]
    fn test_code_snippet_names_feature_and_stack() {
        let prompt = code_snippet("Post Editor", "MERN Stack");
        assert!(prompt.contains("Post Editor"));
        assert!(prompt.contains("MERN Stack"));
    }
}
