//! Idea Generation — orchestrates one request end to end.
//!
//! Flow: build prompts + schema → one generator call → parse JSON →
//!       shape check → sanitize/clamp each idea → deduplicate → return.
//!
//! The generator is called exactly once. Nothing is retried.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::ideas::dedup::dedupe_ideas;
use crate::ideas::locale::locale_hint;
use crate::ideas::models::{IdeaSet, UserProfile};
use crate::ideas::normalize::normalize_idea;
use crate::ideas::prompts::{IDEAS_PROMPT_TEMPLATE, IDEAS_SYSTEM, QUALITY_RUBRIC};
use crate::ideas::schema::{ideas_schema, CANONICAL_HEADINGS, IDEA_COUNT, SCHEMA_NAME};
use crate::llm_client::{strip_json_fences, ChatMessage, GenerationRequest, TextGenerator};

/// Runs the full pipeline for one validated profile.
pub async fn generate_ideas(
    generator: &dyn TextGenerator,
    profile: &UserProfile,
) -> Result<IdeaSet, AppError> {
    let request = build_generation_request(profile)?;

    debug!("Requesting ideas for location '{}'", profile.location);
    let raw = generator.generate(&request).await?;

    let raw_ideas = parse_model_output(&raw)?;
    let ideas = post_process(&raw_ideas);

    info!("Returning {} ideas", ideas.ideas.len());
    Ok(ideas)
}

/// Builds the three messages (system, rubric, prompt) and the strict schema.
pub fn build_generation_request(profile: &UserProfile) -> Result<GenerationRequest, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;

    let headings = CANONICAL_HEADINGS
        .iter()
        .enumerate()
        .map(|(i, h)| format!("  {}. {}", i + 1, h))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = IDEAS_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{locale_hint}", &locale_hint(&profile.location))
        .replace("{headings}", &headings);

    Ok(GenerationRequest {
        messages: vec![
            ChatMessage::system(IDEAS_SYSTEM),
            ChatMessage::system(QUALITY_RUBRIC),
            ChatMessage::user(prompt),
        ],
        schema_name: SCHEMA_NAME,
        schema: ideas_schema(),
    })
}

/// Parses raw generator text and checks the top-level shape:
/// an `ideas` array of exactly `IDEA_COUNT` objects.
pub fn parse_model_output(raw: &str) -> Result<Vec<Value>, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw)).map_err(|e| {
        warn!("Generator output is not JSON: {e}");
        AppError::invalid_json(raw)
    })?;

    let ideas = value
        .get("ideas")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::ModelBadShape("Missing 'ideas' array".to_string()))?;

    if ideas.len() != IDEA_COUNT {
        return Err(AppError::ModelBadShape(format!(
            "Expected {IDEA_COUNT} ideas, got {}",
            ideas.len()
        )));
    }
    if !ideas.iter().all(Value::is_object) {
        return Err(AppError::ModelBadShape(
            "Every idea must be a JSON object".to_string(),
        ));
    }

    Ok(ideas.clone())
}

/// Sanitize + clamp every idea, then rename near-duplicates.
pub fn post_process(raw_ideas: &[Value]) -> IdeaSet {
    let mut ideas: Vec<_> = raw_ideas.iter().map(normalize_idea).collect();

    let renamed = dedupe_ideas(&mut ideas);
    if renamed > 0 {
        info!("Renamed {renamed} near-duplicate idea title(s)");
    }

    IdeaSet { ideas }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideas::fixtures::{model_output, three_distinct_ideas};
    use crate::llm_client::mock::MockGenerator;
    use crate::llm_client::Role;
    use serde_json::json;

    fn profile(location: &str) -> UserProfile {
        UserProfile {
            age: json!(29),
            location: location.to_string(),
            strengths: "organized".to_string(),
            enjoys: "cycling".to_string(),
            skillset: "mechanics".to_string(),
            hours_per_week: json!(6),
            seed_budget: json!(200),
        }
    }

    #[test]
    fn test_request_has_system_rubric_and_prompt() {
        let request = build_generation_request(&profile("Austin, TX")).unwrap();
        let roles: Vec<Role> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::System, Role::User]);
        assert_eq!(request.messages[0].content, IDEAS_SYSTEM);
        assert_eq!(request.messages[1].content, QUALITY_RUBRIC);
        assert_eq!(request.schema_name, SCHEMA_NAME);
        assert_eq!(request.schema, ideas_schema());
    }

    #[test]
    fn test_prompt_embeds_profile_headings_and_locale() {
        let request = build_generation_request(&profile("Vienna, Austria")).unwrap();
        let prompt = &request.messages[2].content;
        assert!(prompt.contains("\"hoursPerWeek\": 6"));
        assert!(prompt.contains("\"location\": \"Vienna, Austria\""));
        assert!(prompt.contains("  2. The product/service"));
        assert!(prompt.contains("  10. Why it's worth it"));
        assert!(prompt.contains("euros"));
        assert!(!prompt.contains("{locale_hint}"));
    }

    #[test]
    fn test_parse_rejects_non_json_with_bounded_snippet() {
        let raw = format!("not json {}", "z".repeat(1_000));
        match parse_model_output(&raw) {
            Err(AppError::ModelInvalidJson(snippet)) => {
                assert!(snippet.chars().count() <= 500);
                assert!(raw.starts_with(&snippet));
            }
            other => panic!("expected invalid JSON error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for raw in [
            r#"{"items": []}"#.to_string(),
            r#"{"ideas": "three"}"#.to_string(),
            model_output(three_distinct_ideas()[..2].to_vec()),
            r#"{"ideas": [1, 2, 3]}"#.to_string(),
        ] {
            assert!(
                matches!(parse_model_output(&raw), Err(AppError::ModelBadShape(_))),
                "should reject {raw}"
            );
        }
    }

    #[test]
    fn test_parse_accepts_fenced_json() {
        let raw = format!("```json\n{}\n```", model_output(three_distinct_ideas()));
        assert_eq!(parse_model_output(&raw).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_generate_ideas_calls_generator_once() {
        let mock = MockGenerator::returning(model_output(three_distinct_ideas()));
        let ideas = generate_ideas(&mock, &profile("NY")).await.unwrap();

        assert_eq!(mock.calls(), 1);
        assert_eq!(ideas.ideas.len(), 3);
        let request = mock.last_request().unwrap();
        assert!(request.messages[2].content.contains("USD"));
    }

    #[tokio::test]
    async fn test_generate_ideas_propagates_upstream_failure() {
        let mock = MockGenerator::failing(429, "Rate limit reached");
        let result = generate_ideas(&mock, &profile("NY")).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
        assert_eq!(mock.calls(), 1);
    }
}
