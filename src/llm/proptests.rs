//! Property-based tests for the Gemini translation layer
//!
//! - User text survives request translation unchanged
//! - Thought parts never leak into response text
//! - Empty text parts are dropped

use super::gemini::{GeminiCandidate, GeminiContent, GeminiPart, GeminiResponse, GeminiService};
use super::types::LlmRequest;
use proptest::prelude::*;

fn arb_part() -> impl Strategy<Value = (String, bool)> {
    ("[a-zA-Z0-9 .,]{0,40}", any::<bool>())
}

fn response_from(parts: &[(String, bool)]) -> GeminiResponse {
    GeminiResponse {
        candidates: vec![GeminiCandidate {
            content: Some(GeminiContent {
                role: Some("model".to_string()),
                parts: parts
                    .iter()
                    .map(|(text, thought)| GeminiPart {
                        text: Some(text.clone()),
                        thought: thought.then_some(true),
                    })
                    .collect(),
            }),
            finish_reason: Some("STOP".to_string()),
        }],
        usage_metadata: None,
        prompt_feedback: None,
    }
}

proptest! {
    #[test]
    fn user_text_preserved(input in "[a-zA-Z0-9 ,]{1,80}", system in "[a-zA-Z ]{1,80}") {
        let request = LlmRequest::single_turn(system.clone(), input.clone());
        let wire = GeminiService::translate_request(&request);

        prop_assert_eq!(wire.contents.len(), 1);
        prop_assert_eq!(wire.contents[0].role.as_deref(), Some("user"));
        prop_assert_eq!(wire.contents[0].parts[0].text.as_deref(), Some(input.as_str()));
        let sys = wire.system_instruction.expect("system instruction present");
        prop_assert_eq!(sys.parts[0].text.as_deref(), Some(system.as_str()));
    }

    #[test]
    fn thoughts_never_in_text(parts in proptest::collection::vec(arb_part(), 0..6)) {
        let expected: String = parts
            .iter()
            .filter(|(_, thought)| !thought)
            .map(|(text, _)| text.as_str())
            .collect();

        let normalized = GeminiService::normalize_response(response_from(&parts));
        prop_assert_eq!(normalized.text(), expected);
    }

    #[test]
    fn budget_round_trips(budget in 0u32..100_000) {
        let request = LlmRequest::single_turn("s", "u").with_thinking_budget(budget);
        let wire = serde_json::to_value(GeminiService::translate_request(&request)).unwrap();
        prop_assert_eq!(
            wire["generationConfig"]["thinkingConfig"]["thinkingBudget"].as_u64(),
            Some(u64::from(budget))
        );
    }
}
