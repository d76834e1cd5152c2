//! LLM Service - AI-assisted story authoring
//!
//! In assisted mode the remote text-generation service writes the strategy,
//! the script's hook and acts, and the publishing metadata. This service:
//!
//! - Builds the JSON-shaped prompts for each of those stages
//! - Parses the replies, tolerating markdown code fences
//! - Fills the fields the model is not asked for from the niche tables and
//!   the script templates, so scene invariants keep holding

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::ports::outbound::{ChatMessage, LlmPort, LlmRequest};
use crate::application::services::llm::prompt_builder;
use crate::domain::entities::{Script, Strategy, VideoMetadata, MAX_TAGS};
use crate::domain::services::{metadata_optimizer, script_writer, strategy_analyzer};
use crate::domain::value_objects::Niche;

const ANALYSIS_TEMPERATURE: f32 = 0.7;
const CREATIVE_TEMPERATURE: f32 = 0.8;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StrategyDraft {
    hook_strategy: String,
    retention_points: Vec<u32>,
    emotion_pacing: Vec<String>,
    ad_placements: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct ScriptDraft {
    hook: String,
    act1: String,
    act2: String,
    act3: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataDraft {
    title: String,
    description: String,
    tags: Vec<String>,
    thumbnail_prompt: String,
}

/// Service for generating stage output with a remote model
pub struct LLMService<L: LlmPort> {
    llm: Arc<L>,
}

impl<L: LlmPort> LLMService<L> {
    /// Create a new LLM service with the provided client
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    /// Strategy with model-authored hook, retention, pacing, and ads
    #[instrument(skip(self))]
    pub async fn draft_strategy(
        &self,
        niche: Niche,
        duration: u32,
    ) -> Result<Strategy, LLMServiceError> {
        let prompt = prompt_builder::build_strategy_prompt(niche, duration);
        let draft: StrategyDraft = self.request_json(prompt, ANALYSIS_TEMPERATURE).await?;

        // Audience and viral factors are not requested from the model
        let tables = strategy_analyzer::analyze_strategy(niche, duration);

        Ok(Strategy {
            hook_strategy: draft.hook_strategy,
            retention_points: draft.retention_points,
            emotion_pacing: draft.emotion_pacing,
            ad_placements: draft.ad_placements,
            target_audience: tables.target_audience,
            viral_factors: tables.viral_factors,
        })
    }

    /// Script with model-authored hook and acts; counts stay duration-derived
    #[instrument(skip(self, strategy))]
    pub async fn draft_script(
        &self,
        story_idea: &str,
        strategy: &Strategy,
        duration: u32,
    ) -> Result<Script, LLMServiceError> {
        let prompt = prompt_builder::build_script_prompt(story_idea, strategy, duration);
        let draft: ScriptDraft = self.request_json(prompt, CREATIVE_TEMPERATURE).await?;

        Ok(Script {
            hook: draft.hook,
            act1: draft.act1,
            act2: draft.act2,
            act3: draft.act3,
            total_scenes: script_writer::total_scenes(duration),
            dialogue_lines: script_writer::dialogue_lines(duration),
            cliffhangers: script_writer::cliffhangers(duration),
        })
    }

    /// Metadata with model-authored copy; limits are enforced on the reply
    #[instrument(skip(self, script))]
    pub async fn draft_metadata(
        &self,
        story_idea: &str,
        script: &Script,
        niche: Niche,
    ) -> Result<VideoMetadata, LLMServiceError> {
        let prompt = prompt_builder::build_metadata_prompt(story_idea, script, niche);
        let draft: MetadataDraft = self.request_json(prompt, CREATIVE_TEMPERATURE).await?;

        Ok(VideoMetadata {
            title: metadata_optimizer::truncate_title(draft.title.trim()),
            description: draft.description,
            tags: draft.tags.into_iter().take(MAX_TAGS).collect(),
            thumbnail_prompt: draft.thumbnail_prompt,
            category: niche.category().to_string(),
            target_keywords: metadata_optimizer::target_keywords(story_idea, niche),
        })
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        prompt: String,
        temperature: f32,
    ) -> Result<T, LLMServiceError> {
        let request = LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_system_prompt(prompt_builder::build_system_prompt())
            .with_temperature(temperature);

        let response = self
            .llm
            .generate(request)
            .await
            .map_err(|e| LLMServiceError::LlmError(e.to_string()))?;

        debug!(chars = response.content.len(), "Received authoring reply");

        parse_json_reply(&response.content)
    }
}

/// Parse a JSON reply, accepting a surrounding markdown code fence
pub fn parse_json_reply<T: DeserializeOwned>(content: &str) -> Result<T, LLMServiceError> {
    let json_text = strip_code_fence(content);
    if json_text.is_empty() {
        return Err(LLMServiceError::ParseError(
            "Empty reply from text-generation service".to_string(),
        ));
    }

    serde_json::from_str(json_text).map_err(|e| {
        LLMServiceError::ParseError(format!("Reply is not the expected JSON shape: {}", e))
    })
}

fn strip_code_fence(content: &str) -> &str {
    content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Errors that can occur in the LLM service
#[derive(Debug, thiserror::Error)]
pub enum LLMServiceError {
    /// Error from the underlying LLM client
    #[error("LLM error: {0}")]
    LlmError(String),
    /// Error parsing the LLM response
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::LlmResponse;
    use std::sync::Mutex;

    /// Replays canned replies in order and records the prompts it saw
    struct MockLlm {
        replies: Mutex<Vec<Result<String, String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockLlm {
        fn new(replies: Vec<Result<&str, &str>>) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .rev()
                        .map(|r| r.map(str::to_string).map_err(str::to_string))
                        .collect(),
                ),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl LlmPort for MockLlm {
        type Error = String;

        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
            self.prompts
                .lock()
                .unwrap()
                .push(request.messages[0].content.clone());
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err("no reply queued".to_string()))?;
            Ok(LlmResponse {
                content: reply,
                finish_reason: Some("stop".to_string()),
            })
        }

        async fn health_check(&self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_json_reply_strips_fences() {
        #[derive(Deserialize)]
        struct Hook {
            hook: String,
        }

        let fenced = "```json\n{\"hook\": \"Boom!\"}\n```";
        let parsed: Hook = parse_json_reply(fenced).unwrap();
        assert_eq!(parsed.hook, "Boom!");

        let bare: Hook = parse_json_reply("  {\"hook\": \"Bare\"}  ").unwrap();
        assert_eq!(bare.hook, "Bare");
    }

    #[test]
    fn test_parse_json_reply_rejects_malformed_and_empty() {
        let malformed = parse_json_reply::<serde_json::Value>("{hook: nope");
        assert!(matches!(malformed, Err(LLMServiceError::ParseError(_))));

        let empty = parse_json_reply::<serde_json::Value>("```\n```");
        assert!(matches!(empty, Err(LLMServiceError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_draft_strategy_fills_audience_from_niche() {
        let llm = Arc::new(MockLlm::new(vec![Ok(r#"{
            "hookStrategy": "Open on a pratfall",
            "retentionPoints": [60, 180],
            "emotionPacing": ["laugh", "gasp"],
            "adPlacements": [0]
        }"#)]));
        let service = LLMService::new(llm.clone());

        let strategy = service.draft_strategy(Niche::Comedy, 5).await.unwrap();

        assert_eq!(strategy.hook_strategy, "Open on a pratfall");
        assert_eq!(strategy.retention_points, vec![60, 180]);
        assert_eq!(strategy.target_audience, "General audience 10-40");
        assert_eq!(strategy.viral_factors.len(), 6);
        assert!(llm.prompts.lock().unwrap()[0].contains("5-minute comedy video"));
    }

    #[tokio::test]
    async fn test_draft_script_keeps_duration_derived_counts() {
        let llm = Arc::new(MockLlm::new(vec![Ok(
            r#"{"hook": "Look!", "act1": "one", "act2": "two", "act3": "three"}"#,
        )]));
        let service = LLMService::new(llm);
        let strategy = strategy_analyzer::analyze_strategy(Niche::Adventure, 15);

        let script = service.draft_script("Quest", &strategy, 15).await.unwrap();

        assert_eq!(script.hook, "Look!");
        assert_eq!(script.total_scenes, 60);
        assert_eq!(script.dialogue_lines.len(), 120);
        assert_eq!(script.cliffhangers.len(), 5);
    }

    #[tokio::test]
    async fn test_draft_metadata_enforces_limits() {
        let tags: Vec<String> = (0..20).map(|i| format!("\"tag{}\"", i)).collect();
        let reply = format!(
            r#"{{"title": "{}", "description": "desc", "tags": [{}], "thumbnailPrompt": "thumb"}}"#,
            "T".repeat(80),
            tags.join(",")
        );
        let llm = Arc::new(MockLlm::new(vec![Ok(reply.as_str())]));
        let service = LLMService::new(llm);
        let script = Script {
            hook: "hook".to_string(),
            act1: String::new(),
            act2: String::new(),
            act3: String::new(),
            total_scenes: 4,
            dialogue_lines: Vec::new(),
            cliffhangers: Vec::new(),
        };

        let metadata = service
            .draft_metadata("Robot detective solves mysteries", &script, Niche::Mystery)
            .await
            .unwrap();

        assert_eq!(metadata.title.chars().count(), 60);
        assert_eq!(metadata.tags.len(), 15);
        assert_eq!(metadata.category, "Entertainment");
        assert_eq!(metadata.target_keywords[0], "robot");
    }

    #[tokio::test]
    async fn test_transport_failure_is_llm_error() {
        let llm = Arc::new(MockLlm::new(vec![Err("connection refused")]));
        let service = LLMService::new(llm);

        let err = service.draft_strategy(Niche::Comedy, 5).await.unwrap_err();
        match err {
            LLMServiceError::LlmError(message) => assert!(message.contains("connection refused")),
            other => panic!("Expected LlmError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let llm = Arc::new(MockLlm::new(vec![Ok(r#"{"hookStrategy": 42}"#)]));
        let service = LLMService::new(llm);

        let err = service.draft_strategy(Niche::Comedy, 5).await.unwrap_err();
        assert!(matches!(err, LLMServiceError::ParseError(_)));
    }
}
