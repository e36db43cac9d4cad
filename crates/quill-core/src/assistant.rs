//! AI writing assistant.
//!
//! The assistant owns the prompt and a request state machine:
//!
//! ```text
//! Idle ──begin──▶ InProgress ──settle(Ok)──▶ Complete
//!   ▲                  │
//!   │                  └──settle(Err)──▶ Failed
//!   └──────── begin (from Complete / Failed) ◀─┘
//! ```
//!
//! State changes only when the real request settles. Progress while waiting
//! is shown with [`ActivityIndicator`], which reports elapsed time rather
//! than a completion percentage.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{ApiError, DomainError};
use crate::ports::BlogApi;

pub const SUGGESTED_PROMPTS: [&str; 5] = [
    "Write a blog post about the benefits of artificial intelligence in everyday life",
    "Create a guide for beginners learning web development",
    "Discuss the future of renewable energy and sustainable technology",
    "Write about healthy lifestyle habits and their impact on productivity",
    "Explain machine learning concepts in simple terms for beginners",
];

const EMPTY_PROMPT: &str = "Please enter a prompt or select a suggestion";
const ALREADY_GENERATING: &str = "Content generation is already in progress";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AssistantState {
    #[default]
    Idle,
    InProgress {
        prompt: String,
    },
    Complete {
        content: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Assistant {
    prompt: String,
    state: AssistantState,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn state(&self) -> &AssistantState {
        &self.state
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.state, AssistantState::InProgress { .. })
    }

    /// Start a request with `custom` or, if absent, the current prompt.
    ///
    /// Returns the prompt to send. An empty prompt moves to `Failed` without
    /// a request.
    pub fn begin(&mut self, custom: Option<&str>) -> Result<String, DomainError> {
        if self.is_generating() {
            return Err(DomainError::Busy(ALREADY_GENERATING));
        }

        let prompt = custom
            .filter(|p| !p.is_empty())
            .unwrap_or(self.prompt.as_str())
            .to_string();
        if prompt.trim().is_empty() {
            self.state = AssistantState::Failed {
                message: EMPTY_PROMPT.to_string(),
            };
            return Err(DomainError::Validation(EMPTY_PROMPT.to_string()));
        }

        self.prompt = prompt.clone();
        self.state = AssistantState::InProgress {
            prompt: prompt.clone(),
        };
        Ok(prompt)
    }

    /// Record the outcome of the request started by [`Assistant::begin`].
    pub fn settle(&mut self, result: Result<String, ApiError>) -> Result<String, DomainError> {
        let outcome = match result {
            Ok(content) if content.trim().is_empty() => Err(DomainError::EmptyGeneration),
            Ok(content) => Ok(content),
            Err(err) => Err(DomainError::Api(err)),
        };

        match &outcome {
            Ok(content) => {
                tracing::info!(chars = content.len(), "AI content generated");
                self.prompt.clear();
                self.state = AssistantState::Complete {
                    content: content.clone(),
                };
            }
            Err(err) => {
                tracing::error!(error = %err, "AI generation failed");
                self.state = AssistantState::Failed {
                    message: err.to_string(),
                };
            }
        }
        outcome
    }

    /// Run a full generation round trip against `api`.
    pub async fn generate(
        &mut self,
        api: &dyn BlogApi,
        custom: Option<&str>,
    ) -> Result<String, DomainError> {
        let prompt = self.begin(custom)?;
        let result = api.generate_content(&prompt).await;
        self.settle(result)
    }

    /// Load suggestion `number` (1-based) from [`SUGGESTED_PROMPTS`] as the prompt.
    pub fn select_suggestion(&mut self, number: usize) -> Result<&'static str, DomainError> {
        let suggestion = number
            .checked_sub(1)
            .and_then(|index| SUGGESTED_PROMPTS.get(index))
            .copied()
            .ok_or_else(|| DomainError::Validation(format!("No suggestion #{number}")))?;
        self.set_prompt(suggestion);
        Ok(suggestion)
    }

    /// Generate from suggestion `number` (1-based).
    pub async fn generate_suggestion(
        &mut self,
        api: &dyn BlogApi,
        number: usize,
    ) -> Result<String, DomainError> {
        let suggestion = self.select_suggestion(number)?;
        self.generate(api, Some(suggestion)).await
    }
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Indeterminate progress shown while a request is pending.
#[derive(Debug, Clone)]
pub struct ActivityIndicator {
    frame: usize,
    started: Instant,
}

impl ActivityIndicator {
    pub fn start() -> Self {
        Self {
            frame: 0,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Advance one frame and return the line to display.
    pub fn tick(&mut self) -> String {
        let spinner = SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()];
        self.frame = self.frame.wrapping_add(1);
        format!(
            "{spinner} Generating content... {}s (usually 10-30s)",
            self.elapsed().as_secs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubApi;

    #[tokio::test]
    async fn test_generate_success_clears_prompt() {
        let api = StubApi::default();
        let mut assistant = Assistant::new();
        assistant.set_prompt("Write about Rust");

        let content = assistant.generate(&api, None).await.unwrap();
        assert!(content.contains("Generated"));
        assert_eq!(assistant.prompt(), "");
        assert!(matches!(assistant.state(), AssistantState::Complete { .. }));
    }

    #[tokio::test]
    async fn test_empty_prompt_makes_no_call() {
        let api = StubApi::default();
        let mut assistant = Assistant::new();
        assistant.set_prompt("   ");

        let err = assistant.generate(&api, None).await.unwrap_err();
        assert_eq!(err.to_string(), EMPTY_PROMPT);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_keeps_prompt() {
        let api = StubApi {
            generated: Some(Err(ApiError::ServiceUnavailable(
                "AI service not available.".to_string(),
            ))),
            ..Default::default()
        };
        let mut assistant = Assistant::new();

        let err = assistant.generate(&api, Some("Topic")).await.unwrap_err();
        assert_eq!(err.to_string(), "AI service not available.");
        assert_eq!(assistant.prompt(), "Topic");
        assert_eq!(
            assistant.state(),
            &AssistantState::Failed {
                message: "AI service not available.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_content_is_failure() {
        let api = StubApi {
            generated: Some(Ok("  ".to_string())),
            ..Default::default()
        };
        let mut assistant = Assistant::new();

        let err = assistant.generate(&api, Some("Topic")).await.unwrap_err();
        assert_eq!(err, DomainError::EmptyGeneration);
    }

    #[test]
    fn test_begin_refuses_while_in_progress() {
        let mut assistant = Assistant::new();
        assistant.begin(Some("first")).unwrap();
        assert!(assistant.is_generating());
        assert!(matches!(
            assistant.begin(Some("second")),
            Err(DomainError::Busy(_))
        ));
    }

    #[tokio::test]
    async fn test_suggestion_out_of_range() {
        let api = StubApi::default();
        let mut assistant = Assistant::new();
        assert!(assistant.generate_suggestion(&api, 9).await.is_err());
        assert!(assistant.generate_suggestion(&api, 0).await.is_err());
        assert!(assistant.generate_suggestion(&api, 1).await.is_ok());
    }

    #[test]
    fn test_select_suggestion_is_one_based() {
        let mut assistant = Assistant::new();
        assert_eq!(assistant.select_suggestion(1).unwrap(), SUGGESTED_PROMPTS[0]);
        assert_eq!(assistant.prompt(), SUGGESTED_PROMPTS[0]);
        assert_eq!(
            assistant.select_suggestion(5).unwrap(),
            SUGGESTED_PROMPTS[4]
        );

        let err = assistant.select_suggestion(0).unwrap_err();
        assert_eq!(err.to_string(), "No suggestion #0");
        assert!(assistant.select_suggestion(6).is_err());
        assert_eq!(assistant.prompt(), SUGGESTED_PROMPTS[4]);
    }

    #[test]
    fn test_indicator_cycles_frames() {
        let mut indicator = ActivityIndicator::start();
        let first = indicator.tick();
        let second = indicator.tick();
        assert_ne!(first, second);
        assert!(first.contains("Generating content..."));
    }
}
