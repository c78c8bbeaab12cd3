//! AI advisory: the "Ask the Architect" and "City Archives" side feature
//!
//! Failures never reach the UI as errors. Every path ends in displayable text:
//! - No key configured: fixed placeholder, no network call
//! - Backend error: fixed placeholder, logged as a warning
//! - Success: the generated text

pub mod client;
pub mod config;
pub mod panel;
pub mod prompts;

pub use client::{GeminiClient, TextBackend, TextRequest};
pub use config::AdvisoryConfig;
pub use panel::{AdvisoryPanel, AnalysisKind, AnalysisResult, PanelStatus};

use crate::layout::{RingConfig, WalkwayConfig};

pub const LORE_MISSING_KEY: &str = "API Key required for lore generation.";
pub const LORE_UNAVAILABLE: &str = "Lore generation unavailable.";
pub const EMPTY_ANALYSIS: &str = "No analysis generated.";

/// Advisory front end; `backend` is `None` when no key is configured
pub struct Advisory<B = GeminiClient> {
    backend: Option<B>,
}

impl Advisory<GeminiClient> {
    pub fn from_config(config: &AdvisoryConfig) -> Self {
        Self {
            backend: GeminiClient::from_config(config),
        }
    }
}

impl<B: TextBackend> Advisory<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn disabled() -> Self {
        Self { backend: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Short archive entry about life in the city
    pub async fn generate_lore(&self, rings: &[RingConfig], walkways: &[WalkwayConfig]) -> String {
        let Some(backend) = &self.backend else {
            return LORE_MISSING_KEY.to_string();
        };

        let request = TextRequest::new(prompts::lore_prompt(rings, walkways));
        match backend.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Lore generation failed: {}", e);
                LORE_UNAVAILABLE.to_string()
            }
        }
    }

    /// Answer a free-form question about the current configuration
    pub async fn ask(
        &self,
        rings: &[RingConfig],
        walkways: &[WalkwayConfig],
        query: &str,
    ) -> AnalysisResult {
        let Some(backend) = &self.backend else {
            return AnalysisResult::new(
                "API Key Missing",
                "Please configure your Gemini API Key to access the AI Architect.",
                AnalysisKind::Structural,
            );
        };

        let request =
            TextRequest::new(prompts::architect_prompt(rings, walkways, query)).without_thinking();
        match backend.generate(&request).await {
            Ok(text) => {
                let content = if text.trim().is_empty() {
                    EMPTY_ANALYSIS.to_string()
                } else {
                    text
                };
                AnalysisResult::new("Architect's Note", content, AnalysisKind::Structural)
            }
            Err(e) => {
                log::warn!("Architect query failed: {}", e);
                AnalysisResult::new(
                    "Connection Error",
                    "Failed to reach the architectural database. Please try again.",
                    AnalysisKind::Logistical,
                )
            }
        }
    }
}

/// Wrap archive text for display in the advisory panel
pub fn lore_result(text: impl Into<String>) -> AnalysisResult {
    AnalysisResult::new("City Archives", text, AnalysisKind::Philosophical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, RotundaError};
    use crate::layout::{Layout, LayoutParams, generate_layout};
    use std::cell::RefCell;

    /// Canned backend that records the prompts it receives
    struct Canned {
        reply: Option<String>,
        seen: RefCell<Vec<TextRequest>>,
    }

    impl Canned {
        fn ok(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextBackend for Canned {
        async fn generate(&self, request: &TextRequest) -> Result<String> {
            self.seen.borrow_mut().push(request.clone());
            self.reply
                .clone()
                .ok_or_else(|| RotundaError::Advisory("backend down".into()))
        }
    }

    fn layout() -> Layout {
        generate_layout(&LayoutParams::default())
    }

    #[tokio::test]
    async fn test_missing_key_placeholders() {
        let advisory = Advisory::from_config(&AdvisoryConfig::default());
        assert!(!advisory.is_enabled());
        let city = layout();

        let lore = advisory.generate_lore(&city.rings, &city.walkways).await;
        assert_eq!(lore, "API Key required for lore generation.");

        let result = advisory.ask(&city.rings, &city.walkways, "Why?").await;
        assert_eq!(result.title, "API Key Missing");
        assert_eq!(result.kind, AnalysisKind::Structural);
        assert_eq!(
            result.content,
            "Please configure your Gemini API Key to access the AI Architect."
        );
    }

    #[tokio::test]
    async fn test_backend_failure_placeholders() {
        let advisory = Advisory::with_backend(Canned::failing());
        let city = layout();

        let lore = advisory.generate_lore(&city.rings, &city.walkways).await;
        assert_eq!(lore, "Lore generation unavailable.");

        let result = advisory.ask(&city.rings, &city.walkways, "Why?").await;
        assert_eq!(result.title, "Connection Error");
        assert_eq!(result.kind, AnalysisKind::Logistical);
        assert_eq!(
            result.content,
            "Failed to reach the architectural database. Please try again."
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let client = GeminiClient::new(
            "test-key".into(),
            "http://127.0.0.1:9".into(),
            "test-model".into(),
        );
        let advisory = Advisory::with_backend(client);
        let city = layout();

        let result = advisory.ask(&city.rings, &city.walkways, "Hello").await;
        assert_eq!(result.title, "Connection Error");
        let lore = advisory.generate_lore(&city.rings, &city.walkways).await;
        assert_eq!(lore, LORE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_successful_answer() {
        let advisory = Advisory::with_backend(Canned::ok("Mind the gap."));
        let city = layout();

        let result = advisory.ask(&city.rings, &city.walkways, "How do I cross?").await;
        assert_eq!(result.title, "Architect's Note");
        assert_eq!(result.content, "Mind the gap.");

        let backend = advisory.backend.as_ref().unwrap();
        let seen = backend.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].prompt.contains("How do I cross?"));
        assert_eq!(seen[0].thinking_budget, Some(0));
    }

    #[tokio::test]
    async fn test_empty_answer() {
        let advisory = Advisory::with_backend(Canned::ok("   "));
        let city = layout();
        let result = advisory.ask(&city.rings, &city.walkways, "?").await;
        assert_eq!(result.content, "No analysis generated.");

        // Lore passes empty text through unchanged
        assert_eq!(advisory.generate_lore(&city.rings, &city.walkways).await, "   ");
    }

    #[test]
    fn test_lore_result() {
        let result = lore_result("Once upon a ring");
        assert_eq!(result.title, "City Archives");
        assert_eq!(result.kind, AnalysisKind::Philosophical);
    }
}
