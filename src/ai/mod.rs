pub mod gemini;
pub mod pipeline;
pub mod prompts;

pub use gemini::{GeminiClient, GeminiError};
pub use pipeline::{ContentPipeline, Post};

use async_trait::async_trait;

/// Capability seam over the text-generation service.
///
/// The pipeline depends on this trait rather than on [`GeminiClient`]
/// directly, so tests can substitute deterministic fakes without any
/// network access.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One blocking request: prompt in, generated text out.
    async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError>;
}
