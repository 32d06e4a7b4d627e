//! Image reference generation.
//!
//! The pipeline only needs a resolvable URL per post, so the backend is a
//! swappable capability. The shipped implementation is a placeholder; a
//! real image service slots in by implementing [`ImageGenerator`] without
//! touching the pipeline.

use async_trait::async_trait;

/// URL returned when image generation fails.
pub const IMAGE_ERROR_URL: &str = "https://placehold.co/600x400/FF0000/FFFFFF?text=Image+Error";

/// Capability seam over the image-generation service.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Produce a resolvable image URL for one post.
    ///
    /// `post_number` is 1-based. Implementations handle their own
    /// failures and fall back to [`IMAGE_ERROR_URL`]; the pipeline never
    /// aborts over an image.
    async fn generate_image(&self, prompt: &str, post_number: usize) -> String;
}

/// Placeholder backend returning deterministic templated URLs.
///
/// A real implementation would call an image-generation API with the
/// prompt and persist the result; this one ignores the prompt entirely.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderImages;

#[async_trait]
impl ImageGenerator for PlaceholderImages {
    async fn generate_image(&self, _prompt: &str, post_number: usize) -> String {
        tracing::info!("Generating image for post {}", post_number);
        format!("https://placehold.co/600x400/1E90FF/FFFFFF?text=Image+for+Post+{post_number}")
    }
}
