//! The content-generation pipeline.
//!
//! One strictly sequential pass: ask the text service for post ideas,
//! then for each idea generate a caption and an image reference, and
//! collect the assembled posts in idea order. Caption and image failures
//! degrade the affected post; only an empty idea list stops the run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ai::{prompts, TextGenerator};
use crate::images::ImageGenerator;
use crate::strategy::Strategy;

/// Default number of ideas requested when the caller does not override it.
pub const DEFAULT_IDEA_COUNT: usize = 30;

/// Caption used when the caption call fails; the run continues with it.
pub const CAPTION_ERROR_SENTINEL: &str = "Error: Could not generate caption.";

/// Fixed pause between posts, a crude rate-limit accommodation.
const DEFAULT_POST_DELAY: Duration = Duration::from_secs(1);

/// One assembled unit of output, immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub idea: String,
    pub caption: String,
    pub image_path: String,
}

/// Parse a numbered-list response into discrete idea strings.
///
/// For each line containing `". "`, everything after the first occurrence
/// is the idea text, trimmed. Lines without the delimiter are dropped, so
/// the result may be shorter than the requested count.
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            line.split_once(". ")
                .map(|(_, idea)| idea.trim().to_string())
        })
        .collect()
}

/// Orchestrates the idea → caption → image sequence against the
/// injected text and image capabilities.
pub struct ContentPipeline<G, I> {
    text: G,
    images: I,
    idea_count: usize,
    post_delay: Duration,
}

impl<G: TextGenerator, I: ImageGenerator> ContentPipeline<G, I> {
    pub fn new(text: G, images: I) -> Self {
        Self {
            text,
            images,
            idea_count: DEFAULT_IDEA_COUNT,
            post_delay: DEFAULT_POST_DELAY,
        }
    }

    /// Set how many ideas to request.
    pub fn with_idea_count(mut self, count: usize) -> Self {
        self.idea_count = count;
        self
    }

    /// Set the pause between posts.
    pub fn with_post_delay(mut self, delay: Duration) -> Self {
        self.post_delay = delay;
        self
    }

    /// Generate post ideas from the strategy.
    ///
    /// One call to the text service; on failure the error is logged and
    /// an empty list is returned, which the caller treats as "nothing to
    /// do".
    pub async fn generate_post_ideas(&self, strategy: &Strategy) -> Vec<String> {
        tracing::info!("Generating {} post ideas", self.idea_count);

        let prompt = prompts::post_ideas_prompt(strategy, self.idea_count);
        match self.text.generate_text(&prompt).await {
            Ok(response) => {
                let ideas = parse_numbered_list(&response);
                tracing::info!("Got {} ideas", ideas.len());
                ideas
            }
            Err(e) => {
                tracing::error!("Error generating ideas: {}", e);
                Vec::new()
            }
        }
    }

    /// Generate a caption for a single idea.
    ///
    /// Captions are best-effort: a failure is logged and replaced with
    /// [`CAPTION_ERROR_SENTINEL`] so one bad call never aborts the batch.
    pub async fn generate_caption(&self, strategy: &Strategy, idea: &str) -> String {
        tracing::info!("Writing caption for: '{}'", truncate(idea, 30));

        let prompt = prompts::caption_prompt(strategy, idea);
        match self.text.generate_text(&prompt).await {
            Ok(response) => response.trim().to_string(),
            Err(e) => {
                tracing::error!("Error generating caption: {}", e);
                CAPTION_ERROR_SENTINEL.to_string()
            }
        }
    }

    /// Run the full pipeline: ideas, then one post per idea, in order.
    ///
    /// Returns an empty collection when no ideas were generated; the
    /// caller must skip rendering in that case.
    pub async fn run(&self, strategy: &Strategy) -> Vec<Post> {
        let ideas = self.generate_post_ideas(strategy).await;
        if ideas.is_empty() {
            return Vec::new();
        }

        let total = ideas.len();
        let mut posts = Vec::with_capacity(total);

        for (i, idea) in ideas.into_iter().enumerate() {
            let post_number = i + 1;
            let caption = self.generate_caption(strategy, &idea).await;

            let image_prompt = prompts::image_prompt(&idea, &strategy.visual_style);
            let image_path = self.images.generate_image(&image_prompt, post_number).await;

            posts.push(Post {
                idea,
                caption,
                image_path,
            });

            if post_number < total {
                tokio::time::sleep(self.post_delay).await;
            }
        }

        posts
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
