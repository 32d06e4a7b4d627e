mod templates;

pub use templates::{caption_prompt, image_prompt, post_ideas_prompt};
