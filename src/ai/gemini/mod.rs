mod client;
mod types;

pub use client::GeminiClient;
pub use types::GeminiError;
pub use types::{
    Candidate, Content, GenerateRequest, GenerateResponse, GenerationConfig, Part, UsageMetadata,
};
