pub mod ai;
pub mod config;
pub mod dashboard;
pub mod images;
pub mod strategy;

pub use ai::pipeline::{ContentPipeline, Post};
pub use ai::GeminiClient;
pub use config::AppConfig;
pub use strategy::Strategy;
