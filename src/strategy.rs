//! Marketing strategy input.
//!
//! The strategy file is the single structured input to the whole run: it
//! describes the app, its audience, and the themes every generated post
//! should revolve around. It is loaded once and read-only afterward.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conventional strategy filename in the working directory.
pub const DEFAULT_STRATEGY_PATH: &str = "strategy.json";

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("failed to read strategy file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse strategy file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Marketing strategy driving all generated content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub app_name: String,
    pub target_audience: String,
    pub content_pillars: Vec<String>,
    pub brand_voice: String,
    pub visual_style: String,
}

impl Strategy {
    /// Load a strategy from a JSON file.
    ///
    /// A missing or malformed file is fatal to the run; the error
    /// propagates to the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StrategyError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StrategyError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StrategyError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Content pillars joined for embedding into a prompt.
    pub fn pillars_joined(&self) -> String {
        self.content_pillars.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_strategy() {
        let file = write_temp(
            r#"{
                "appName": "EduApp",
                "targetAudience": "K-12 teachers",
                "contentPillars": ["tips", "stories"],
                "brandVoice": "friendly",
                "visualStyle": "flat illustration"
            }"#,
        );

        let strategy = Strategy::load(file.path()).unwrap();
        assert_eq!(strategy.app_name, "EduApp");
        assert_eq!(strategy.target_audience, "K-12 teachers");
        assert_eq!(strategy.content_pillars, vec!["tips", "stories"]);
        assert_eq!(strategy.brand_voice, "friendly");
        assert_eq!(strategy.visual_style, "flat illustration");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = Strategy::load("/nonexistent/strategy.json").unwrap_err();
        match err {
            StrategyError::Read { path, .. } => assert!(path.contains("strategy.json")),
            other => panic!("expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let file = write_temp("{ not json");
        let err = Strategy::load(file.path()).unwrap_err();
        assert!(matches!(err, StrategyError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_field_is_parse_error() {
        let file = write_temp(r#"{"appName": "EduApp"}"#);
        let err = Strategy::load(file.path()).unwrap_err();
        assert!(matches!(err, StrategyError::Parse { .. }));
    }

    #[test]
    fn test_pillars_joined() {
        let strategy = Strategy {
            app_name: "EduApp".into(),
            target_audience: "teachers".into(),
            content_pillars: vec!["tips".into(), "stories".into(), "news".into()],
            brand_voice: "friendly".into(),
            visual_style: "flat".into(),
        };
        assert_eq!(strategy.pillars_joined(), "tips, stories, news");
    }
}
