//! HTML review dashboard.
//!
//! Renders the completed posts collection into a single static page a
//! human can review in a browser. Rendering is a pure function of the
//! posts and the two clock-derived strings; only [`DashboardRenderer::write`]
//! touches the wall clock and the filesystem.

use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::ai::pipeline::Post;

/// Conventional output filename.
pub const DEFAULT_OUTPUT_PATH: &str = "dashboard.html";

/// Directory holding the dashboard template.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

const TEMPLATE_FILE: &str = "dashboard.html";

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("failed to read dashboard template '{path}': {source}")]
    Template {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write dashboard '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Renders posts through the file-based dashboard template.
pub struct DashboardRenderer {
    template_dir: PathBuf,
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRenderer {
    pub fn new() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
        }
    }

    /// Set the directory containing `dashboard.html`.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    fn load_template(&self) -> Result<String, DashboardError> {
        let path = self.template_dir.join(TEMPLATE_FILE);
        std::fs::read_to_string(&path).map_err(|source| DashboardError::Template {
            path: path.display().to_string(),
            source,
        })
    }

    /// Render the dashboard and write it to `output_path`, overwriting
    /// any existing file. A missing template or unwritable output path
    /// is fatal to the run.
    pub fn write(&self, posts: &[Post], output_path: impl AsRef<Path>) -> Result<(), DashboardError> {
        tracing::info!("Generating review dashboard");

        let template = self.load_template()?;

        let now = Local::now();
        let month = now.format("%B %Y").to_string();
        let generation_date = now.format("%Y-%m-%d %H:%M:%S").to_string();

        let html = render(&template, posts, &month, &generation_date);

        let output_path = output_path.as_ref();
        std::fs::write(output_path, html).map_err(|source| DashboardError::Write {
            path: output_path.display().to_string(),
            source,
        })?;

        tracing::info!("Dashboard created: {}", output_path.display());
        Ok(())
    }
}

/// Substitute the `{{month}}`, `{{generation_date}}` and `{{posts}}`
/// tokens in the template. Pure: identical inputs render identical HTML.
pub fn render(template: &str, posts: &[Post], month: &str, generation_date: &str) -> String {
    let cards: String = posts
        .iter()
        .enumerate()
        .map(|(i, post)| render_post(i + 1, post))
        .collect();

    template
        .replace("{{month}}", &html_escape(month))
        .replace("{{generation_date}}", &html_escape(generation_date))
        .replace("{{posts}}", &cards)
}

fn render_post(post_number: usize, post: &Post) -> String {
    format!(
        r#"        <article class="post">
            <img src="{image}" alt="Image for post {n}">
            <div class="post-body">
                <span class="post-number">Post {n}</span>
                <h2>{idea}</h2>
                <p>{caption}</p>
            </div>
        </article>
"#,
        n = post_number,
        image = html_escape(&post.image_path),
        idea = html_escape(&post.idea),
        caption = multiline(&html_escape(&post.caption)),
    )
}

fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn multiline(text: &str) -> String {
    text.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<Post> {
        vec![
            Post {
                idea: "Quick tip on grading.".into(),
                caption: "Save hours every week. #EduApp".into(),
                image_path: "https://placehold.co/600x400?text=Image+for+Post+1".into(),
            },
            Post {
                idea: "A teacher's success story.".into(),
                caption: "Line one.\nLine two.".into(),
                image_path: "https://placehold.co/600x400?text=Image+for+Post+2".into(),
            },
        ]
    }

    const TEMPLATE: &str = "<html><h1>{{month}}</h1>\n{{posts}}\n<footer>{{generation_date}}</footer></html>";

    #[test]
    fn test_render_is_pure() {
        let posts = sample_posts();
        let first = render(TEMPLATE, &posts, "August 2026", "2026-08-27 12:00:00");
        let second = render(TEMPLATE, &posts, "August 2026", "2026-08-27 12:00:00");
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_substitutes_all_tokens() {
        let html = render(TEMPLATE, &sample_posts(), "August 2026", "2026-08-27 12:00:00");
        assert!(html.contains("<h1>August 2026</h1>"));
        assert!(html.contains("2026-08-27 12:00:00"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_preserves_post_order() {
        let html = render(TEMPLATE, &sample_posts(), "August 2026", "now");
        let first = html.find("Quick tip on grading.").unwrap();
        let second = html.find("success story").unwrap();
        assert!(first < second);
        assert!(html.contains("Post 1"));
        assert!(html.contains("Post 2"));
    }

    #[test]
    fn test_render_escapes_html_in_content() {
        let posts = vec![Post {
            idea: "Use <b> tags & \"quotes\"".into(),
            caption: "a < b".into(),
            image_path: "https://example.com/img".into(),
        }];
        let html = render(TEMPLATE, &posts, "August 2026", "now");
        assert!(html.contains("Use &lt;b&gt; tags &amp; &quot;quotes&quot;"));
        assert!(html.contains("a &lt; b"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_converts_caption_newlines() {
        let html = render(TEMPLATE, &sample_posts(), "August 2026", "now");
        assert!(html.contains("Line one.<br>Line two."));
    }

    #[test]
    fn test_render_empty_posts_leaves_no_cards() {
        let html = render(TEMPLATE, &[], "August 2026", "now");
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_write_renders_template_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dashboard.html"), TEMPLATE).unwrap();

        let output = dir.path().join("out.html");
        let renderer = DashboardRenderer::new().with_template_dir(dir.path());
        renderer.write(&sample_posts(), &output).unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("Quick tip on grading."));
        assert!(html.contains("Save hours every week. #EduApp"));
        assert!(html.contains("Image+for+Post+1"));
    }

    #[test]
    fn test_write_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dashboard.html"), TEMPLATE).unwrap();

        let output = dir.path().join("out.html");
        std::fs::write(&output, "stale content").unwrap();

        let renderer = DashboardRenderer::new().with_template_dir(dir.path());
        renderer.write(&sample_posts(), &output).unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(!html.contains("stale content"));
    }

    #[test]
    fn test_write_missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = DashboardRenderer::new().with_template_dir(dir.path().join("nope"));
        let err = renderer
            .write(&sample_posts(), dir.path().join("out.html"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::Template { .. }));
    }

    #[test]
    fn test_write_unwritable_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dashboard.html"), TEMPLATE).unwrap();

        let renderer = DashboardRenderer::new().with_template_dir(dir.path());
        let err = renderer
            .write(&sample_posts(), dir.path().join("missing/dir/out.html"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::Write { .. }));
    }
}
