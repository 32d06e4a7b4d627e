use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postpilot::ai::ContentPipeline;
use postpilot::config::AppConfig;
use postpilot::dashboard::{DashboardRenderer, DEFAULT_OUTPUT_PATH, DEFAULT_TEMPLATE_DIR};
use postpilot::images::PlaceholderImages;
use postpilot::strategy::{Strategy, DEFAULT_STRATEGY_PATH};
use postpilot::GeminiClient;

/// AI co-pilot for planning a month of social media content.
#[derive(Parser, Debug)]
#[command(name = "postpilot", version)]
struct Cli {
    /// Path to the marketing strategy file
    #[arg(long, default_value = DEFAULT_STRATEGY_PATH)]
    strategy: PathBuf,

    /// Where to write the review dashboard
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Directory containing the dashboard template
    #[arg(long, default_value = DEFAULT_TEMPLATE_DIR)]
    templates: PathBuf,

    /// Number of post ideas to request
    #[arg(long, short = 'n', default_value_t = 10)]
    posts: usize,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("postpilot=info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing::info!("Loading marketing strategy from {}", cli.strategy.display());
    let strategy = Strategy::load(&cli.strategy)?;

    let gemini = GeminiClient::from_config(&config);
    let pipeline = ContentPipeline::new(gemini, PlaceholderImages).with_idea_count(cli.posts);

    let posts = pipeline.run(&strategy).await;
    if posts.is_empty() {
        tracing::warn!("No ideas were generated; skipping dashboard");
        return Ok(());
    }

    DashboardRenderer::new()
        .with_template_dir(&cli.templates)
        .write(&posts, &cli.output)?;

    Ok(())
}
