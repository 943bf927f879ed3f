use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ghstats::live::page::ALL_SLOTS;
use ghstats::{
    Config, GitHubClient, LiveCache, LiveData, LiveRenderer, MemoryPage, PipelineConfig,
    SnapshotPipeline, SnapshotWriter,
};

#[derive(Parser, Debug)]
#[command(name = "ghstats")]
#[command(version = "0.1.0")]
#[command(about = "Fetch GitHub profile stats for a static personal site")]
struct Args {
    /// GitHub username (defaults to GITHUB_USERNAME)
    #[arg(short, long, global = true)]
    username: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, aggregate and overwrite the JSON snapshot
    Snapshot {
        /// Snapshot path (defaults to STATS_OUTPUT or _data/github-stats.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the live stat slots once and print them as HTML
    Render {
        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the counter animation
        #[arg(long)]
        no_animation: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ghstats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env(args.username.clone())?;

    let result = match args.command {
        Command::Snapshot { output } => run_snapshot(config, output).await,
        Command::Render {
            output,
            no_animation,
        } => run_render(config, output, no_animation).await,
    };

    if let Err(ref e) = result {
        tracing::error!("Error updating GitHub stats: {:#}", e);
    }
    result
}

async fn run_snapshot(config: Config, output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match output {
        Some(path) => config.with_output_path(path),
        None => config,
    };

    tracing::info!("Username: {}", config.github_username);
    tracing::info!("Token available: {}", config.github_token.is_some());

    let github = Arc::new(GitHubClient::with_base_url(
        &config.api_base_url,
        config.github_token.as_deref(),
    )?);
    let writer = SnapshotWriter::new(&config.output_path);
    let pipeline = SnapshotPipeline::new(github.clone(), PipelineConfig::from(&config));

    let snapshot = pipeline.run(&writer).await?;

    tracing::info!(
        "{} repos, {} stars, {} followers",
        snapshot.user.public_repos,
        snapshot.repos.total_stars,
        snapshot.user.followers
    );
    if let Some(remaining) = github.rate_limiter().remaining() {
        tracing::info!("GitHub rate limit remaining: {}", remaining);
    }

    Ok(())
}

async fn run_render(
    config: Config,
    output: Option<PathBuf>,
    no_animation: bool,
) -> anyhow::Result<()> {
    let github = Arc::new(GitHubClient::with_base_url(
        &config.api_base_url,
        config.github_token.as_deref(),
    )?);
    let data = LiveData::new(
        github,
        config.github_username.clone(),
        LiveCache::new(config.cache_ttl),
    );

    let page = Arc::new(MemoryPage::with_slots(ALL_SLOTS));
    let mut renderer = LiveRenderer::new(data, page.clone()).with_featured_count(config.featured_count);
    if no_animation {
        renderer = renderer.with_animation(std::time::Duration::ZERO);
    }

    renderer.init().await;
    let html = page.to_html();

    match output {
        Some(path) => {
            std::fs::write(&path, &html)
                .map_err(|e| ghstats::Error::filesystem(&path, e))?;
            tracing::info!("Output written to: {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
