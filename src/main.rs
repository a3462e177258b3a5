use anyhow::Context;
use clap::Parser;
use podcast_stats::{
    render, weekday_distribution, weekday_label, Episode, FeedProcessor, FetchConfig, FetchFeed,
    HttpFetcher,
};
use tracing::info;

/// Pull podcast RSS feeds and print a weekday-of-publication heatmap plus
/// an episode table with the time between consecutive episodes.
#[derive(Debug, Parser)]
#[command(name = "podcast-stats", version, about)]
struct Cli {
    /// Feed URL to analyze; repeat the flag for multiple feeds
    #[arg(long = "feed-url", required = true)]
    feed_url: Vec<String>,

    /// Emit the episodes and ranked weekday distribution as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let fetcher = HttpFetcher::new(FetchConfig::default());
    let processor = FeedProcessor::new();

    let mut episodes: Vec<Episode> = Vec::new();
    for url in &cli.feed_url {
        let raw = fetcher
            .fetch(url)
            .await
            .with_context(|| format!("Failed to fetch feed {url}"))?;
        let processed = processor
            .process(raw, url)
            .with_context(|| format!("Failed to process feed {url}"))?;
        info!("Processed {} records from {}", processed.len(), url);
        episodes.extend(processed);
    }

    let distribution = weekday_distribution(&episodes);

    if cli.json {
        let report = serde_json::json!({
            "episodes": episodes,
            "weekday_distribution": distribution
                .iter()
                .map(|(day, count)| serde_json::json!({
                    "weekday": weekday_label(*day),
                    "count": count,
                }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render::render_heatmap(&distribution));
        println!("{}", render::render_episodes(&episodes));
    }

    Ok(())
}
