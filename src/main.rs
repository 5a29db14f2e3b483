//! Command line front end: render embed markup for URLs

use anyhow::Context;
use clap::Parser;
use forum_embeds::{EmbedConfig, EmbedService, OEmbedClientConfig, ServiceConfig};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Render forum embed markup for media URLs
#[derive(Debug, Parser)]
#[command(name = "forum-embeds", version, about)]
struct Cli {
    /// URLs to render
    #[arg(required = true)]
    urls: Vec<String>,

    /// Never call provider oEmbed endpoints
    #[arg(long)]
    offline: bool,

    /// Print the matched embed data as JSON instead of markup
    #[arg(long)]
    json: bool,

    /// Override the YouTube oEmbed endpoint
    #[arg(long, value_name = "URL")]
    oembed_endpoint: Option<String>,

    /// oEmbed request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forum_embeds=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ServiceConfig::new()
        .with_embed(EmbedConfig::new().with_network_enabled(!cli.offline))
        .with_client(OEmbedClientConfig::new().with_timeout(Duration::from_secs(cli.timeout)));
    if let Some(endpoint) = cli.oembed_endpoint {
        config = config.with_youtube_oembed_endpoint(endpoint);
    }

    let service = EmbedService::new(config).context("Failed to set up embed service")?;

    for url in &cli.urls {
        if cli.json {
            let json = match service.match_url(url).await {
                Some(data) => data
                    .to_json()
                    .with_context(|| format!("Failed to serialize embed data for {}", url))?,
                None => "null".to_string(),
            };
            println!("{}", json);
        } else {
            println!("{}", service.render_url(url).await);
        }
    }

    Ok(())
}
