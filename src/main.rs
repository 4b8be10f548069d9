//! siteinspector 命令行入口
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use siteinspector::reconstructor::AnimationStats;
use siteinspector::{ConfigManager, SiteInspector};

#[derive(Parser, Debug)]
#[command(
    name = "siteinspector",
    version,
    about = "Analyze a website's animation libraries and rebuild a self-contained preview"
)]
struct Cli {
    /// Target URL (https:// is added when no scheme is given)
    url: String,

    /// Proxy service base URL
    #[arg(long)]
    proxy: Option<String>,

    /// Directory to write the export bundle into
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the full analysis result as JSON
    #[arg(long)]
    json: bool,

    /// Attempts for the primary document
    #[arg(long)]
    site_attempts: Option<usize>,

    /// Attempts per linked stylesheet/script
    #[arg(long)]
    file_attempts: Option<usize>,

    /// Retry delay for linked assets, in milliseconds
    #[arg(long)]
    file_delay_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "siteinspector=debug"
    } else {
        "siteinspector=info"
    };
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut builder = ConfigManager::custom();
    if let Some(proxy) = cli.proxy {
        builder = builder.proxy_base(proxy);
    }
    if let Some(attempts) = cli.site_attempts {
        builder = builder.max_site_fetch_attempts(attempts);
    }
    if let Some(attempts) = cli.file_attempts {
        builder = builder.max_file_fetch_attempts(attempts);
    }
    if let Some(delay) = cli.file_delay_ms {
        builder = builder.file_retry_delay(Duration::from_millis(delay));
    }

    let inspector = SiteInspector::new(builder.build()).context("failed to build HTTP client")?;
    let session = inspector
        .analyze(&cli.url)
        .await
        .with_context(|| format!("analysis of {} failed", cli.url))?;
    let result = &session.result;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let stats = AnimationStats::from_result(result);
        println!("URL:            {}", session.target_url);
        println!("Title:          {}", result.title);
        println!("Description:    {}", result.description);
        println!("Technologies:   {}", result.tech_guesses.join(", "));
        println!(
            "Links:          {} internal / {} external",
            result.internal_links, result.external_links
        );
        println!("Images:         {}", result.images.len());
        println!("Stylesheets:    {}", result.stylesheets);
        println!("Open Graph:     {}", result.open_graph_tags);
        println!(
            "Animations:     {} files ({} high, {} medium), completeness {}%",
            stats.total_files, stats.high_confidence, stats.medium_confidence, stats.estimated_completeness
        );
        for file in &result.animation_files {
            println!(
                "  - [{}] {} ({}) {}%",
                file.kind.as_str(),
                file.url,
                file.library.as_deref().unwrap_or("Animation"),
                file.confidence
            );
        }
        if !result.required_cdn_urls.is_empty() {
            println!("CDN URLs:");
            for url in &result.required_cdn_urls {
                println!("  - {}", url);
            }
        }
    }

    if let Some(dir) = cli.out {
        let bundle = inspector.export_bundle(result);
        let written = bundle
            .write_to_dir(&dir)
            .await
            .with_context(|| format!("failed to write export bundle to {}", dir.display()))?;
        for path in written {
            eprintln!("wrote {}", path.display());
        }
    }

    Ok(())
}
