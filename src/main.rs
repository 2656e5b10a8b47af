//! Gossamer main entry point
//!
//! This is the command-line interface for the Gossamer web spider.

use clap::Parser;
use gossamer::config::load_config_with_hash;
use gossamer::Orchestrator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Gossamer: a domain-scoped web spider
///
/// Gossamer crawls seed URLs to a bounded depth within each seed's
/// registered domain, extracts clean text from every page, downloads linked
/// assets, and writes one JSON document array per domain.
#[derive(Parser, Debug)]
#[command(name = "gossamer")]
#[command(version = "1.0.0")]
#[command(about = "A domain-scoped web spider for clean-text harvesting", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Run the HTTP front end instead of a one-shot crawl
    #[arg(long, conflicts_with_all = ["dry_run", "full"])]
    serve: bool,

    /// Extract full structured documents (title and headers) instead of text only
    #[arg(long, conflicts_with = "serve")]
    full: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "serve")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.serve {
        gossamer::server::serve(config).await?;
    } else {
        handle_crawl(config, !cli.full).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gossamer=info,warn"),
            1 => EnvFilter::new("gossamer=debug,info"),
            2 => EnvFilter::new("gossamer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &gossamer::config::Config) {
    println!("=== Gossamer Dry Run ===\n");

    println!("Crawler Configuration:");
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!("  Page timeout: {}s", config.crawler.page_timeout_secs);
    println!("  Asset timeout: {}s", config.crawler.asset_timeout_secs);
    println!(
        "  Asset extensions: {}",
        config.crawler.asset_extensions.join(", ")
    );

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);

    println!("\nOutput:");
    println!("  Root directory: {}", config.output.root_dir);

    println!("\nServer:");
    println!("  Bind address: {}", config.server.bind_addr);

    println!("\nSeeds ({}):", config.seed.len());
    for seed in &config.seed {
        println!("  - {} (depth {})", seed.url, seed.depth);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would crawl {} seed URLs", config.seed.len());
}

/// Handles a one-shot crawl over the config's seed list
async fn handle_crawl(
    config: gossamer::config::Config,
    text_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.seed.is_empty() {
        tracing::warn!("No [[seed]] entries in config; nothing to crawl");
        return Ok(());
    }

    let seeds = config.seed.clone();
    let output_root = config.output.root_dir.clone();

    let orchestrator = Orchestrator::new(&config)?;
    let documents = orchestrator.crawl_and_extract(&seeds, text_only).await;

    tracing::info!(
        "Crawl produced {} document(s); output written under {}",
        documents.len(),
        output_root
    );

    Ok(())
}
