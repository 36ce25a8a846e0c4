//! psn-harvest main entry point
//!
//! Command-line interface for the PlayStation Store discount harvester.

use clap::Parser;
use psn_harvest::config::load_config;
use psn_harvest::harvest::run_harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// psn-harvest: a PlayStation Store discount harvester
///
/// Walks the store's discount catalog page by page, resolves each discounted
/// listing's detail page for pricing and expiry metadata, and keeps a JSON
/// result document up to date after every accepted entry.
#[derive(Parser, Debug)]
#[command(name = "psn-harvest")]
#[command(version)]
#[command(about = "A PlayStation Store discount harvester", long_about = None)]
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

    /// Validate config and show the harvest plan without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    // Run the harvest
    match run_harvest(config).await {
        Ok(()) => {
            tracing::info!("Harvest completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("psn_harvest=info,warn"),
            1 => EnvFilter::new("psn_harvest=debug,info"),
            2 => EnvFilter::new("psn_harvest=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the harvest plan
fn handle_dry_run(config: &psn_harvest::config::Config) {
    println!("=== psn-harvest Dry Run ===\n");

    println!("Catalog:");
    println!("  Base URL: {}", config.catalog.base_url);
    println!("  Site origin: {}", config.catalog.site_origin);
    println!(
        "  Pages: {}..={} ({} pages)",
        config.catalog.first_page,
        config.catalog.last_page,
        config.catalog.last_page - config.catalog.first_page + 1
    );

    println!("\nProxies:");
    println!("  List path: {}", config.proxy.list_path);
    println!(
        "  Rotation: every {} pages, every {} detail requests",
        config.proxy.page_rotation_cadence, config.proxy.detail_rotation_cadence
    );

    println!("\nFetch:");
    println!("  Retry budget: {} attempts", config.fetch.retry_budget);
    println!("  Item delay: {}s", config.fetch.item_delay_secs);
    println!("  Shuffle items: {}", config.fetch.shuffle_items);

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);

    println!("\n✓ Configuration is valid");
}
