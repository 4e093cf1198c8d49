//! Link-Slurp main entry point
//!
//! This is the command-line interface for the Link-Slurp service.

use anyhow::Context;
use clap::Parser;
use link_slurp::config::load_config_with_hash;
use link_slurp::slurp::Slurper;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Link-Slurp: list the hyperlinks of any web page
///
/// Serves a small JSON API that fetches a page and returns every anchor in it,
/// a status-check passthrough and a captcha-gated feedback form, alongside
/// the static front-end files.
#[derive(Parser, Debug)]
#[command(name = "link-slurp")]
#[command(version = "1.0.0")]
#[command(about = "Fetch a web page and list its links", long_about = None)]
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

    /// Validate config and print the effective settings without serving
    #[arg(long, conflicts_with = "scrape")]
    check_config: bool,

    /// Scrape a single URL, print the JSON result and exit
    #[arg(long, value_name = "URL", conflicts_with = "check_config")]
    scrape: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.check_config {
        handle_check_config(&config);
        return Ok(());
    }

    if let Some(url) = cli.scrape {
        let slurper = Slurper::new(&config.fetcher).context("failed to build HTTP client")?;
        let json = slurper.scrape_json(&url).await;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&json)?;
        writeln!(stdout)?;
        return Ok(());
    }

    link_slurp::server::serve(config)
        .await
        .context("server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_slurp=info,tower_http=warn,warn"),
            1 => EnvFilter::new("link_slurp=debug,tower_http=info,info"),
            2 => EnvFilter::new("link_slurp=trace,tower_http=debug,debug"),
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

/// Prints the effective configuration for --check-config
fn handle_check_config(config: &link_slurp::Config) {
    println!("=== Link-Slurp Configuration ===\n");

    println!("Server:");
    println!("  Bind address: {}", config.server.bind_address);
    match &config.server.static_dir {
        Some(dir) => println!("  Static files: {}", dir),
        None => println!("  Static files: (disabled)"),
    }

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Connect timeout: {}s", config.fetcher.connect_timeout_secs);

    println!("\nFeedback mail:");
    match (&config.smtp, &config.recaptcha) {
        (Some(smtp), Some(recaptcha)) => {
            println!("  Relay: {}:{}", smtp.server, smtp.port);
            println!("  Recipient: {}", smtp.recipient);
            println!("  Captcha endpoint: {}", recaptcha.verify_url);
        }
        _ => println!("  (disabled: [smtp] and [recaptcha] are both required)"),
    }

    println!("\n✓ Configuration is valid");
}
