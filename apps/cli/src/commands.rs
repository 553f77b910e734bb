//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use linkdigest_core::{ProgressReporter, RunResult};
use linkdigest_feed::{FeedClient, LinkExtractor, LinkFilter, domains};
use linkdigest_shared::{AppConfig, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// linkdigest — aggregate and categorize newsletter links.
#[derive(Parser)]
#[command(
    name = "linkdigest",
    version,
    about = "Aggregate newsletter links, categorize them, and publish the digest.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path (defaults to ~/.linkdigest/linkdigest.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the full pipeline: fetch, classify, sort, export, publish.
    Run {
        /// Feed URL override.
        #[arg(long)]
        feed_url: Option<String>,

        /// CSV output path override.
        #[arg(short, long)]
        out: Option<String>,

        /// Write the CSV but skip the spreadsheet publish step.
        #[arg(long)]
        no_publish: bool,
    },

    /// Show the most frequent link domains in the feed.
    Domains {
        /// Feed URL override.
        #[arg(long)]
        feed_url: Option<String>,

        /// Number of domains to print.
        #[arg(short, long, default_value = "20")]
        top: usize,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "linkdigest=info",
        1 => "linkdigest=debug",
        _ => "linkdigest=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Command::Run {
            feed_url,
            out,
            no_publish,
        } => cmd_run(config_path.as_deref(), feed_url, out, no_publish).await,
        Command::Domains { feed_url, top } => {
            cmd_domains(config_path.as_deref(), feed_url, top).await
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show(config_path.as_deref()).await,
        },
    }
}

fn resolve_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    Ok(match path {
        Some(p) => load_config_from(p)?,
        None => load_config()?,
    })
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_run(
    config_path: Option<&std::path::Path>,
    feed_url: Option<String>,
    out: Option<String>,
    no_publish: bool,
) -> Result<()> {
    let mut config = resolve_config(config_path)?;

    if let Some(url) = feed_url {
        config.feed.url = url;
    }
    if let Some(path) = out {
        config.output.csv_path = path;
    }
    if no_publish {
        config.sheets = None;
    }

    info!(feed_url = %config.feed.url, "starting pipeline run");

    let reporter = CliProgress::new();
    let result = linkdigest_core::run(&config, &reporter).await?;

    println!();
    println!("  Run complete!");
    println!("  Entries:     {}", result.entries);
    println!("  Fundraising: {}", result.fundraising_links);
    println!("  Candidates:  {}", result.candidate_links);
    println!("  Rows:        {}", result.rows);
    println!("  Dropped:     {}", result.dropped.len());
    println!("  CSV:         {}", result.csv_path.display());
    println!(
        "  Published:   {}",
        if result.published { "yes" } else { "no" }
    );
    println!("  Time:        {:.1}s", result.elapsed.as_secs_f64());
    println!();

    for url in &result.dropped {
        println!("  dropped: {url}");
    }

    Ok(())
}

async fn cmd_domains(
    config_path: Option<&std::path::Path>,
    feed_url: Option<String>,
    top: usize,
) -> Result<()> {
    let config = resolve_config(config_path)?;
    let url = feed_url.unwrap_or(config.feed.url);

    let client = FeedClient::new(&config.feed.user_agent)?;
    let entries = client.fetch_entries(&url).await?;

    let extractor = LinkExtractor::new(LinkFilter::new(config.filter.blacklist));
    let mut urls: Vec<String> = Vec::new();
    for entry in &entries {
        let extracted = extractor.extract(entry);
        urls.extend(extracted.fundraising.into_iter().map(|l| l.url));
        urls.extend(extracted.general.into_iter().map(|l| l.url));
    }

    info!(entries = entries.len(), links = urls.len(), "feed scanned");

    let ranked = domains::most_frequent_domains(urls.iter().map(String::as_str));
    for (host, count) in ranked.iter().take(top) {
        println!("{count:>6}  {host}");
    }

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn link_processed(&self, url: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Fetching [{current}/{total}] {url}"));
    }

    fn done(&self, _result: &RunResult) {
        self.spinner.finish_and_clear();
    }
}
