//! Statboard CLI
//!
//! Command-line dashboard for the metrics backend:
//! - Show stat rows for one or all categories
//! - Show the user summary cards
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statboard::client::{FileSource, MetricsClient, MetricsSource};
use statboard::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use statboard::metrics::{display_name, Category, TimeFrame};
use statboard::view::{format_value, Highlight, Page, StatRow, Tab, ViewSelection};

#[derive(Parser)]
#[command(name = "statboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard for pre-aggregated platform metrics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read the metrics document from a JSON file instead of the backend
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show stat rows for a category page
    Show {
        /// blockchain, content, users or all
        #[arg(default_value = "all")]
        target: String,
        /// Time frame (daily, monthly, allTime)
        #[arg(short, long)]
        time_frame: Option<TimeFrame>,
        /// Show growth percentages (details tab only)
        #[arg(long)]
        trend: bool,
        /// Tab (overview, details)
        #[arg(long)]
        tab: Option<Tab>,
    },

    /// Show the user summary cards
    Highlights,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One page as printed in JSON output
#[derive(Serialize)]
struct PageOutput {
    category: Category,
    state: &'static str,
    time_frame: TimeFrame,
    tab: Tab,
    #[serde(skip_serializing_if = "Option::is_none")]
    fetched_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    rows: Vec<StatRow>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Wrote default config to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    // An explicit config file must load; the search path only warns
    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            errors: Vec::new(),
        },
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_logging(&config.logging);
    loaded.report();

    let source: Box<dyn MetricsSource> = match &cli.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(MetricsClient::new(config.api.client_config())?),
    };
    tracing::debug!(source = source.name(), "Using metrics source");

    let ok = match cli.command {
        Commands::Show {
            target,
            time_frame,
            trend,
            tab,
        } => {
            let categories = parse_target(&target)?;
            let mut selection = config.dashboard.selection();
            if let Some(frame) = time_frame {
                selection.time_frame = frame;
            }
            if let Some(tab) = tab {
                selection.tab = tab;
            }
            selection.show_trend |= trend;

            show(source.as_ref(), &categories, &selection, cli.format).await?
        }
        Commands::Highlights => highlights(source.as_ref(), cli.format).await?,
        Commands::Config { .. } => true,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("statboard={}", config.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn parse_target(target: &str) -> anyhow::Result<Vec<Category>> {
    if target.eq_ignore_ascii_case("all") {
        return Ok(Category::all().to_vec());
    }
    target
        .parse::<Category>()
        .map(|c| vec![c])
        .map_err(anyhow::Error::msg)
}

/// Mount one page per category; each page performs its own fetch.
async fn show(
    source: &dyn MetricsSource,
    categories: &[Category],
    selection: &ViewSelection,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let mut pages: Vec<Page> = categories.iter().map(|c| Page::new(*c)).collect();
    futures_util::future::join_all(pages.iter_mut().map(|page| page.load(source))).await;

    let outputs: Vec<PageOutput> = pages
        .iter()
        .map(|page| PageOutput {
            category: page.category(),
            state: page.state().name(),
            time_frame: selection.time_frame,
            tab: selection.tab,
            fetched_at: match page.state() {
                statboard::PageState::Ready { fetched_at, .. } => Some(fetched_at.to_rfc3339()),
                _ => None,
            },
            message: page.message(),
            rows: page.rows(selection),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
        OutputFormat::Csv => print_csv(&outputs)?,
        OutputFormat::Table => {
            for output in &outputs {
                print_table(output);
            }
        }
    }

    for page in &pages {
        if let Some(err) = page.error().filter(|e| !e.is_no_data()) {
            tracing::error!(page = %page.category(), error = %err, "Page failed to load");
        }
    }
    Ok(pages
        .iter()
        .all(|page| page.error().map_or(true, |e| e.is_no_data())))
}

async fn highlights(source: &dyn MetricsSource, format: OutputFormat) -> anyhow::Result<bool> {
    let mut page = Page::new(Category::User);
    page.load(source).await;

    if let Some(message) = page.message() {
        eprintln!("{}", message);
        return Ok(page.error().map_or(true, |e| e.is_no_data()));
    }

    let cards = page.highlights();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["key", "label", "value", "note"])?;
            for card in &cards {
                writer.write_record([
                    card.key.to_string(),
                    card.label.to_string(),
                    card.value.map(format_value).unwrap_or_default(),
                    card.note.map(|n| n.to_string()).unwrap_or_default(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => print_highlights(&cards),
    }
    Ok(true)
}

fn print_table(output: &PageOutput) {
    println!("{}", output.category.title());
    println!("{} · {}", output.time_frame.label(), output.tab.label());
    println!("{}", "-".repeat(50));

    if let Some(message) = &output.message {
        println!("{}", message);
        println!();
        return;
    }

    for row in &output.rows {
        let label = match output.tab {
            Tab::Overview => display_name(output.category, &row.label),
            Tab::Details => row.label.as_str(),
        };
        let trend = row.trend.map(|t| t.to_string()).unwrap_or_default();
        println!("{:<24} {:>14}  {}", label, format_value(row.value), trend);
    }
    println!();
}

fn print_csv(outputs: &[PageOutput]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["category", "time_frame", "label", "value", "direction", "percent"])?;

    for output in outputs {
        for row in &output.rows {
            writer.write_record([
                output.category.slug().to_string(),
                output.time_frame.wire_key().to_string(),
                row.label.clone(),
                format_value(row.value),
                row.trend
                    .map(|t| format!("{:?}", t.direction).to_lowercase())
                    .unwrap_or_default(),
                row.trend
                    .map(|t| format!("{:.2}", t.percent))
                    .unwrap_or_default(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn print_highlights(cards: &[Highlight]) {
    println!("{}", Category::User.title());
    println!("{}", "-".repeat(50));

    for card in cards {
        let value = card.value.map(format_value).unwrap_or_else(|| "n/a".to_string());
        let note = card.note.map(|n| n.to_string()).unwrap_or_default();
        println!("{:<16} {:>12}  {}", card.label, value, note);
    }
}
