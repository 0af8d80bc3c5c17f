mod calendar;
mod error;
mod fetcher;
mod parser;
mod server;
mod settings;

use std::time::{Duration, Instant};

use chrono::Datelike;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use calendar::CalendarDate;
use fetcher::HttpFetcher;
use parser::Category;
use settings::Settings;

#[derive(Parser)]
#[command(name = "efemerides", about = "Historical events for a calendar date, from es.wikipedia.org")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (POST /endpoint)
    Serve {
        /// Listen address (default: EFEMERIDES_ADDR or 0.0.0.0:3000)
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Look up one date and print its events as JSON
    Fetch {
        /// Day of month (default: today)
        #[arg(short, long, allow_negative_numbers = true)]
        day: Option<i32>,
        /// Month 1-12 (default: today)
        #[arg(short, long, allow_negative_numbers = true)]
        month: Option<i32>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load()?;

    match cli.command {
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                settings.addr = addr;
            }
            server::serve(&settings).await
        }
        Commands::Fetch { day, month, pretty } => {
            let today = chrono::Local::now().date_naive();
            let date = CalendarDate::new(
                day.unwrap_or_else(|| today.day() as i32),
                month.unwrap_or_else(|| today.month() as i32),
            );
            run_fetch(&settings, date, pretty).await
        }
    }
}

async fn run_fetch(settings: &Settings, date: CalendarDate, pretty: bool) -> anyhow::Result<()> {
    let t0 = Instant::now();
    let fetcher = HttpFetcher::new(settings)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Fetching {}", date.page_url(&settings.base_url)));
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = fetcher::fetch_events(&fetcher, &settings.base_url, date).await;
    pb.finish_and_clear();
    let events = result?;

    let json = if pretty {
        serde_json::to_string_pretty(&events)?
    } else {
        serde_json::to_string(&events)?
    };
    println!("{}", json);

    let counts: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", events.get(*c).len(), c.key()))
        .collect();
    eprintln!(
        "{}: {} events ({}) in {:.1}s",
        date.page_slug(),
        events.total(),
        counts.join(", "),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
