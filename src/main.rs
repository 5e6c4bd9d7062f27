//! Mushaf Index CLI
//!
//! Command-line lookups over surah/ayah/hizb coordinates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mushaf_index::{Edition, GlobalRange, LocalRange, Point, Position};

mod config;

use config::{Config, OutputFormat};

/// Surah/ayah/hizb coordinate lookups.
#[derive(Parser)]
#[command(name = "mushaf-index", version, about = "Surah/ayah/hizb coordinate lookups")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Edition JSON file (overrides MUSHAF_EDITION).
    #[arg(long, global = true)]
    edition: Option<PathBuf>,

    /// Print results as JSON (overrides MUSHAF_OUTPUT).
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Global index of a chapter-relative verse.
    Global { chapter: u32, verse: u32 },
    /// Chapter-relative position of a global index.
    Local { index: u32 },
    /// Global span of a chapter.
    Surah { chapter: u32 },
    /// Global span of a hizb and the chapters it covers.
    Hizb { hizb: u32 },
    /// Verses of a chapter that fall inside a hizb.
    Intersect { chapter: u32, hizb: u32 },
    /// Parse a point token (`2:255`, `hizb:12`) and resolve it.
    Point { token: String },
}

/// `RUST_LOG` wins over the `-v` count.
fn build_filter(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("mushaf_index={level}").into())
}

fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env first so a RUST_LOG set there reaches the filter.
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let mut config = Config::from_env();
    if cli.edition.is_some() {
        config.edition_path = cli.edition.clone();
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }

    let edition = config.load_edition()?;
    run(&edition, cli.command, config.output)
}

fn run(edition: &Edition, command: Command, output: OutputFormat) -> anyhow::Result<()> {
    match command {
        Command::Global { chapter, verse } => {
            let index = edition.to_global(chapter, verse)?;
            emit(output, json!({ "global": index }), || {
                format!("{}:{} -> {}", chapter, verse, index)
            });
        }
        Command::Local { index } => {
            let position = edition.from_global(index)?;
            emit(output, json!(position), || {
                format!(
                    "{} -> {}:{}",
                    index, position.chapter_id, position.verse_in_chapter
                )
            });
        }
        Command::Surah { chapter } => {
            let range = edition.surah_range(chapter)?;
            emit(output, json!(range), || format!("surah {} -> {}", chapter, range));
        }
        Command::Hizb { hizb } => {
            let range = edition.hizb_range(hizb)?;
            let chapters = edition.chapters_in_hizb(hizb)?;
            emit(
                output,
                json!({ "range": range, "chapters": chapters }),
                || format!("hizb {} -> {}\n{}", hizb, range, list_ranges(&chapters)),
            );
        }
        Command::Intersect { chapter, hizb } => {
            let local = edition.verses_of_chapter_in_hizb(chapter, hizb)?;
            emit(output, json!(local), || match local {
                Some(range) => range.to_string(),
                None => format!("surah {} has no verses in hizb {}", chapter, hizb),
            });
        }
        Command::Point { token } => {
            let point = Point::parse(&token);
            let position = point.to_position()?;
            let range = position
                .map(|position| edition.resolve_position(position))
                .transpose()?;
            emit(output, point_report(&point, position, range), || match range {
                Some(range) => format!("{:?} -> {}", point.serialize(), range),
                None => "no selection".to_string(),
            });
        }
    }
    Ok(())
}

fn point_report(point: &Point, position: Option<Position>, range: Option<GlobalRange>) -> Value {
    json!({
        "point": point,
        "token": point.serialize(),
        "position": position,
        "range": range,
    })
}

fn emit(output: OutputFormat, value: Value, text: impl FnOnce() -> String) {
    match output {
        OutputFormat::Json => println!("{}", value),
        OutputFormat::Text => println!("{}", text()),
    }
}

fn list_ranges(ranges: &[LocalRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("  {}", r))
        .collect::<Vec<_>>()
        .join("\n")
}
