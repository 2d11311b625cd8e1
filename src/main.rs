use anyhow::Result;
use clap::{ArgAction, Parser};
use seasonlink::{
    config::{Config, DEFAULT_DESTINATION, DEFAULT_SOURCE},
    course::{Options, Report, link_course},
    fs::LocalFs,
};
use std::io::{self, Write};
use tabled::{Table, Tabled, settings::Style};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Course folder name inside the library
    #[arg(env = "SEASONLINK_COURSE")]
    course: String,
    /// Course root; `{course}` is replaced with the course name
    #[arg(long, env = "SEASONLINK_SOURCE", default_value = DEFAULT_SOURCE)]
    source: String,
    /// Folder the course's season directories are created under
    #[arg(long, env = "SEASONLINK_DESTINATION", default_value = DEFAULT_DESTINATION)]
    destination: String,
    /// Print the mapping without creating anything
    #[arg(long)]
    dry_run: bool,
    /// Print a table of the seasons after linking
    #[arg(long)]
    summary: bool,
    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Tabled)]
struct SeasonRow {
    #[tabled(rename = "Season")]
    season: u32,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Episodes")]
    episodes: usize,
}

fn summary_table(report: &Report) -> String {
    let rows = report.seasons.iter().map(|record| SeasonRow {
        season: record.season,
        source: record
            .source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        destination: record.directory.clone(),
        episodes: record.episodes.len(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose))
        .with_writer(io::stderr)
        .without_time()
        .init();

    let config = Config::resolve(&args.course, &args.source, &args.destination)?;
    let options = Options {
        dry_run: args.dry_run,
    };

    let mut out = io::stdout().lock();
    let report = link_course(&LocalFs, &config, options, &mut out)?;

    if args.summary {
        writeln!(out, "{}", summary_table(&report))?;
    }

    Ok(())
}
