use anyhow::{Context, Result};
use clap::Parser;
use cutter_lib::modules::lookup::{LookupMode, LookupOutcome, LookupService};
use cutter_lib::shared::config::CutterConfig;
use cutter_lib::shared::utils::logger::init_logger;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cutter")]
#[command(about = "Look up Cutter–Sanborn codes for authors and titles")]
#[command(version)]
struct Cli {
    /// JSON table of {headerText, code} rows (defaults to $CUTTER_DATASET)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Lookup mode (author or title); guessed from the query when omitted
    #[arg(short, long)]
    mode: Option<LookupMode>,

    /// Entries shown on each side of the match
    #[arg(short, long)]
    radius: Option<usize>,

    /// Print each outcome as a JSON line
    #[arg(long)]
    json: bool,

    /// Query text; read one query per line from stdin when omitted
    query: Vec<String>,
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let mut config = CutterConfig::from_env().context("invalid environment configuration")?;
    if let Some(dataset) = &cli.dataset {
        config.dataset_path = Some(dataset.clone());
    }
    if let Some(radius) = cli.radius {
        config.neighbor_radius = radius;
    }

    let service = LookupService::from_config(&config).context("could not build the Cutter index")?;
    log::info!(
        "Cutter index ready with {} entries, showing {} neighbors per side",
        service.index().len(),
        service.neighbor_radius()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.query.is_empty() {
        let query = cli.query.join(" ");
        return print_outcome(&mut out, &run_lookup(&service, &query, cli.mode), cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read query from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        print_outcome(&mut out, &run_lookup(&service, &line, cli.mode), cli.json)?;
    }

    Ok(())
}

fn run_lookup<'a>(service: &'a LookupService, query: &str, mode: Option<LookupMode>) -> LookupOutcome<'a> {
    match mode {
        Some(mode) => service.lookup(query, mode),
        None => service.quick_lookup(query),
    }
}

fn print_outcome(out: &mut impl Write, outcome: &LookupOutcome<'_>, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(outcome)?)?;
        return Ok(());
    }

    let key = if outcome.normalized_key.is_empty() {
        "∅"
    } else {
        outcome.normalized_key.as_str()
    };

    writeln!(out, "Input:      {} ({})", outcome.input, outcome.mode)?;
    writeln!(out, "Normalized: {}", key)?;
    match outcome.best {
        Some(best) => {
            writeln!(out, "Code:       {}", best.entry.code)?;
            writeln!(out, "Heading:    {}", best.entry.raw_key)?;
        }
        None => writeln!(out, "Code:       -")?,
    }
    writeln!(out, "            {}", outcome.explanation())?;

    if !outcome.neighbors.is_empty() {
        writeln!(out, "Neighbors:")?;
        let matched = outcome.best.map(|m| m.entry);
        for entry in outcome.neighbors {
            let marker = if matched.is_some_and(|m| std::ptr::eq(m, entry)) {
                ">"
            } else {
                " "
            };
            writeln!(
                out,
                "  {} {:<8} {:<40} {}",
                marker, entry.code, entry.raw_key, entry.norm_key
            )?;
        }
    }
    writeln!(out)?;

    Ok(())
}
