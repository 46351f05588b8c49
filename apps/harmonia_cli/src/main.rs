use anyhow::Context;
use clap::Parser;
use harmonia::aspects::SynastryEngine;
use harmonia::chart::{Chart, ChartBuilder, Person};
use harmonia::ephemeris::{EphemerisProvider, SwissEphemerisAdapter};
use harmonia::resolver::GeoZoneResolver;
use harmonia::SynastryResult;
use harmonia_config::HarmoniaSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build two natal charts and their synastry as JSON")]
struct Args {
    /// JSON file with `partner_a` and `partner_b` birth data
    input: PathBuf,

    /// Config file (default: configs/harmonia.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory; overrides the config file
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
struct ReportRequest {
    partner_a: Person,
    partner_b: Person,
}

#[derive(Debug, Serialize)]
struct ReportData {
    chart_a: Chart,
    chart_b: Chart,
    synastry: SynastryResult,
}

fn load_request(path: &Path) -> anyhow::Result<ReportRequest> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing birth data in {}", path.display()))
}

fn ephemeris_for(path: Option<PathBuf>) -> anyhow::Result<SwissEphemerisAdapter> {
    match path {
        Some(path) => SwissEphemerisAdapter::with_files(Some(path)).context("opening Swiss Ephemeris files"),
        None => Ok(SwissEphemerisAdapter::moshier()),
    }
}

fn build_report(
    request: &ReportRequest,
    settings: &HarmoniaSettings,
    ephemeris: &dyn EphemerisProvider,
) -> anyhow::Result<ReportData> {
    let builder = ChartBuilder::with_settings(&GeoZoneResolver, ephemeris, settings.chart.clone());
    let chart_a = builder
        .build_chart(&request.partner_a)
        .with_context(|| format!("building chart for {}", request.partner_a.name))?;
    let chart_b = builder
        .build_chart(&request.partner_b)
        .with_context(|| format!("building chart for {}", request.partner_b.name))?;

    let synastry = SynastryEngine::with_settings(settings.synastry.clone()).compute(&chart_a, &chart_b);
    for (label, chart) in [("A", &chart_a), ("B", &chart_b)] {
        if chart.time_unknown() {
            log::info!("Partner {label}: birth time unknown, houses and ascendant skipped");
        }
    }

    Ok(ReportData {
        chart_a,
        chart_b,
        synastry,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => harmonia_config::load_settings_from(path)?,
        None => harmonia_config::load_settings()?,
    };
    if args.ephemeris_path.is_some() {
        settings.ephemeris_path = args.ephemeris_path.clone();
    }

    let request = load_request(&args.input)?;
    let ephemeris = ephemeris_for(settings.ephemeris_path.clone())?;
    let report = build_report(&request, &settings, &ephemeris)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
