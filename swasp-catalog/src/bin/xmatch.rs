use std::path::Path;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use swasp_catalog::radius::stellar_radius;
use swasp_catalog::targets::{self, Target};
use swasp_catalog::{GaiaSource, VizierClient};
use swasp_core::parse_swasp_id;

/// Radius placeholder emitted when theta is unknown.
const RSTAR_UNKNOWN: f64 = -1.0;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "swasp-xmatch")]
#[command(about = "Cross-match SuperWASP objects against the Gaia/TGAS catalogue")]
#[command(version)]
struct Cli {
    /// SuperWASP identifier, or path to a target list file with one
    /// space-free identifier and optional IRFM theta (mas) per line
    target: String,

    /// IRFM theta value in mas; ignored when reading a target file
    #[arg(long)]
    theta: Option<f64>,

    /// Search radius in arcseconds
    #[arg(long, default_value = "5.0")]
    radius: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(serde::Serialize)]
struct MatchRow {
    swasp_id: String,
    source_id: i64,
    tyc: Option<String>,
    hip: Option<u32>,
    ra_deg: f64,
    dec_deg: f64,
    pmra_mas_yr: f64,
    pmdec_mas_yr: f64,
    plx_mas: f64,
    e_plx_mas: f64,
    r_star_rsun: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let targets = if Path::new(&cli.target).exists() {
        targets::read_target_list(&cli.target)
            .with_context(|| format!("reading target list {}", cli.target))?
    } else {
        vec![Target::new(cli.target.clone(), cli.theta)]
    };

    let client = VizierClient::new()?;

    let mut rows = Vec::new();
    for target in &targets {
        let pos = match parse_swasp_id(&target.swasp_id) {
            Some(pos) => pos,
            None => {
                log::warn!(
                    "{}: not a SuperWASP identifier, no coordinate available, skipping",
                    target.swasp_id
                );
                continue;
            }
        };

        let sources = client
            .query_region(&pos, cli.radius)
            .with_context(|| format!("querying around {}", target.swasp_id))?;
        log::info!("{}: {} match(es)", target.swasp_id, sources.len());

        for source in &sources {
            rows.push(build_row(&target.swasp_id, target.theta_mas, source));
        }
    }

    match cli.format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => print_csv(&rows),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn build_row(swasp_id: &str, theta_mas: Option<f64>, source: &GaiaSource) -> MatchRow {
    let r_star_rsun = match theta_mas {
        Some(theta) => stellar_radius(theta, source.plx_mas),
        None => RSTAR_UNKNOWN,
    };

    MatchRow {
        swasp_id: swasp_id.to_string(),
        source_id: source.source_id,
        tyc: source.tyc.clone(),
        hip: source.hip,
        ra_deg: source.ra_deg,
        dec_deg: source.dec_deg,
        pmra_mas_yr: source.pmra_mas_yr,
        pmdec_mas_yr: source.pmdec_mas_yr,
        plx_mas: source.plx_mas,
        e_plx_mas: source.e_plx_mas,
        r_star_rsun,
    }
}

fn print_table(rows: &[MatchRow]) {
    println!(
        "{:<26} {:<20} {:<12} {:<8} {:>12} {:>12} {:>9} {:>9} {:>8} {:>7} {:>9}",
        "SWASP", "SOURCE", "TYC", "HIP", "RA", "DEC", "PMRA", "PMDEC", "PLX", "ePLX", "RSTAR"
    );
    for row in rows {
        println!(
            "{:<26} {:<20} {:<12} {:<8} {:>12.6} {:>+12.6} {:>9.3} {:>9.3} {:>8.4} {:>7.4} {:>9.4}",
            row.swasp_id,
            row.source_id,
            row.tyc.as_deref().unwrap_or("-"),
            row.hip.map_or_else(|| "-".to_string(), |h| h.to_string()),
            row.ra_deg,
            row.dec_deg,
            row.pmra_mas_yr,
            row.pmdec_mas_yr,
            row.plx_mas,
            row.e_plx_mas,
            row.r_star_rsun
        );
    }

    if rows.is_empty() {
        println!("No catalogue matches.");
    } else {
        println!("\nTotal matches: {}", rows.len());
    }
}

fn print_csv(rows: &[MatchRow]) {
    println!(
        "swasp_id,source_id,tyc,hip,ra_deg,dec_deg,pmra_mas_yr,pmdec_mas_yr,plx_mas,e_plx_mas,r_star_rsun"
    );
    for row in rows {
        println!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            row.swasp_id,
            row.source_id,
            row.tyc.as_deref().unwrap_or(""),
            row.hip.map_or_else(String::new, |h| h.to_string()),
            row.ra_deg,
            row.dec_deg,
            row.pmra_mas_yr,
            row.pmdec_mas_yr,
            row.plx_mas,
            row.e_plx_mas,
            row.r_star_rsun
        );
    }
}
