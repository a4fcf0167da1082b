#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line green-space report generator.
//!
//! Fetches boundary and land-use data from Overpass and population
//! figures from the Census Bureau, assembles the per-capita report, and
//! prints it (optionally as JSON, optionally writing the boundary
//! silhouette to an SVG file).

mod format;
mod svg;

use std::path::PathBuf;

use clap::Parser;
use greenspace_map_models::PerCapita;
use greenspace_map_report::ReportConfig;

/// Green-space per-capita report for a named place.
#[derive(Parser)]
struct Args {
    /// Place name (e.g. "Lexington").
    place: String,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Write the boundary silhouette to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Skip the green-space layer (boundary lookup only).
    #[arg(long)]
    no_greenspace: bool,

    /// Edge length of the square boundary canvas.
    #[arg(long, default_value_t = greenspace_map_geometry::DEFAULT_CANVAS_SIZE)]
    canvas_size: f64,

    /// Latitude for the degree-to-feet conversion.
    #[arg(long, default_value_t = greenspace_map_geometry::DEFAULT_LATITUDE_DEG)]
    latitude: f64,

    /// Overpass interpreter URL.
    #[arg(long, default_value = greenspace_map_overpass::DEFAULT_BASE_URL)]
    overpass_url: String,

    /// Census ACS endpoint URL.
    #[arg(long, default_value = greenspace_map_census::DEFAULT_BASE_URL)]
    census_url: String,

    /// State FIPS code for the population lookup.
    #[arg(long, default_value = greenspace_map_census::KENTUCKY_STATE_FIPS)]
    state_fips: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let args = Args::parse();

    let config = ReportConfig {
        include_greenspace: !args.no_greenspace,
        canvas_size: args.canvas_size,
        latitude_deg: args.latitude,
    };

    let client = reqwest::Client::builder()
        .user_agent("greenspace-map/0.1")
        .build()?;

    log::info!("Building green-space report for {:?}", args.place);

    let report = greenspace_map_report::build_report(
        &client,
        &args.overpass_url,
        &args.census_url,
        &args.state_fips,
        &args.place,
        &config,
    )
    .await?;

    if let (Some(path), Some(shape)) = (&args.svg, &report.boundary) {
        std::fs::write(path, svg::document(shape, config.canvas_size))?;
        log::info!("Wrote boundary silhouette to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Green space report for {}", format::title_case(&args.place));
    println!(
        "  Estimated public green space: {} ft²",
        format::format_sq_ft(report.area_sq_ft)
    );

    match report.per_capita {
        PerCapita::Available(per_capita) => {
            println!(
                "  Per resident: {} ft²",
                format::format_sq_ft(per_capita)
            );
        }
        PerCapita::NoPopulationMatch => {
            println!(
                "  Per resident: unavailable (no population row matches {:?})",
                report.normalized_place
            );
        }
        PerCapita::ZeroPopulation => {
            println!("  Per resident: unavailable (population data reports zero)");
        }
    }

    match &report.boundary {
        Some(shape) => println!("  Containing boundary: {} projected vertices", shape.len()),
        None => println!("  Containing boundary: not found"),
    }

    Ok(())
}
