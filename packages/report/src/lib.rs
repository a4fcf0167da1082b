#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Green-space report assembly.
//!
//! [`assemble`] is pure wiring over the geometry, projection, and
//! matching crates: given already-fetched inputs it always produces a
//! [`GreenSpaceReport`], degrading missing optional data (no boundary,
//! no population row, zero population) into partial fields instead of
//! failing. [`build_report`] is the fetching orchestrator: it issues
//! the Overpass and census lookups concurrently and only fails when the
//! primary quantity — the green-space area — cannot be obtained at all.

use greenspace_map_census::{CensusError, matching};
use greenspace_map_geometry::{
    DEFAULT_CANVAS_SIZE, DEFAULT_LATITUDE_DEG, degrees_sq_to_square_feet, node_lookup, project,
    sum_closed_way_areas,
};
use greenspace_map_models::{GeoElement, GreenSpaceReport, PerCapita, PopulationRecord};
use greenspace_map_overpass::OverpassError;
use greenspace_map_place::normalize;
use thiserror::Error;

/// Call-time configuration for a report.
///
/// Replaces the module-level "enable greenspace" flag of earlier
/// revisions with an explicit value passed per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    /// Whether to fetch and compute the green-space layer at all. When
    /// disabled, the report carries area 0 and no per-capita figure.
    pub include_greenspace: bool,
    /// Edge length of the square drawing surface for the boundary.
    pub canvas_size: f64,
    /// Latitude used for the degree-to-feet conversion.
    pub latitude_deg: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_greenspace: true,
            canvas_size: DEFAULT_CANVAS_SIZE,
            latitude_deg: DEFAULT_LATITUDE_DEG,
        }
    }
}

/// Errors from report orchestration.
///
/// Only conditions where the green-space area itself cannot be
/// computed surface here; a missing boundary or population figure
/// degrades the report instead.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The land-use lookup failed.
    #[error("Land-use lookup failed: {0}")]
    LandUse(#[source] OverpassError),
}

/// Assembles a report from already-fetched inputs.
///
/// Never fails: a missing boundary skips the projection, a missing or
/// zero population yields an explicit [`PerCapita`] variant, and an
/// empty land-use set is a legitimate area of 0.
#[must_use]
pub fn assemble(
    place: &str,
    boundary: Option<&GeoElement>,
    land_use: &[GeoElement],
    population_rows: &[PopulationRecord],
    config: &ReportConfig,
) -> GreenSpaceReport {
    let normalized_place = normalize(place);

    let lookup = node_lookup(land_use);
    let area_deg2 = sum_closed_way_areas(land_use, &lookup);
    let area_sq_ft = degrees_sq_to_square_feet(area_deg2, config.latitude_deg);

    let boundary_shape = boundary
        .and_then(GeoElement::geometry)
        .map(|geometry| project(geometry, config.canvas_size));

    let per_capita = match matching::match_population(&normalized_place, population_rows) {
        None => {
            let candidates = matching::substring_candidates(&normalized_place, population_rows);
            if !candidates.is_empty() {
                log::warn!(
                    "No exact population match for {normalized_place:?}; {} substring candidate(s) ignored: {:?}",
                    candidates.len(),
                    candidates
                        .iter()
                        .map(|r| r.display_name.as_str())
                        .collect::<Vec<_>>()
                );
            }
            PerCapita::NoPopulationMatch
        }
        Some(row) if row.population == 0 => PerCapita::ZeroPopulation,
        #[allow(clippy::cast_precision_loss)]
        Some(row) => PerCapita::Available(area_sq_ft / row.population as f64),
    };

    GreenSpaceReport {
        place: place.to_string(),
        normalized_place,
        area_sq_ft,
        boundary: boundary_shape,
        per_capita,
    }
}

/// Fetches all inputs for a place and assembles the report.
///
/// The two Overpass lookups and the census lookup are independent and
/// issued concurrently. A boundary failure or census failure degrades
/// the report (logged, fields absent); only a land-use failure — the
/// primary quantity — is fatal. When the green-space layer is disabled
/// the land-use and census lookups are skipped entirely.
///
/// # Errors
///
/// Returns [`ReportError`] if the land-use lookup fails while the
/// green-space layer is enabled.
pub async fn build_report(
    client: &reqwest::Client,
    overpass_url: &str,
    census_url: &str,
    state_fips: &str,
    place: &str,
    config: &ReportConfig,
) -> Result<GreenSpaceReport, ReportError> {
    let (boundary, land_use, population_rows) = if config.include_greenspace {
        let (boundary, land_use, population) = tokio::join!(
            greenspace_map_overpass::fetch_boundary(client, overpass_url, place),
            greenspace_map_overpass::fetch_land_use(client, overpass_url, place),
            greenspace_map_census::fetch_population(client, census_url, state_fips),
        );

        let boundary = boundary.unwrap_or_else(|e| {
            log::warn!("Boundary lookup failed for {place:?}: {e}");
            None
        });
        let land_use = land_use.map_err(ReportError::LandUse)?;
        let population_rows = population.unwrap_or_else(|e: CensusError| {
            log::warn!("Population lookup failed for {place:?}: {e}");
            Vec::new()
        });

        (boundary, land_use, population_rows)
    } else {
        log::info!("Green-space layer disabled; fetching boundary only");
        let boundary = greenspace_map_overpass::fetch_boundary(client, overpass_url, place)
            .await
            .unwrap_or_else(|e| {
                log::warn!("Boundary lookup failed for {place:?}: {e}");
                None
            });

        (boundary, Vec::new(), Vec::new())
    };

    Ok(assemble(
        place,
        boundary.as_ref(),
        &land_use,
        &population_rows,
        config,
    ))
}
