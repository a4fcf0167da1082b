#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! US Census Bureau population data client.
//!
//! Fetches total-population rows (ACS 5-year estimates, variable
//! `B01003_001E`) for every place in a state, parses the tabular
//! response into [`PopulationRecord`]s, and matches a normalized place
//! name against them. No API key required for this table.
//!
//! Parsing ([`rows`]) and matching ([`matching`]) are pure and
//! separately testable; the fetch function here is the only I/O.
//!
//! See <https://www.census.gov/data/developers/data-sets/acs-5year.html>

pub mod matching;
pub mod rows;

use greenspace_map_models::PopulationRecord;
use thiserror::Error;

/// ACS 5-year estimates endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.census.gov/data/2023/acs/acs5";

/// Total population variable in the ACS tables.
pub const POPULATION_VARIABLE: &str = "B01003_001E";

/// State FIPS code for Kentucky.
pub const KENTUCKY_STATE_FIPS: &str = "21";

/// Errors from census operations.
#[derive(Debug, Error)]
pub enum CensusError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}

/// Fetches population rows for every place in a state.
///
/// # Errors
///
/// Returns [`CensusError`] if the HTTP request fails or the response is
/// not the expected tabular shape.
pub async fn fetch_population(
    client: &reqwest::Client,
    base_url: &str,
    state_fips: &str,
) -> Result<Vec<PopulationRecord>, CensusError> {
    let resp = client
        .get(base_url)
        .query(&[
            ("get", format!("NAME,{POPULATION_VARIABLE}")),
            ("for", "place:*".to_string()),
            ("in", format!("state:{state_fips}")),
        ])
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    let records = rows::parse_population_rows(&body)?;

    log::info!(
        "Fetched {} population rows for state {state_fips}",
        records.len()
    );

    Ok(records)
}
