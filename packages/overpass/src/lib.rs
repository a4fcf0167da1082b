#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Overpass API client for boundary and land-use lookups.
//!
//! Two query shapes are supported:
//!
//! 1. **Boundary containment** — find the county-level administrative
//!    relation containing a named municipal area, with a fallback for
//!    consolidated city-county jurisdictions.
//! 2. **Land use** — find all park-tagged features inside a named
//!    municipal area, with reference closure so way node data is
//!    included.
//!
//! Query construction ([`query`]) and response decoding ([`response`])
//! are pure and separately testable; the fetch functions here are the
//! only I/O.
//!
//! See <https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL>

pub mod query;
pub mod response;

use greenspace_map_models::GeoElement;
use thiserror::Error;

/// Public Overpass interpreter endpoint.
pub const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Errors from Overpass operations.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response decoding failed.
    #[error("Decode error: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },
}

/// Runs an Overpass query and decodes the returned elements.
///
/// Elements that lack the fields their type requires are skipped, not
/// fatal; an entirely malformed body is a [`OverpassError::Decode`].
///
/// # Errors
///
/// Returns [`OverpassError`] if the HTTP request or response decoding
/// fails.
pub async fn fetch_elements(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Vec<GeoElement>, OverpassError> {
    let resp = client
        .post(base_url)
        .form(&[("data", query)])
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    response::decode_elements(&body)
}

/// Fetches the administrative boundary containing the named place.
///
/// Returns the first relation carrying non-empty geometry, or `None`
/// when the place has no resolvable containing boundary.
///
/// # Errors
///
/// Returns [`OverpassError`] if the HTTP request or response decoding
/// fails.
pub async fn fetch_boundary(
    client: &reqwest::Client,
    base_url: &str,
    place: &str,
) -> Result<Option<GeoElement>, OverpassError> {
    let elements = fetch_elements(client, base_url, &query::boundary_query(place)).await?;
    let boundary = response::first_boundary_relation(&elements).cloned();

    if boundary.is_none() {
        log::warn!("No boundary relation with geometry found for {place:?}");
    }

    Ok(boundary)
}

/// Fetches all park-tagged features within the named place.
///
/// An empty result is legitimate (a place with no mapped parks), not an
/// error.
///
/// # Errors
///
/// Returns [`OverpassError`] if the HTTP request or response decoding
/// fails.
pub async fn fetch_land_use(
    client: &reqwest::Client,
    base_url: &str,
    place: &str,
) -> Result<Vec<GeoElement>, OverpassError> {
    let elements = fetch_elements(client, base_url, &query::land_use_query(place)).await?;
    log::info!("Fetched {} land-use elements for {place:?}", elements.len());
    Ok(elements)
}
