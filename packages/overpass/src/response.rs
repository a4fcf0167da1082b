//! Lenient decoding of Overpass JSON responses.
//!
//! The wire shape is `{ "elements": [ {type, id?, lon?, lat?, nodes?,
//! geometry?}, ... ] }` where every field except `type` may be absent
//! depending on the output mode (`out body`, `out skel`, `out geom`).
//! Rows that lack the fields their type requires are skipped with a log
//! line rather than failing the whole response.

use greenspace_map_models::{GeoElement, LonLat};
use serde::Deserialize;

use crate::OverpassError;

/// Raw wire element with every field optional.
#[derive(Debug, Deserialize)]
struct RawElement {
    #[serde(rename = "type")]
    kind: String,
    id: Option<i64>,
    lon: Option<f64>,
    lat: Option<f64>,
    nodes: Option<Vec<i64>>,
    geometry: Option<Vec<LonLat>>,
}

/// Top-level Overpass response body.
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<RawElement>,
}

/// Decodes an Overpass response body into [`GeoElement`]s.
///
/// Unknown element types (e.g. `area`, `count`) and rows missing their
/// required fields are skipped. A missing `elements` array decodes as
/// empty.
///
/// # Errors
///
/// Returns [`OverpassError::Decode`] if the body is not the expected
/// response shape at the top level.
pub fn decode_elements(body: &serde_json::Value) -> Result<Vec<GeoElement>, OverpassError> {
    let response: OverpassResponse =
        serde_json::from_value(body.clone()).map_err(|e| OverpassError::Decode {
            message: format!("Unexpected Overpass response shape: {e}"),
        })?;

    let mut elements = Vec::with_capacity(response.elements.len());

    for raw in response.elements {
        match convert(raw) {
            Some(element) => elements.push(element),
            None => log::debug!("Skipping Overpass element missing required fields"),
        }
    }

    Ok(elements)
}

/// Converts a raw wire element, or `None` when required fields are
/// absent or the type is not one this system uses.
fn convert(raw: RawElement) -> Option<GeoElement> {
    match raw.kind.as_str() {
        "node" => Some(GeoElement::Node {
            id: raw.id?,
            coord: LonLat {
                lon: raw.lon?,
                lat: raw.lat?,
            },
        }),
        "way" => Some(GeoElement::Way {
            id: raw.id?,
            nodes: raw.nodes.unwrap_or_default(),
        }),
        "relation" => Some(GeoElement::Relation {
            id: raw.id?,
            geometry: raw.geometry.unwrap_or_default(),
        }),
        _ => None,
    }
}

/// Returns the first relation carrying non-empty geometry.
///
/// This is the single containing-boundary reduction: the boundary query
/// may return several features, and only one with full geometry is
/// usable for projection.
#[must_use]
pub fn first_boundary_relation(elements: &[GeoElement]) -> Option<&GeoElement> {
    elements.iter().find(|el| el.geometry().is_some())
}
