#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared geographic element and report types.
//!
//! These types flow between the Overpass decoding layer, the geometry
//! engine, the census matcher, and the report assembler. They carry no
//! behavior beyond simple accessors and are independent of any transport.

use serde::{Deserialize, Serialize};

/// A longitude/latitude coordinate pair (WGS84).
///
/// Field order matches the Overpass `geometry` entries, so this type
/// deserializes directly from a boundary relation's vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
}

/// A decoded OpenStreetMap element from an Overpass response.
///
/// Ways reference node data by id rather than owning coordinates; the
/// geometry engine resolves those ids through a separate node lookup.
/// Relations carry their boundary vertices inline (from `out geom`).
#[derive(Debug, Clone, PartialEq)]
pub enum GeoElement {
    /// A single point with a stable identifier.
    Node {
        /// OSM node id.
        id: i64,
        /// Node position.
        coord: LonLat,
    },
    /// An ordered sequence of node references.
    Way {
        /// OSM way id.
        id: i64,
        /// Ordered node ids. The way does not own the node coordinates.
        nodes: Vec<i64>,
    },
    /// A relation with inline boundary geometry.
    Relation {
        /// OSM relation id.
        id: i64,
        /// Ordered boundary vertices, possibly empty when the backend
        /// omitted geometry.
        geometry: Vec<LonLat>,
    },
}

impl GeoElement {
    /// Returns the node ids of a closed way, or `None` for open ways and
    /// non-way elements.
    ///
    /// A way is closed iff it has at least one node id and its first and
    /// last ids are equal.
    #[must_use]
    pub fn as_closed_way(&self) -> Option<&[i64]> {
        match self {
            Self::Way { nodes, .. } if !nodes.is_empty() && nodes.first() == nodes.last() => {
                Some(nodes)
            }
            _ => None,
        }
    }

    /// Returns the inline boundary geometry of a relation, or `None` for
    /// other elements and for relations whose geometry is empty.
    #[must_use]
    pub fn geometry(&self) -> Option<&[LonLat]> {
        match self {
            Self::Relation { geometry, .. } if !geometry.is_empty() => Some(geometry),
            _ => None,
        }
    }
}

/// One row of a population dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationRecord {
    /// Display name as returned by the census service
    /// (e.g. "Lexington-Fayette urban county, Kentucky").
    pub display_name: String,
    /// Resident count. Zero means "data unavailable", which is distinct
    /// from the row being absent entirely.
    pub population: u64,
}

/// A point on the fixed-size drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Horizontal position, in `[0, canvas]`.
    pub x: f64,
    /// Vertical position, in `[0, canvas]`. Grows downward.
    pub y: f64,
}

/// An administrative boundary projected onto the drawing surface.
///
/// The path is explicitly closed: the first projected point is repeated
/// as the terminal vertex.
pub type BoundaryShape = Vec<ProjectedPoint>;

/// Per-capita green space, or the reason it is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum PerCapita {
    /// Square feet of green space per resident.
    Available(f64),
    /// No population row matched the normalized place name.
    NoPopulationMatch,
    /// A row matched but reported a population of zero.
    ZeroPopulation,
}

/// The assembled green-space report for one place lookup.
///
/// Created once per lookup and never mutated. Missing optional inputs
/// produce partial fields, never a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenSpaceReport {
    /// The place name as requested.
    pub place: String,
    /// The normalized form used for querying and matching.
    pub normalized_place: String,
    /// Estimated public green space, in square feet. Zero when no park
    /// features were found or the green-space layer is disabled.
    pub area_sq_ft: f64,
    /// Projected containing-boundary outline, when the boundary lookup
    /// returned a relation with geometry.
    pub boundary: Option<BoundaryShape>,
    /// Green space per resident, or why it could not be computed.
    pub per_capita: PerCapita,
}
