#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Planar polygon geometry and fixed-canvas boundary projection.
//!
//! The model treats small geographic areas as locally planar: polygon
//! areas are computed with the shoelace formula directly on degree
//! coordinates and converted to square feet with a latitude-dependent
//! scale factor. This is an explicit approximation, not geodesy; see
//! [`area::degrees_sq_to_square_feet`].

pub mod area;
pub mod project;

pub use area::{degrees_sq_to_square_feet, node_lookup, polygon_area, sum_closed_way_areas};
pub use project::project;

/// Feet per degree of latitude (69 miles at 5280 feet per mile).
pub const FEET_PER_DEGREE_LAT: f64 = 69.0 * 5280.0;

/// Default latitude for degree-to-feet conversion, in degrees north.
///
/// Mid-Kentucky. The source data spans a small enough region that a
/// single fixed latitude keeps the conversion error acceptable.
pub const DEFAULT_LATITUDE_DEG: f64 = 38.0;

/// Default edge length of the square drawing surface.
pub const DEFAULT_CANVAS_SIZE: f64 = 400.0;
