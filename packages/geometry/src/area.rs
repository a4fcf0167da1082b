//! Polygon area computation and unit conversion.

use std::collections::BTreeMap;

use greenspace_map_models::{GeoElement, LonLat};

use crate::FEET_PER_DEGREE_LAT;

/// Computes the planar area enclosed by an ordered vertex list using
/// the shoelace formula.
///
/// Cross products are accumulated over consecutive vertex pairs only;
/// no implicit wraparound edge is added. Callers passing an open ring
/// must close it themselves (repeat the first vertex at the end) or
/// accept that the last-to-first edge is omitted. Fewer than 3 vertices
/// is degenerate and yields 0.
#[must_use]
pub fn polygon_area(vertices: &[LonLat]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for pair in vertices.windows(2) {
        sum += pair[0].lon * pair[1].lat - pair[1].lon * pair[0].lat;
    }

    sum.abs() / 2.0
}

/// Converts a planar area in degrees² to square feet.
///
/// One degree of latitude is taken as 69 miles; one degree of longitude
/// shrinks by the cosine of the latitude. The result is exact for the
/// model, not for the Earth — small areas at mid-latitudes only. Kept
/// behind this function so a geodesically precise implementation can
/// replace it without changing any caller.
#[must_use]
pub fn degrees_sq_to_square_feet(area_deg2: f64, latitude_deg: f64) -> f64 {
    let feet_per_degree_lon = FEET_PER_DEGREE_LAT * latitude_deg.to_radians().cos();
    area_deg2 * FEET_PER_DEGREE_LAT * feet_per_degree_lon
}

/// Builds an id → coordinate lookup from the node elements of a
/// response.
#[must_use]
pub fn node_lookup(elements: &[GeoElement]) -> BTreeMap<i64, LonLat> {
    elements
        .iter()
        .filter_map(|el| match el {
            GeoElement::Node { id, coord } => Some((*id, *coord)),
            _ => None,
        })
        .collect()
}

/// Sums the planar areas of all closed ways, in degrees².
///
/// For each closed way, node ids are resolved through `lookup`;
/// unresolvable ids are dropped rather than treated as fatal. A way
/// with fewer than 3 resolvable coordinates contributes 0. Non-way
/// elements and open ways are ignored.
#[must_use]
pub fn sum_closed_way_areas(elements: &[GeoElement], lookup: &BTreeMap<i64, LonLat>) -> f64 {
    let mut total = 0.0;

    for element in elements {
        let Some(node_ids) = element.as_closed_way() else {
            continue;
        };

        let coords: Vec<LonLat> = node_ids
            .iter()
            .filter_map(|id| lookup.get(id).copied())
            .collect();

        if coords.len() < node_ids.len() {
            log::debug!(
                "Dropped {} unresolvable node references from a closed way",
                node_ids.len() - coords.len()
            );
        }

        if coords.len() > 2 {
            total += polygon_area(&coords);
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(lon: f64, lat: f64) -> LonLat {
        LonLat { lon, lat }
    }

    #[test]
    fn unit_square_closed_ring() {
        let square = [
            v(0.0, 0.0),
            v(1.0, 0.0),
            v(1.0, 1.0),
            v(0.0, 1.0),
            v(0.0, 0.0),
        ];
        assert!((polygon_area(&square) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn open_triangle() {
        let triangle = [v(0.0, 0.0), v(4.0, 0.0), v(0.0, 3.0)];
        assert!((polygon_area(&triangle) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_input_is_zero() {
        assert!(polygon_area(&[]).abs() < f64::EPSILON);
        assert!(polygon_area(&[v(1.0, 1.0)]).abs() < f64::EPSILON);
        assert!(polygon_area(&[v(1.0, 1.0), v(2.0, 2.0)]).abs() < f64::EPSILON);
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let cw = [
            v(0.0, 0.0),
            v(0.0, 1.0),
            v(1.0, 1.0),
            v(1.0, 0.0),
            v(0.0, 0.0),
        ];
        assert!((polygon_area(&cw) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn conversion_of_zero_is_zero() {
        assert!(degrees_sq_to_square_feet(0.0, 0.0).abs() < f64::EPSILON);
        assert!(degrees_sq_to_square_feet(0.0, 38.0).abs() < f64::EPSILON);
        assert!(degrees_sq_to_square_feet(0.0, 89.0).abs() < f64::EPSILON);
    }

    #[test]
    fn conversion_is_monotone_in_area() {
        let small = degrees_sq_to_square_feet(0.001, 38.0);
        let large = degrees_sq_to_square_feet(0.002, 38.0);
        assert!(large > small);
        assert!(small > 0.0);
    }

    #[test]
    fn conversion_at_equator_is_square_of_feet_per_degree() {
        let one_deg2 = degrees_sq_to_square_feet(1.0, 0.0);
        assert!((one_deg2 - FEET_PER_DEGREE_LAT * FEET_PER_DEGREE_LAT).abs() < 1.0);
    }

    #[test]
    fn sums_only_closed_resolvable_ways() {
        let elements = vec![
            GeoElement::Node {
                id: 1,
                coord: v(0.0, 0.0),
            },
            GeoElement::Node {
                id: 2,
                coord: v(1.0, 0.0),
            },
            GeoElement::Node {
                id: 3,
                coord: v(1.0, 1.0),
            },
            GeoElement::Node {
                id: 4,
                coord: v(0.0, 1.0),
            },
            // Closed unit square.
            GeoElement::Way {
                id: 10,
                nodes: vec![1, 2, 3, 4, 1],
            },
            // Open way: ignored.
            GeoElement::Way {
                id: 11,
                nodes: vec![1, 2, 3],
            },
            // Closed but only 2 resolvable coordinates: contributes 0.
            GeoElement::Way {
                id: 12,
                nodes: vec![1, 99, 1],
            },
        ];

        let lookup = node_lookup(&elements);
        assert_eq!(lookup.len(), 4);

        let total = sum_closed_way_areas(&elements, &lookup);
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unresolvable_nodes_are_dropped_not_fatal() {
        let elements = vec![
            GeoElement::Node {
                id: 1,
                coord: v(0.0, 0.0),
            },
            GeoElement::Node {
                id: 2,
                coord: v(4.0, 0.0),
            },
            GeoElement::Node {
                id: 3,
                coord: v(0.0, 3.0),
            },
            // The 99 reference is missing from the lookup; the
            // remaining ring is a closed triangle.
            GeoElement::Way {
                id: 10,
                nodes: vec![1, 2, 99, 3, 1],
            },
        ];

        let lookup = node_lookup(&elements);
        let total = sum_closed_way_areas(&elements, &lookup);
        assert!((total - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert!(sum_closed_way_areas(&[], &BTreeMap::new()).abs() < f64::EPSILON);
    }
}
