//! Projection of geographic boundaries onto a fixed square canvas.

use greenspace_map_models::{BoundaryShape, LonLat, ProjectedPoint};

/// Projects geographic vertices into a `canvas_size` × `canvas_size`
/// drawing surface.
///
/// A single uniform scale maps the longer axis of the bounding box onto
/// the full canvas edge, preserving aspect ratio; the shorter axis
/// leaves empty margin rather than stretching. Y is flipped because
/// latitude grows northward while the drawing surface's origin is
/// top-left with Y growing downward.
///
/// The returned path is explicitly closed: the first projected point is
/// appended as the terminal vertex. A zero-span input (single point or
/// all-identical points) projects with scale 1 instead of dividing by
/// zero, yielding a degenerate path.
///
/// # Panics
///
/// Panics if `canvas_size` is not positive. That is a programmer error,
/// not a data condition.
#[must_use]
pub fn project(vertices: &[LonLat], canvas_size: f64) -> BoundaryShape {
    assert!(canvas_size > 0.0, "canvas size must be positive");

    if vertices.is_empty() {
        return Vec::new();
    }

    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;

    for v in vertices {
        min_lon = min_lon.min(v.lon);
        max_lon = max_lon.max(v.lon);
        min_lat = min_lat.min(v.lat);
        max_lat = max_lat.max(v.lat);
    }

    let span = (max_lon - min_lon).max(max_lat - min_lat);
    let scale = if span == 0.0 { 1.0 } else { canvas_size / span };

    let mut shape: BoundaryShape = vertices
        .iter()
        .map(|v| ProjectedPoint {
            x: (v.lon - min_lon) * scale,
            y: canvas_size - (v.lat - min_lat) * scale,
        })
        .collect();

    // Close the path for the consumer.
    if let Some(first) = shape.first().copied() {
        shape.push(first);
    }

    shape
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(lon: f64, lat: f64) -> LonLat {
        LonLat { lon, lat }
    }

    fn extent(shape: &BoundaryShape, f: impl Fn(&ProjectedPoint) -> f64) -> f64 {
        let min = shape.iter().map(&f).fold(f64::INFINITY, f64::min);
        let max = shape.iter().map(&f).fold(f64::NEG_INFINITY, f64::max);
        max - min
    }

    #[test]
    fn longer_axis_fills_canvas_and_aspect_is_preserved() {
        // 2 degrees of longitude by 1 degree of latitude.
        let boundary = [v(-85.0, 38.0), v(-83.0, 38.0), v(-83.0, 39.0), v(-85.0, 39.0)];
        let shape = project(&boundary, 400.0);

        assert!((extent(&shape, |p| p.x) - 400.0).abs() < 1e-9);
        assert!((extent(&shape, |p| p.y) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn y_axis_is_flipped() {
        let boundary = [v(0.0, 0.0), v(1.0, 1.0)];
        let shape = project(&boundary, 400.0);

        // The northernmost vertex lands at the top of the canvas.
        assert!((shape[1].y - 0.0).abs() < 1e-9);
        assert!((shape[0].y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn path_is_explicitly_closed() {
        let boundary = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)];
        let shape = project(&boundary, 400.0);

        assert_eq!(shape.len(), boundary.len() + 1);
        assert_eq!(shape.first(), shape.last());
    }

    #[test]
    fn zero_span_input_does_not_divide_by_zero() {
        let point = [v(-84.5, 38.0), v(-84.5, 38.0)];
        let shape = project(&point, 400.0);

        assert_eq!(shape.len(), 3);
        for p in &shape {
            assert!(p.x.is_finite());
            assert!(p.y.is_finite());
            assert!((p.x - 0.0).abs() < 1e-9);
            assert!((p.y - 400.0).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_input_projects_to_empty_path() {
        assert!(project(&[], 400.0).is_empty());
    }

    #[test]
    #[should_panic(expected = "canvas size must be positive")]
    fn non_positive_canvas_panics() {
        let _ = project(&[v(0.0, 0.0)], 0.0);
    }
}
