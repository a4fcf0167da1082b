//! SVG rendering of a projected boundary shape.

use greenspace_map_models::BoundaryShape;

/// Dark green fill for the boundary silhouette.
const FILL: &str = "#2e5d43";

/// Builds the SVG path data for a projected shape
/// (`"Mx,y Lx,y ... Z"`).
#[must_use]
pub fn path_data(shape: &BoundaryShape) -> String {
    let points: Vec<String> = shape.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
    format!("M{} Z", points.join(" L"))
}

/// Builds a standalone SVG document containing the boundary silhouette.
#[must_use]
pub fn document(shape: &BoundaryShape, canvas_size: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {canvas_size} {canvas_size}\" \
         preserveAspectRatio=\"xMidYMid meet\">\n\
         \x20 <path d=\"{}\" fill=\"{FILL}\" stroke=\"none\"/>\n\
         </svg>\n",
        path_data(shape)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenspace_map_models::ProjectedPoint;

    #[test]
    fn path_data_moves_then_lines_then_closes() {
        let shape = vec![
            ProjectedPoint { x: 0.0, y: 400.0 },
            ProjectedPoint { x: 400.0, y: 0.0 },
            ProjectedPoint { x: 0.0, y: 400.0 },
        ];
        assert_eq!(path_data(&shape), "M0,400 L400,0 L0,400 Z");
    }

    #[test]
    fn document_embeds_canvas_and_fill() {
        let shape = vec![ProjectedPoint { x: 0.0, y: 0.0 }];
        let doc = document(&shape, 400.0);
        assert!(doc.contains("viewBox=\"0 0 400 400\""));
        assert!(doc.contains("fill=\"#2e5d43\""));
    }
}
