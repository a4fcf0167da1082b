//! Overpass QL query construction.
//!
//! Pure functions of the place string; no network I/O. Place names are
//! user-supplied, so every embedding goes through [`escape`] to keep a
//! name containing `"` or `\` from breaking the query structure.

/// Escapes a place name for embedding in an Overpass QL string literal.
///
/// Backslashes are doubled first, then double quotes are escaped, so a
/// hostile name cannot terminate the literal early.
#[must_use]
pub fn escape(place: &str) -> String {
    place.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Builds the boundary-containment query for a place.
///
/// Two-step search: resolve the municipal (admin level 8) area matching
/// the place name, then select county-level (admin level 6)
/// administrative relations containing it. The union's second branch
/// matches the place name directly at admin level 6 to handle
/// consolidated city-county jurisdictions, where no separate containing
/// county exists. `out geom` restricts the usable result set to
/// features carrying full boundary geometry.
#[must_use]
pub fn boundary_query(place: &str) -> String {
    let name = escape(place);
    format!(
        "[out:json][timeout:25];\n\
         area[\"name\"=\"{name}\"][\"admin_level\"=\"8\"]->.searchArea;\n\
         (\n\
         \x20 rel(area.searchArea)[\"boundary\"=\"administrative\"][\"admin_level\"=\"6\"];\n\
         \x20 rel[\"name\"=\"{name}\"][\"boundary\"=\"administrative\"][\"admin_level\"=\"6\"];\n\
         );\n\
         out geom;\n"
    )
}

/// Builds the land-use query for a place.
///
/// Searches the municipal (admin level 8) area for all `leisure=park`
/// features regardless of primitive (node, way, relation). `out body`
/// plus the `>` recursion and `out skel qt` pull in the node data that
/// way and relation members reference, so polygon areas can be resolved
/// from the response alone.
#[must_use]
pub fn land_use_query(place: &str) -> String {
    let name = escape(place);
    format!(
        "[out:json][timeout:25];\n\
         area[\"name\"=\"{name}\"][\"admin_level\"=\"8\"]->.searchArea;\n\
         (\n\
         \x20 node[\"leisure\"=\"park\"](area.searchArea);\n\
         \x20 way[\"leisure\"=\"park\"](area.searchArea);\n\
         \x20 relation[\"leisure\"=\"park\"](area.searchArea);\n\
         );\n\
         out body;\n\
         >;\n\
         out skel qt;\n"
    )
}
