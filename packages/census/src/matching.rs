//! Matching a normalized place name against population rows.
//!
//! Exact-match only: each row's display name is normalized with the
//! same rules as the requested place, and the first row whose
//! normalized name is string-equal wins. Substring matching exists
//! purely for diagnostics — "lexington" is also a substring of
//! "new lexington", so it must never silently pick a value.

use greenspace_map_models::PopulationRecord;
use greenspace_map_place::normalize;

/// Finds the population row whose normalized display name exactly
/// equals `normalized_target`.
///
/// Returns the first exact match in row order, or `None`. The target
/// must already be normalized; row display names are normalized here.
#[must_use]
pub fn match_population<'a>(
    normalized_target: &str,
    rows: &'a [PopulationRecord],
) -> Option<&'a PopulationRecord> {
    rows.iter()
        .find(|row| normalize(&row.display_name) == normalized_target)
}

/// Lists rows whose normalized display name merely contains the
/// target, for diagnostic logging when no exact match exists.
///
/// Never use this to pick a population value; substring matches are
/// frequently wrong.
#[must_use]
pub fn substring_candidates<'a>(
    normalized_target: &str,
    rows: &'a [PopulationRecord],
) -> Vec<&'a PopulationRecord> {
    if normalized_target.is_empty() {
        return Vec::new();
    }

    rows.iter()
        .filter(|row| normalize(&row.display_name).contains(normalized_target))
        .collect()
}
