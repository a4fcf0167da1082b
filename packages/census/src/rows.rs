//! Parsing of the census tabular response.
//!
//! The population endpoint returns a JSON array of arrays. The first
//! row is a header (discarded); each subsequent row is
//! `[displayName, populationString, ...]` with trailing geography
//! columns this system ignores.

use greenspace_map_models::PopulationRecord;

use crate::CensusError;

/// Parses a tabular census response into population records.
///
/// The header row is discarded. Rows without a display name are
/// skipped. A population string that is missing or fails to parse as a
/// base-10 integer becomes 0, an explicit "unavailable" rather than a
/// failure.
///
/// # Errors
///
/// Returns [`CensusError::Parse`] if the body is not an array of rows.
pub fn parse_population_rows(
    body: &serde_json::Value,
) -> Result<Vec<PopulationRecord>, CensusError> {
    let table = body.as_array().ok_or_else(|| CensusError::Parse {
        message: "Census response is not an array".to_string(),
    })?;

    let mut records = Vec::new();

    // Skip the header row.
    for row in table.iter().skip(1) {
        let Some(columns) = row.as_array() else {
            log::warn!("Skipping non-array census row");
            continue;
        };

        let Some(display_name) = columns.first().and_then(|c| c.as_str()) else {
            log::warn!("Skipping census row without a display name");
            continue;
        };

        let population = columns
            .get(1)
            .and_then(|c| c.as_str())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0);

        records.push(PopulationRecord {
            display_name: display_name.to_string(),
            population,
        });
    }

    Ok(records)
}
