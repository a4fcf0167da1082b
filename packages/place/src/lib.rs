#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Place name normalization.
//!
//! User-supplied place names arrive in many forms:
//! - Full jurisdiction names: `"Lexington-Fayette Urban County"`
//! - With a state qualifier: `"Lexington city, Kentucky"`
//! - Merged governments: `"Louisville/Jefferson County Metro"`
//!
//! This module canonicalizes them into a single lower-cased form that
//! serves both as the geodata query key and as the census row matching
//! key. The same normalization is applied to census display names, so
//! equality on normalized strings is the matching contract.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for administrative suffix tokens, matched as whole words when
/// preceded by whitespace. Multi-word phrases come first so that e.g.
/// "consolidated city" wins over a bare "city".
static ADMIN_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\s(?:urban county|metropolitan government|consolidated city|municipality|city|town|village)\b",
    )
    .expect("valid regex")
});

/// Regex for a trailing state qualifier (", kentucky" plus anything
/// after it, e.g. a ZIP or county tail).
static STATE_QUALIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s), kentucky.*$").expect("valid regex"));

/// Regex for runs of interior whitespace left behind by token removal.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizes a raw place name for matching and query embedding.
///
/// Lower-cases, converts hyphens to spaces, collapses repeated
/// whitespace, strips administrative suffix tokens and a trailing
/// state qualifier, and trims. Never fails; an empty input normalizes
/// to an empty string.
///
/// Normalization is idempotent: applying it to its own output yields
/// the same string. Two orderings make that hold. Hyphens are converted
/// and whitespace collapsed before the suffix pass, so a token hidden
/// behind a hyphen (`"Park-City"`) or split by a double space
/// (`"urban  county"`) is visible on the first pass. The suffix pass
/// itself runs to a fixpoint, because removing one token can make two
/// remaining words adjacent and form another
/// (`"urban city county"` → `"urban county"` → gone).
#[must_use]
pub fn normalize(raw: &str) -> String {
    let spaced = raw.to_lowercase().replace('-', " ");
    let mut current = WHITESPACE_RE.replace_all(&spaced, " ").into_owned();

    loop {
        let stripped = ADMIN_SUFFIX_RE.replace_all(&current, "");
        let stripped = STATE_QUALIFIER_RE.replace_all(&stripped, "");
        let next = WHITESPACE_RE.replace_all(&stripped, " ").into_owned();
        if next == current {
            break;
        }
        current = next;
    }

    current.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_urban_county_with_state() {
        assert_eq!(
            normalize("Lexington-Fayette Urban County, Kentucky"),
            "lexington fayette"
        );
    }

    #[test]
    fn normalizes_plain_city_row() {
        assert_eq!(normalize("Lexington city, Kentucky"), "lexington");
    }

    #[test]
    fn merged_government_keeps_non_suffix_words() {
        // "county" alone and "metro" are not suffix tokens.
        assert_eq!(
            normalize("Louisville/Jefferson County Metro"),
            "louisville/jefferson county metro"
        );
    }

    #[test]
    fn strips_multiple_suffix_tokens_without_double_spaces() {
        assert_eq!(
            normalize("Frankfort city consolidated city"),
            "frankfort"
        );
        assert!(!normalize("Bowling Green city town Kentucky").contains("  "));
    }

    #[test]
    fn double_space_inside_multi_word_token_strips_on_first_pass() {
        assert_eq!(normalize("Lexington urban  county"), "lexington");
    }

    #[test]
    fn token_removal_runs_until_no_token_remains() {
        // Removing "city" makes "urban" and "county" adjacent.
        assert_eq!(normalize("Lexington urban city county"), "lexington");
    }

    #[test]
    fn suffix_token_at_start_is_kept() {
        // Tokens are only stripped when preceded by whitespace.
        assert_eq!(normalize("City of Ashland"), "city of ashland");
    }

    #[test]
    fn handles_empty_and_whitespace_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in [
            "Lexington-Fayette Urban County, Kentucky",
            "Louisville/Jefferson County Metro",
            "Georgetown city, Kentucky",
            "Park-City",
            "Paducah",
            "covington  city",
            "Lexington urban  county",
            "Lexington urban city county",
            "",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
