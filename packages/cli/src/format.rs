//! Display formatting for report output.
//!
//! Presentation only; nothing here feeds back into the computation.

/// Title-cases a place name for display ("lexington" → "Lexington").
#[must_use]
pub fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a square-footage value with a lowercase magnitude suffix.
///
/// Billions and millions keep one decimal ("1.2 b", "3.4 m");
/// thousands and below round to whole numbers ("320 k", "987").
#[must_use]
pub fn format_sq_ft(n: f64) -> String {
    let abs = n.abs();
    if abs >= 1e9 {
        format!("{:.1} b", n / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1} m", n / 1e6)
    } else if abs >= 1e3 {
        format!("{} k", (n / 1e3).round())
    } else {
        format!("{}", n.round())
    }
}
