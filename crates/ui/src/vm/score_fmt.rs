/// Render a score the way it appears in the source data: whole numbers
/// without a decimal point, everything else with one decimal.
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

/// CSS percentage for a bar height.
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
