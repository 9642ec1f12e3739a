/// Strip the artifacts the source site leaves in scraped cells: literal
/// square brackets and non-breaking spaces (volby.cz uses U+00A0 as the
/// thousands separator in vote counts).
///
/// Idempotent: cleaning a cleaned value is a no-op.
pub fn clean_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '\u{a0}'))
        .collect()
}
