//! Tour feature-list parsing.

/// Split a comma-separated feature string into trimmed, non-empty tokens.
///
/// `"Hotel, Meals, Transport"` becomes `["Hotel", "Meals", "Transport"]`;
/// an empty or all-whitespace input becomes an empty list.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}
