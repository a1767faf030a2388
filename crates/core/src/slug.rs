//! Blog post slug derivation.

use chrono::Utc;

/// Derive a URL-safe slug from a post title.
///
/// Lowercases the title and collapses every run of non-alphanumeric
/// characters into a single hyphen, trimming hyphens from both ends.
/// An absent or fully non-alphanumeric title falls back to
/// `post-<millis>` so the slug is never empty.
pub fn slugify(title: Option<&str>) -> String {
    let folded = title.map(fold).unwrap_or_default();
    if folded.is_empty() {
        return format!("post-{}", Utc::now().timestamp_millis());
    }
    folded
}

fn fold(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
