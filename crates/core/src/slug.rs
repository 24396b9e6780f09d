//! Problem-name to external-link derivation.

/// Base of every derived problem link.
pub const PROBLEM_BASE_URL: &str = "https://leetcode.com/problems/";

/// Normalize a problem name into a URL path segment.
///
/// Lower-cases the name, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, and strips leading/trailing hyphens.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if in_gap && !slug.is_empty() {
                slug.push('-');
            }
            in_gap = false;
            slug.push(ch);
        } else {
            in_gap = true;
        }
    }

    slug
}

/// External link for a problem name.
#[must_use]
pub fn problem_url(name: &str) -> String {
    format!("{PROBLEM_BASE_URL}{}/", slugify(name))
}
