//! Slug derivation for organization names.

/// Derive a URL-friendly slug from a display name.
///
/// Alphanumerics are lowercased; every run of other characters collapses
/// into a single hyphen. Leading and trailing separators are dropped, so
/// the result is non-empty whenever the name contains any alphanumeric.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
