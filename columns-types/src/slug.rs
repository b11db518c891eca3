//! Slug derivation for breakpoint set, preset and breakpoint identifiers.

/// Separator placed between alphanumeric runs.
pub const SLUG_SEPARATOR: char = '-';

/// Derives a URL-safe slug from a human label.
///
/// The label is lower-cased, every run of non-alphanumeric characters becomes a
/// single separator, and leading/trailing separators are dropped. The result
/// depends only on `name`.
///
/// ```
/// assert_eq!(columns_types::slugify("Breakpoints 2"), "breakpoints-2");
/// assert_eq!(columns_types::slugify("  Hero -- Wide!"), "hero-wide");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SLUG_SEPARATOR);
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}
