//! URL slugs derived from post titles.

/// Maximum length of a slug filled in automatically while the user types.
pub const AUTO_SLUG_MAX_LEN: usize = 50;

/// Lower-case `text` and collapse every run of characters outside
/// `[a-z0-9]` into a single hyphen, without leading or trailing hyphens.
///
/// Non-ASCII letters are treated as separators, not transliterated.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// [`slugify`] cut to at most `max_len` characters.
pub fn slugify_truncated(text: &str, max_len: usize) -> String {
    let slug = slugify(text);
    let cut: String = slug.chars().take(max_len).collect();
    cut.trim_end_matches('-').to_string()
}

/// Whether `slug` is URL-safe: `[a-z0-9-]+` with no hyphen at either end.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
