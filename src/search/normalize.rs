use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize a title or query for comparison.
///
/// Decomposes (NFKD), strips combining marks, lowercases, turns everything
/// outside `[a-z0-9]` into a space, then collapses and trims whitespace. The
/// output is plain ASCII, so normalizing twice changes nothing.
pub fn normalize_title(s: &str) -> String {
    let mapped: String = s
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { ' ' })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
