//! Header text normalization.

/// Normalizes header text for exact comparison: trimmed, lowercased, with
/// whitespace runs collapsed to one space.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Form used for containment checks: normalized with all whitespace removed,
/// so `상품 명` and `상품명` compare equal.
pub fn compact_header(raw: &str) -> String {
    normalize_header(raw)
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}
