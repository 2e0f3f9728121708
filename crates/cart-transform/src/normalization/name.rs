//! Product name heuristics: name/spec splitting and embedded code extraction.

use std::sync::LazyLock;

use regex::Regex;

/// `Name (spec)` with nothing after the closing parenthesis.
static TRAILING_PARENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*\(([^()]*)\)\s*$").expect("Invalid trailing parentheses regex")
});

/// `Name [spec]` with nothing after the closing bracket.
static TRAILING_BRACKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*\[([^\[\]]*)\]\s*$").expect("Invalid trailing brackets regex")
});

/// A run of six or more digits wrapped in brackets or parentheses.
static WRAPPED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\[(]\s*(\d{6,})\s*[\])]").expect("Invalid wrapped code regex")
});

/// A run of six or more digits ending the string.
static TRAILING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\d{6,})\s*$").expect("Invalid trailing code regex"));

const SLASH_SEPARATOR: &str = " / ";

/// Split a combined product string into `(name, spec)`.
///
/// Tried in order: a trailing `(spec)`, a trailing `[spec]`, then a
/// `" / "`-separated tail of at most `max_spec_len` characters. A split only
/// applies when both sides are non-empty; otherwise the trimmed input is the
/// name and the spec is empty.
pub fn split_name_spec(raw: &str, max_spec_len: usize) -> (String, String) {
    let raw = raw.trim();

    for pattern in [&*TRAILING_PARENS, &*TRAILING_BRACKETS] {
        if let Some(caps) = pattern.captures(raw) {
            let name = caps[1].trim();
            let spec = caps[2].trim();
            if !name.is_empty() && !spec.is_empty() {
                return (name.to_string(), spec.to_string());
            }
        }
    }

    if raw.contains(SLASH_SEPARATOR) {
        let parts: Vec<&str> = raw
            .split(SLASH_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if let Some((spec, head)) = parts.split_last()
            && !head.is_empty()
            && spec.chars().count() <= max_spec_len
        {
            return (head.join(SLASH_SEPARATOR), (*spec).to_string());
        }
    }

    (raw.to_string(), String::new())
}

/// Pull an embedded product code out of a name.
///
/// Returns the name with the code removed and the code itself, or `None`
/// when no code is present or removing it would leave no name.
pub fn extract_embedded_code(raw: &str) -> Option<(String, String)> {
    let found = WRAPPED_CODE
        .captures(raw)
        .or_else(|| TRAILING_CODE.captures(raw))?;
    let whole = found.get(0)?;
    let code = found.get(1)?.as_str().to_string();

    let mut rest = String::with_capacity(raw.len());
    rest.push_str(&raw[..whole.start()]);
    rest.push(' ');
    rest.push_str(&raw[whole.end()..]);
    let name = collapse_whitespace(&rest);

    if name.is_empty() {
        return None;
    }
    Some((name, code))
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
