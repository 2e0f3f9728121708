//! Option continuation lines (`색상: 빨강`) that refine the previous item.

use std::sync::LazyLock;

use regex::Regex;

static LABEL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^:：\s][^:：]*?)\s*[:：]\s*(\S.*?)\s*$")
        .expect("Invalid option line regex")
});

/// Split `label: value` (ASCII or full-width colon) into its parts.
pub fn parse_option_line(text: &str) -> Option<(&str, &str)> {
    let caps = LABEL_VALUE.captures(text)?;
    let label = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str();
    Some((label, value))
}
