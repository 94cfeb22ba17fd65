use once_cell::sync::Lazy;
use regex::Regex;

static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_line(line: &str) -> String {
    WS_RE.replace_all(line.trim(), " ").into_owned()
}

/// Split page text into normalized lines, dropping those left empty.
pub fn clean_lines(page_text: &str) -> Vec<String> {
    page_text
        .split('\n')
        .map(normalize_line)
        .filter(|l| !l.is_empty())
        .collect()
}
