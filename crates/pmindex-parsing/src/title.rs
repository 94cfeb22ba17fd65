use crate::config::ParsingConfig;
use crate::text_processing::normalize_line;

/// Pick a representative title for a page.
///
/// Returns the first line that is non-empty after normalization and whose
/// normalized length is within the configured bounds (4..=120 chars by
/// default). If none qualifies, the first line as given is truncated to the
/// maximum length; the fallback is not normalized. An empty slice yields "".
pub fn choose_title<S: AsRef<str>>(lines: &[S]) -> String {
    choose_title_with_config(lines, &ParsingConfig::default())
}

/// Config-aware version of [`choose_title`].
pub fn choose_title_with_config<S: AsRef<str>>(lines: &[S], config: &ParsingConfig) -> String {
    let bounds = config.min_title_chars..=config.max_title_chars;
    for raw in lines {
        let line = normalize_line(raw.as_ref());
        if line.is_empty() {
            continue;
        }
        if bounds.contains(&line.chars().count()) {
            return line;
        }
    }

    lines
        .first()
        .map(|first| first.as_ref().chars().take(config.max_title_chars).collect())
        .unwrap_or_default()
}
