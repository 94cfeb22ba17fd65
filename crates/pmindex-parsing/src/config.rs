use pmindex_core::MAX_TITLE_CHARS;

use crate::ParsingError;

/// Shortest normalized line accepted as a title.
pub const DEFAULT_MIN_TITLE_CHARS: usize = 4;

/// Configuration for the page indexing pipeline.
///
/// Use [`ParsingConfigBuilder`] to override the title length bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingConfig {
    /// Minimum title length in characters, inclusive (default: 4).
    pub(crate) min_title_chars: usize,
    /// Maximum title length in characters, inclusive (default: 120).
    /// Also the truncation length of the fallback title.
    pub(crate) max_title_chars: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            min_title_chars: DEFAULT_MIN_TITLE_CHARS,
            max_title_chars: MAX_TITLE_CHARS,
        }
    }
}

impl ParsingConfig {
    pub fn min_title_chars(&self) -> usize {
        self.min_title_chars
    }

    pub fn max_title_chars(&self) -> usize {
        self.max_title_chars
    }
}

/// Builder for [`ParsingConfig`].
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    min_title_chars: Option<usize>,
    max_title_chars: Option<usize>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_title_chars(mut self, n: usize) -> Self {
        self.min_title_chars = Some(n);
        self
    }

    pub fn max_title_chars(mut self, n: usize) -> Self {
        self.max_title_chars = Some(n);
        self
    }

    /// Validate and build. The maximum may not exceed the record title cap
    /// and must not be below the minimum.
    pub fn build(self) -> Result<ParsingConfig, ParsingError> {
        let defaults = ParsingConfig::default();
        let min = self.min_title_chars.unwrap_or(defaults.min_title_chars);
        let max = self.max_title_chars.unwrap_or(defaults.max_title_chars);

        if max == 0 || max > MAX_TITLE_CHARS {
            return Err(ParsingError::InvalidConfig(format!(
                "max_title_chars must be in 1..={MAX_TITLE_CHARS}, got {max}"
            )));
        }
        if min > max {
            return Err(ParsingError::InvalidConfig(format!(
                "min_title_chars ({min}) exceeds max_title_chars ({max})"
            )));
        }

        Ok(ParsingConfig {
            min_title_chars: min,
            max_title_chars: max,
        })
    }
}
