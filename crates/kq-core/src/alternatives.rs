/// Number of `delimiter`-separated segments in `raw`, at least 1
pub fn count_alternatives(raw: &str, delimiter: Option<char>) -> usize {
    match delimiter {
        Some(delim) => raw.split(delim).count(),
        None => 1,
    }
}

/// Segment `index` of `raw`, wrapping indices past the last segment.
/// Without a delimiter the raw text is returned whatever the index.
pub fn select_alternative(raw: &str, delimiter: Option<char>, index: usize) -> &str {
    let Some(delim) = delimiter else {
        return raw;
    };

    let count = count_alternatives(raw, delimiter);
    raw.split(delim).nth(index % count).unwrap_or(raw)
}

/// Raw field text together with the alternative delimiter active when it was parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alternatives {
    raw: String,
    delimiter: Option<char>,
}

impl Alternatives {
    pub fn new(raw: impl Into<String>, delimiter: Option<char>) -> Self {
        Self {
            raw: raw.into(),
            delimiter,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn count(&self) -> usize {
        count_alternatives(&self.raw, self.delimiter)
    }

    pub fn select(&self, index: usize) -> &str {
        select_alternative(&self.raw, self.delimiter, index)
    }

    /// All alternatives in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        (0..self.count()).map(|index| self.select(index))
    }
}
