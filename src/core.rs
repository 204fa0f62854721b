/// Trait describing a multi-pattern substring membership strategy.
pub trait SubstringSearch {
    /// Short human-readable name used in reports.
    fn name(&self) -> &'static str;

    /// Return the patterns that occur in `text`, preserving their order in
    /// `patterns` (duplicates included).
    fn search<'p>(&self, text: &str, patterns: &[&'p str]) -> Vec<&'p str>;

    /// Convenience wrapper returning owned strings.
    fn search_owned(&self, text: &str, patterns: &[&str]) -> Vec<String>
    where
        Self: Sized,
    {
        self.search(text, patterns)
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// How `HashSetLookup` fingerprints a byte window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintKind {
    /// Hash every window from scratch with a fixed-seed keyed hasher.
    #[default]
    Keyed,
    /// Wrapping u64 polynomial hash (base 257) read from prefix tables.
    Polynomial,
}

impl std::str::FromStr for FingerprintKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyed" => Ok(FingerprintKind::Keyed),
            "polynomial" | "poly" | "rolling" => Ok(FingerprintKind::Polynomial),
            other => Err(format!("unknown fingerprint kind: {other}")),
        }
    }
}

/// Configuration for `HashSetLookup`.
#[derive(Debug, Clone, Default)]
pub struct HashSetLookupConfig {
    pub fingerprint: FingerprintKind,
}

/// Length in bytes of the longest pattern, or 0 when there are none.
pub fn max_pattern_len(patterns: &[&str]) -> usize {
    patterns.iter().map(|p| p.len()).max().unwrap_or(0)
}

/// Number of windows of length `1..=max_len` in a text of `text_len` bytes.
/// Lengths longer than the text contribute nothing.
pub fn expected_windows(text_len: usize, max_len: usize) -> usize {
    (1..=max_len.min(text_len)).map(|k| text_len - k + 1).sum()
}
