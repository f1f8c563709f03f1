/// Reflexive pronoun marker carried by some German verb entries.
pub const REFLEXIVE_PREFIX: &str = "sich ";

/// Maps a raw list entry to the key used for every membership test and sort.
///
/// Only the first matching prefix is removed, and only once. The rest of the
/// entry is left untouched (no case folding, no second trim), so
/// `"sich  waschen"` keys as `" waschen"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    prefixes: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { prefixes: vec![REFLEXIVE_PREFIX.to_string()] }
    }
}

impl Normalizer {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { prefixes: prefixes.into_iter().map(Into::into).collect() }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn key<'a>(&self, raw: &'a str) -> &'a str {
        self.prefixes
            .iter()
            .find_map(|p| raw.strip_prefix(p.as_str()))
            .unwrap_or(raw)
    }
}
