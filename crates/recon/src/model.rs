use std::collections::HashSet;

use serde::Serialize;

use crate::normalize::Normalizer;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One non-blank line from a list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbEntry {
    /// Trimmed line, prefix retained.
    pub raw: String,
    /// Normalized form used for membership and ordering.
    pub key: String,
}

impl VerbEntry {
    pub fn new(raw: impl Into<String>, normalizer: &Normalizer) -> Self {
        let raw = raw.into();
        let key = normalizer.key(&raw).to_string();
        Self { raw, key }
    }
}

/// Normalized keys of one lower-level list.
#[derive(Debug, Clone)]
pub struct KnownList {
    /// Attribution label, e.g. `A2`.
    pub label: String,
    /// Count-line label, e.g. `A2-only`.
    pub title: String,
    pub keys: HashSet<String>,
}

/// Known lists in attribution priority order, plus their union.
#[derive(Debug, Clone, Default)]
pub struct KnownSet {
    lists: Vec<KnownList>,
    combined: HashSet<String>,
}

impl KnownSet {
    pub fn new(lists: Vec<KnownList>) -> Self {
        let combined = lists.iter().flat_map(|l| l.keys.iter().cloned()).collect();
        Self { lists, combined }
    }

    pub fn lists(&self) -> &[KnownList] {
        &self.lists
    }

    pub fn combined_len(&self) -> usize {
        self.combined.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.combined.contains(key)
    }

    /// Label of the first list containing `key`.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.lists
            .iter()
            .find(|l| l.keys.contains(key))
            .map(|l| l.label.as_str())
    }
}

/// Everything the engine needs, already read and normalized.
#[derive(Debug, Clone)]
pub struct FilterInput {
    pub known: KnownSet,
    /// Candidate list label, e.g. `B1`.
    pub candidate_label: String,
    /// Candidate entries in file order.
    pub candidates: Vec<VerbEntry>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A candidate entry already present in a known list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    #[serde(flatten)]
    pub entry: VerbEntry,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListCount {
    pub label: String,
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub known: Vec<ListCount>,
    pub combined: usize,
    pub candidate_label: String,
    pub candidate_total: usize,
    pub duplicates_removed: usize,
    pub unique_written: usize,
    /// Duplicate count per source label, in known-list order.
    pub duplicates_by_source: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterMeta {
    pub config_name: String,
    pub locale: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterResult {
    pub meta: FilterMeta,
    pub summary: FilterSummary,
    /// Duplicates in collation order of their keys.
    pub duplicates: Vec<Duplicate>,
    /// Entries to write, in collation order of their keys.
    pub unique: Vec<VerbEntry>,
}
