use crate::model::{Duplicate, FilterInput, FilterSummary, ListCount, VerbEntry};

/// Compute summary counts from a partitioned input.
pub fn compute_summary(
    input: &FilterInput,
    duplicates: &[Duplicate],
    unique: &[VerbEntry],
) -> FilterSummary {
    let known = input
        .known
        .lists()
        .iter()
        .map(|l| ListCount {
            label: l.label.clone(),
            title: l.title.clone(),
            count: l.keys.len(),
        })
        .collect();

    let duplicates_by_source = input
        .known
        .lists()
        .iter()
        .map(|l| {
            let n = duplicates.iter().filter(|d| d.source == l.label).count();
            (l.label.clone(), n)
        })
        .collect();

    FilterSummary {
        known,
        combined: input.known.combined_len(),
        candidate_label: input.candidate_label.clone(),
        candidate_total: input.candidates.len(),
        duplicates_removed: duplicates.len(),
        unique_written: unique.len(),
        duplicates_by_source,
    }
}
