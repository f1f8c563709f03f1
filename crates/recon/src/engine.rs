use crate::collate::Collation;
use crate::config::FilterConfig;
use crate::evidence::compute_summary;
use crate::model::{Duplicate, FilterInput, FilterMeta, FilterResult, VerbEntry};

/// Split the candidates into known duplicates and new entries, each sorted
/// by `collation` on the normalized key.
pub fn run(config: &FilterConfig, input: &FilterInput, collation: &dyn Collation) -> FilterResult {
    let (mut duplicates, mut unique) = partition(input);

    // Stable sorts: equal keys keep file order.
    unique.sort_by(|a, b| collation.compare(&a.key, &b.key));
    duplicates.sort_by(|a, b| collation.compare(&a.entry.key, &b.entry.key));

    let summary = compute_summary(input, &duplicates, &unique);
    tracing::info!(
        candidates = summary.candidate_total,
        duplicates = summary.duplicates_removed,
        unique = summary.unique_written,
        "partitioned {} list",
        input.candidate_label
    );

    FilterResult {
        meta: FilterMeta {
            config_name: config.name.clone(),
            locale: config.locale.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        duplicates,
        unique,
    }
}

/// Candidates in file order, split by membership in the known set.
pub fn partition(input: &FilterInput) -> (Vec<Duplicate>, Vec<VerbEntry>) {
    let mut duplicates = Vec::new();
    let mut unique = Vec::new();

    for entry in &input.candidates {
        match input.known.source_of(&entry.key) {
            Some(source) => duplicates.push(Duplicate {
                entry: entry.clone(),
                source: source.to_string(),
            }),
            None => unique.push(entry.clone()),
        }
    }

    (duplicates, unique)
}
