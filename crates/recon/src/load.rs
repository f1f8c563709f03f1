//! Line-list parsing and file loading.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{FilterConfig, ListConfig};
use crate::error::ReconError;
use crate::model::{FilterInput, KnownList, KnownSet, VerbEntry};
use crate::normalize::Normalizer;

/// Trimmed, non-blank lines in file order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).map(str::trim).filter(|l| !l.is_empty())
}

/// Normalized keys of a known list.
pub fn parse_known(text: &str, normalizer: &Normalizer) -> HashSet<String> {
    non_blank_lines(text)
        .map(|line| normalizer.key(line).to_string())
        .collect()
}

/// Candidate entries in file order, repeats kept.
pub fn parse_entries(text: &str, normalizer: &Normalizer) -> Vec<VerbEntry> {
    non_blank_lines(text)
        .map(|line| VerbEntry::new(line, normalizer))
        .collect()
}

/// Resolve `path` against `base_dir` unless it is absolute.
pub fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Read a list file. Non-UTF-8 content is reported as an IO error.
pub fn read_list(path: &Path) -> Result<String, ReconError> {
    std::fs::read_to_string(path).map_err(|e| ReconError::io(path, e))
}

/// Read and normalize every list named by `config`, relative to `base_dir`.
pub fn load_input(config: &FilterConfig, base_dir: &Path) -> Result<FilterInput, ReconError> {
    let normalizer = config.normalizer();

    let mut lists = Vec::with_capacity(config.known.len());
    for list in &config.known {
        lists.push(load_known(list, base_dir, &normalizer)?);
    }

    let candidate_path = resolve(base_dir, &config.candidate.file);
    let candidates = parse_entries(&read_list(&candidate_path)?, &normalizer);
    tracing::debug!(
        label = %config.candidate.label,
        path = %candidate_path.display(),
        entries = candidates.len(),
        "loaded candidate list"
    );

    Ok(FilterInput {
        known: KnownSet::new(lists),
        candidate_label: config.candidate.label.clone(),
        candidates,
    })
}

fn load_known(
    list: &ListConfig,
    base_dir: &Path,
    normalizer: &Normalizer,
) -> Result<KnownList, ReconError> {
    let path = resolve(base_dir, &list.file);
    let keys = parse_known(&read_list(&path)?, normalizer);
    tracing::debug!(label = %list.label, path = %path.display(), keys = keys.len(), "loaded known list");
    Ok(KnownList {
        label: list.label.clone(),
        title: list.title().to_string(),
        keys,
    })
}

/// Reject an output path that names one of the input lists.
///
/// Paths are compared as resolved, and again canonicalized when both exist,
/// so `./lists/b1.txt` and `lists/b1.txt` collide.
pub fn ensure_output_distinct(
    config: &FilterConfig,
    base_dir: &Path,
    output: &Path,
) -> Result<(), ReconError> {
    let output_canon = std::fs::canonicalize(output).ok();
    for list in config.known.iter().chain(std::iter::once(&config.candidate)) {
        let input = resolve(base_dir, &list.file);
        let same = input == output
            || match (&output_canon, std::fs::canonicalize(&input).ok()) {
                (Some(a), Some(b)) => *a == b,
                _ => false,
            };
        if same {
            return Err(ReconError::ConfigValidation(format!(
                "list '{}': output '{}' would overwrite an input",
                list.label,
                output.display()
            )));
        }
    }
    Ok(())
}

/// Write the output file body, creating or truncating it.
pub fn write_output(path: &Path, contents: &str) -> Result<(), ReconError> {
    std::fs::write(path, contents).map_err(|e| ReconError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_skipped_and_trimmed() {
        let text = "  gehen \n\n\t\nsich freuen\r\n   \nlaufen";
        let lines: Vec<_> = non_blank_lines(text).collect();
        assert_eq!(lines, vec!["gehen", "sich freuen", "laufen"]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let entries = parse_entries("gehen\rsich freuen\r\nlaufen\n", &Normalizer::default());
        let raws: Vec<_> = entries.iter().map(|e| e.raw.as_str()).collect();
        assert_eq!(raws, vec!["gehen", "sich freuen", "laufen"]);
    }

    #[test]
    fn known_keys_are_normalized_and_deduplicated() {
        let keys = parse_known("sich freuen\nfreuen\ngehen\n", &Normalizer::default());
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("freuen"));
        assert!(keys.contains("gehen"));
    }

    #[test]
    fn entries_keep_raw_form_and_repeats() {
        let entries = parse_entries("sich ärgern\nlaufen\nlaufen\n", &Normalizer::default());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].raw, "sich ärgern");
        assert_eq!(entries[0].key, "ärgern");
        assert_eq!(entries[1], entries[2]);
    }

    #[test]
    fn blank_only_text_is_empty() {
        assert!(parse_known("\n  \n\t\n", &Normalizer::default()).is_empty());
        assert!(parse_entries("", &Normalizer::default()).is_empty());
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let base = Path::new("/data");
        assert_eq!(resolve(base, Path::new("a.txt")), PathBuf::from("/data/a.txt"));
        assert_eq!(resolve(base, Path::new("/tmp/a.txt")), PathBuf::from("/tmp/a.txt"));
    }

    #[test]
    fn output_naming_an_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("verbs_b1.txt"), "laufen\n").unwrap();
        let config = FilterConfig::default();

        let clash = dir.path().join("verbs_b1.txt");
        let err = ensure_output_distinct(&config, dir.path(), &clash).unwrap_err();
        assert!(err.to_string().contains("would overwrite an input"));

        let dotted = dir.path().join(".").join("verbs_b1.txt");
        assert!(ensure_output_distinct(&config, dir.path(), &dotted).is_err());

        let fresh = dir.path().join("verbs_b1_only.txt");
        ensure_output_distinct(&config, dir.path(), &fresh).unwrap();
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_list(&path).unwrap_err();
        assert!(matches!(err, ReconError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn load_input_resolves_against_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("verbs_a1.txt"), "gehen\n").unwrap();
        std::fs::write(dir.path().join("verbs_a2_only.txt"), "sich freuen\n").unwrap();
        std::fs::write(dir.path().join("verbs_b1.txt"), "gehen\nlaufen\n").unwrap();

        let input = load_input(&FilterConfig::default(), dir.path()).unwrap();
        assert_eq!(input.known.lists().len(), 2);
        assert_eq!(input.known.combined_len(), 2);
        assert_eq!(input.candidate_label, "B1");
        assert_eq!(input.candidates.len(), 2);
    }
}
