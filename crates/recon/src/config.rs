use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ReconError;
use crate::normalize::{Normalizer, REFLEXIVE_PREFIX};

/// Directory the built-in configuration's files live in.
pub const DEFAULT_BASE_DIR: &str = "public/verbs";

/// Collation locale used when a config does not name one.
pub const DEFAULT_LOCALE: &str = "de_DE.UTF-8";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_prefixes")]
    pub strip_prefixes: Vec<String>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Lower-level lists. Order is attribution priority.
    pub known: Vec<ListConfig>,
    pub candidate: ListConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    pub label: String,
    /// Label for the count line. Defaults to `label`.
    #[serde(default)]
    pub title: Option<String>,
    pub file: PathBuf,
}

impl ListConfig {
    fn new(label: &str, title: Option<&str>, file: &str) -> Self {
        Self {
            label: label.into(),
            title: title.map(Into::into),
            file: file.into(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }
}

fn default_name() -> String {
    "German verbs B1".into()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.into()
}

fn default_prefixes() -> Vec<String> {
    vec![REFLEXIVE_PREFIX.into()]
}

fn default_output() -> PathBuf {
    "verbs_b1_only.txt".into()
}

/// A1 and A2-only lists filtering the B1 list.
impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            locale: default_locale(),
            strip_prefixes: default_prefixes(),
            output: default_output(),
            known: vec![
                ListConfig::new("A1", None, "verbs_a1.txt"),
                ListConfig::new("A2", Some("A2-only"), "verbs_a2_only.txt"),
            ],
            candidate: ListConfig::new("B1", None, "verbs_b1.txt"),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl FilterConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: FilterConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.known.is_empty() {
            return Err(ReconError::ConfigValidation(
                "at least one known list is required".into(),
            ));
        }

        let mut labels = HashSet::new();
        for list in self.known.iter().chain(std::iter::once(&self.candidate)) {
            if list.label.trim().is_empty() {
                return Err(ReconError::ConfigValidation("list label must not be empty".into()));
            }
            if list.file.as_os_str().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "list '{}': file must not be empty",
                    list.label
                )));
            }
            if !labels.insert(list.label.as_str()) {
                return Err(ReconError::ConfigValidation(format!(
                    "duplicate list label '{}'",
                    list.label
                )));
            }
            if list.file == self.output {
                return Err(ReconError::ConfigValidation(format!(
                    "list '{}': output '{}' would overwrite an input",
                    list.label,
                    self.output.display()
                )));
            }
        }

        if self.output.as_os_str().is_empty() {
            return Err(ReconError::ConfigValidation("output must not be empty".into()));
        }

        if self.strip_prefixes.iter().any(|p| p.is_empty()) {
            return Err(ReconError::ConfigValidation(
                "strip_prefixes must not contain an empty prefix".into(),
            ));
        }

        Ok(())
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.strip_prefixes.iter().cloned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
name = "French verbs B1"
locale = "fr-FR"
strip_prefixes = ["se ", "s'"]
output = "b1_only.txt"

[[known]]
label = "A1"
file = "a1.txt"

[[known]]
label = "A2"
title = "A2-only"
file = "a2.txt"

[candidate]
label = "B1"
file = "b1.txt"
"#;

    #[test]
    fn parse_valid() {
        let config = FilterConfig::from_toml(VALID).unwrap();
        assert_eq!(config.name, "French verbs B1");
        assert_eq!(config.locale, "fr-FR");
        assert_eq!(config.strip_prefixes, vec!["se ", "s'"]);
        assert_eq!(config.output, PathBuf::from("b1_only.txt"));
        assert_eq!(config.known.len(), 2);
        assert_eq!(config.known[0].title(), "A1");
        assert_eq!(config.known[1].title(), "A2-only");
        assert_eq!(config.candidate.label, "B1");
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let input = r#"
[[known]]
label = "A1"
file = "a1.txt"

[candidate]
label = "B1"
file = "b1.txt"
"#;
        let config = FilterConfig::from_toml(input).unwrap();
        assert_eq!(config.locale, DEFAULT_LOCALE);
        assert_eq!(config.strip_prefixes, vec!["sich "]);
        assert_eq!(config.output, PathBuf::from("verbs_b1_only.txt"));
        assert_eq!(config.normalizer().key("sich freuen"), "freuen");
    }

    #[test]
    fn builtin_default_is_valid() {
        let config = FilterConfig::default();
        config.validate().unwrap();
        let titles: Vec<_> = config.known.iter().map(|l| l.title()).collect();
        assert_eq!(titles, vec!["A1", "A2-only"]);
        assert_eq!(config.candidate.file, PathBuf::from("verbs_b1.txt"));
    }

    #[test]
    fn reject_missing_candidate() {
        let input = r#"
[[known]]
label = "A1"
file = "a1.txt"
"#;
        let err = FilterConfig::from_toml(input).unwrap_err();
        assert!(matches!(err, ReconError::ConfigParse(_)));
    }

    #[test]
    fn reject_no_known_lists() {
        let input = r#"
known = []

[candidate]
label = "B1"
file = "b1.txt"
"#;
        let err = FilterConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("at least one known list"));
    }

    #[test]
    fn reject_duplicate_label() {
        let input = r#"
[[known]]
label = "A1"
file = "a1.txt"

[[known]]
label = "A1"
file = "a2.txt"

[candidate]
label = "B1"
file = "b1.txt"
"#;
        let err = FilterConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("duplicate list label 'A1'"));
    }

    #[test]
    fn reject_output_overwriting_input() {
        let input = r#"
output = "b1.txt"

[[known]]
label = "A1"
file = "a1.txt"

[candidate]
label = "B1"
file = "b1.txt"
"#;
        let err = FilterConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("would overwrite an input"));
    }

    #[test]
    fn reject_empty_prefix() {
        let input = r#"
strip_prefixes = ["sich ", ""]

[[known]]
label = "A1"
file = "a1.txt"

[candidate]
label = "B1"
file = "b1.txt"
"#;
        let err = FilterConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("empty prefix"));
    }

    #[test]
    fn reject_blank_label() {
        let input = r#"
[[known]]
label = "  "
file = "a1.txt"

[candidate]
label = "B1"
file = "b1.txt"
"#;
        let err = FilterConfig::from_toml(input).unwrap_err();
        assert!(matches!(err, ReconError::ConfigValidation(_)));
    }
}
