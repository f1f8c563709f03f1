//! Collation comparators.
//!
//! Sorting never consults process locale state: callers build a comparator
//! once and pass it to [`crate::engine::run`].

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::{LanguageIdentifier, Locale};
use icu_locid_transform::{LocaleExpander, TransformResult};

use crate::error::ReconError;

/// String ordering used for the output file and the duplicate listing.
pub trait Collation {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<C: Collation + ?Sized> Collation for &C {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        (**self).compare(a, b)
    }
}

// ---------------------------------------------------------------------------
// Locale collation (ICU4X)
// ---------------------------------------------------------------------------

/// Locale-aware collator backed by ICU4X compiled collation data.
pub struct LocaleCollator {
    id: String,
    locale: Locale,
    collator: Collator,
}

impl LocaleCollator {
    /// Build a collator from a BCP-47 (`de-DE`) or POSIX (`de_DE.UTF-8`) id.
    pub fn new(id: &str) -> Result<Self, ReconError> {
        let locale = parse_locale(id)?;
        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new())
            .map_err(|e| ReconError::Locale { id: id.to_string(), message: e.to_string() })?;
        tracing::debug!(id, locale = %locale, "collator ready");
        Ok(Self { id: id.to_string(), locale, collator })
    }

    /// The identifier as given by the caller.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl Collation for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for LocaleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCollator")
            .field("id", &self.id)
            .field("locale", &self.locale.to_string())
            .finish()
    }
}

/// Parse a locale id, accepting POSIX spellings.
///
/// `de_DE.UTF-8` and `de_DE@euro` become `de-DE`. The root locale (`und`,
/// empty, `C`, `POSIX`) is rejected since it carries no language, and so is
/// a language CLDR has no data for (`xx`, `zz_ZZ.UTF-8`), which would
/// otherwise sort with root collation.
pub fn parse_locale(id: &str) -> Result<Locale, ReconError> {
    let err = |message: String| ReconError::Locale { id: id.to_string(), message };

    let trimmed = id.trim();
    let base = trimmed
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return Err(err("no language given".into()));
    }

    let locale = base.parse::<Locale>().map_err(|e| err(e.to_string()))?;
    if locale.id.language.is_empty() {
        return Err(err("no language given".into()));
    }
    if !is_known_language(&locale) {
        return Err(err(format!("no locale data for language '{}'", locale.id.language)));
    }
    Ok(locale)
}

/// Whether CLDR likely-subtags data knows the locale's language.
///
/// Maximizing a bare language only succeeds for languages CLDR carries;
/// an unknown language comes back unmodified.
fn is_known_language(locale: &Locale) -> bool {
    let mut bare = LanguageIdentifier::from(locale.id.language);
    let expander = LocaleExpander::new_extended();
    matches!(expander.maximize(&mut bare), TransformResult::Modified)
}

// ---------------------------------------------------------------------------
// Code point order
// ---------------------------------------------------------------------------

/// Plain Unicode scalar order, i.e. `str::cmp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointCollation;

impl Collation for CodepointCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}
