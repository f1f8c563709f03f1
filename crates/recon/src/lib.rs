//! `vocab-recon` — Level-list reconciliation engine for vocabulary files.
//!
//! Receives loaded word lists, returns the candidate list split into entries
//! already known at a lower level and entries that are new, each in collation
//! order. File reads live in [`load`]; everything else is pure.

pub mod collate;
pub mod config;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod load;
pub mod model;
pub mod normalize;
pub mod report;

pub use collate::{Collation, CodepointCollation, LocaleCollator};
pub use config::FilterConfig;
pub use engine::run;
pub use error::ReconError;
pub use model::{FilterInput, FilterResult, VerbEntry};
pub use normalize::Normalizer;
