//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Scripts branch on these values, so codes never change meaning.
//!
//! | Code | Description                                   |
//! |------|-----------------------------------------------|
//! | 0    | Success                                       |
//! | 1    | General error (unspecified)                   |
//! | 2    | CLI usage error (bad args)                    |
//! | 3    | Input list unreadable or output unwritable    |
//! | 4    | Config file does not parse or validate        |
//! | 5    | Collation locale unavailable                  |

use vocab_recon::ReconError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
/// clap exits with this code on its own.
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

/// File read or write failed.
pub const EXIT_IO: u8 = 3;

/// Config parse or validation failed.
pub const EXIT_CONFIG: u8 = 4;

/// Collation locale cannot be parsed or loaded.
pub const EXIT_LOCALE: u8 = 5;

/// Map an engine error to its exit code.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::Io { .. } => EXIT_IO,
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_CONFIG,
        ReconError::Locale { .. } => EXIT_LOCALE,
        ReconError::Serialize(_) => EXIT_ERROR,
    }
}
