//! `vocab filter` / `vocab validate` — config-driven level-list filtering.

use std::io::Write;
use std::path::{Path, PathBuf};

use vocab_recon::config::DEFAULT_BASE_DIR;
use vocab_recon::load::{ensure_output_distinct, load_input, resolve, write_output};
use vocab_recon::report::{render_json, render_output, render_text};
use vocab_recon::{FilterConfig, LocaleCollator, ReconError};

use crate::exit_codes::EXIT_IO;
use crate::{CliError, FilterArgs};

/// Read and validate a config file. Returns it with the directory its
/// relative paths resolve against.
fn read_config(path: &Path) -> Result<(FilterConfig, PathBuf), CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        CliError::from(ReconError::Io { path: path.to_path_buf(), message: e.to_string() })
            .with_hint("pass an existing .filter.toml with --config")
    })?;
    let config = FilterConfig::from_toml(&text)?;
    let base_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((config, base_dir))
}

pub fn cmd_filter(args: FilterArgs) -> Result<(), CliError> {
    let (config, base_dir) = match args.config {
        Some(ref path) => read_config(path)?,
        None => (
            FilterConfig::default(),
            args.dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR)),
        ),
    };
    let output_path = match args.output {
        Some(ref p) => p.clone(),
        None => resolve(&base_dir, &config.output),
    };
    tracing::debug!(
        config = %config.name,
        base_dir = %base_dir.display(),
        output = %output_path.display(),
        "resolved paths"
    );
    ensure_output_distinct(&config, &base_dir, &output_path)
        .map_err(|e| CliError::from(e).with_hint("choose an --output that is not one of the input lists"))?;

    let collator = LocaleCollator::new(&config.locale)?;

    let input = load_input(&config, &base_dir).map_err(|e| {
        let missing = matches!(e, ReconError::Io { .. });
        let err = CliError::from(e);
        if missing && args.config.is_none() {
            err.with_hint(format!(
                "run from the project root or pass --dir (looked in {})",
                base_dir.display()
            ))
        } else {
            err
        }
    })?;

    let result = vocab_recon::run(&config, &input, &collator);

    if args.dry_run {
        tracing::info!(output = %output_path.display(), "dry run: output not written");
    } else {
        write_output(&output_path, &render_output(&result.unique))?;
        tracing::info!(output = %output_path.display(), entries = result.unique.len(), "wrote output");
    }

    let report = if args.json {
        let mut json = render_json(&result)?;
        json.push('\n');
        json
    } else {
        render_text(&result)
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(report.as_bytes())
        .and_then(|_| handle.flush())
        .map_err(|e| CliError { code: EXIT_IO, message: format!("cannot write report: {e}"), hint: None })?;

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let (config, base_dir) = read_config(&config_path)?;
    LocaleCollator::new(&config.locale)?;

    eprintln!(
        "valid: '{}' with {} known list(s), candidate '{}', locale {}, output {}",
        config.name,
        config.known.len(),
        config.candidate.label,
        config.locale,
        resolve(&base_dir, &config.output).display(),
    );
    Ok(())
}
