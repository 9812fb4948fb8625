//! Filters command implementation.
//!
//! Saves versions of filter documents into the archive and lists them.
//! A saved version never changes; saving again adds a newer version.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use lootlog_engine::{FilterParser, SavedFilter};

use super::config::Config;
use super::{CommandContext, CommandError, Result};
use crate::output::{
    format_check_table, format_filters_json, format_filters_table, format_saved_filter,
};

/// Options for the filters save command.
#[derive(Debug)]
pub struct FiltersSaveOptions {
    /// Filter document to save.
    pub file: PathBuf,
    /// Profile to save under (default: from config).
    pub profile: Option<String>,
    /// Save even if the document has errors.
    pub force: bool,
}

/// Options for the filters list command.
#[derive(Debug, Default)]
pub struct FiltersListOptions {
    /// Only list this profile.
    pub profile: Option<String>,
}

/// Outcome of a save, for output.
#[derive(Debug)]
pub struct SaveResult {
    /// Profile saved under.
    pub profile: String,
    /// Version key of the new document.
    pub version: String,
    /// Save time.
    pub saved_at: DateTime<Utc>,
    /// Number of rules compiled.
    pub rules: usize,
    /// Number of parse errors.
    pub errors: usize,
}

/// Executes the filters save command.
///
/// # Errors
///
/// Returns `CommandError::InvalidFilter` if the document has errors and
/// `force` is not set.
pub fn execute_save(ctx: &CommandContext, opts: &FiltersSaveOptions, config: &Config) -> Result<()> {
    let text = fs::read_to_string(&opts.file)?;
    let parsed = FilterParser::parse(&text);

    if !parsed.is_ok() && !opts.force {
        if !ctx.json_output && !ctx.quiet {
            eprint!("{}", format_check_table(&opts.file, &parsed, ctx.use_colors));
        }
        return Err(CommandError::InvalidFilter {
            path: opts.file.clone(),
            errors: parsed.errors.len(),
        });
    }

    let profile = opts.profile.as_deref().unwrap_or(config.profile());
    let store = config.filter_store()?;
    let mut archive = store.load_or_default()?;

    let saved_at = Utc::now();
    let version = archive.save(profile, saved_at, text);
    store.save(&archive)?;
    tracing::debug!(profile, %version, "saved filter version");

    let result = SaveResult {
        profile: profile.to_string(),
        version,
        saved_at,
        rules: parsed.rules.len(),
        errors: parsed.errors.len(),
    };

    if ctx.json_output {
        println!("{}", format_saved_filter(&result)?);
    } else if !ctx.quiet {
        println!(
            "Saved {} as version {} of '{}' ({} rules)",
            opts.file.display(),
            result.version,
            result.profile,
            result.rules
        );
    }

    Ok(())
}

/// Executes the filters list command.
pub fn execute_list(ctx: &CommandContext, opts: &FiltersListOptions, config: &Config) -> Result<()> {
    let archive = config.filter_store()?.load_or_default()?;
    let filters = select_filters(archive.iter(), opts.profile.as_deref());

    if ctx.json_output {
        println!("{}", format_filters_json(&filters)?);
    } else if !ctx.quiet {
        print!("{}", format_filters_table(&filters, ctx.use_colors));
    }

    Ok(())
}

/// Selects saved filters, sorted by profile then save time.
fn select_filters<'a>(
    filters: impl Iterator<Item = &'a SavedFilter>,
    profile: Option<&str>,
) -> Vec<&'a SavedFilter> {
    let mut selected: Vec<_> = filters
        .filter(|f| profile.map_or(true, |p| f.profile == p))
        .collect();
    selected.sort_by(|a, b| (&a.profile, a.saved_at).cmp(&(&b.profile, b.saved_at)));
    selected
}
