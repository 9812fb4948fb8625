//! Match command implementation.
//!
//! Runs items through a filter document, either a file given on the command
//! line or the saved version of a profile in effect at a point in time.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use lootlog_data::models::Item;
use lootlog_engine::filter::Style;
use lootlog_engine::{CompiledFilter, FilterCache};

use super::config::Config;
use super::items::load_items;
use super::{CommandContext, CommandError, Result};
use crate::output::{format_matches_json, format_matches_table};

/// Options for the match command.
#[derive(Debug)]
pub struct MatchOptions {
    /// Items file (`-` for stdin).
    pub items: PathBuf,
    /// Level of the area the items dropped in.
    pub area_level: u32,
    /// Filter document to use instead of the archive.
    pub filter: Option<PathBuf>,
    /// Saved profile to use.
    pub profile: Option<String>,
    /// Point in time whose filter version applies.
    pub at: Option<DateTime<Utc>>,
    /// Only report shown items.
    pub shown: bool,
}

/// How the filter decided one item.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow<'a> {
    /// 0-based position in the input.
    pub position: usize,
    /// The item.
    pub item: &'a Item,
    /// The deciding rule, if any rule matched.
    pub decision: Option<Decision>,
}

/// The deciding rule of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Whether the item is shown.
    pub shown: bool,
    /// Index of the rule.
    pub rule: usize,
    /// 1-based line the rule starts on.
    pub line: usize,
    /// Accumulated style.
    pub style: Style,
}

impl MatchRow<'_> {
    /// Items no rule matched are not shown.
    pub fn is_shown(&self) -> bool {
        self.decision.as_ref().is_some_and(|d| d.shown)
    }
}

/// Executes the match command.
///
/// # Errors
///
/// Returns an error if the items or filter cannot be read, or if no saved
/// filter is in effect for the profile.
pub fn execute(ctx: &CommandContext, opts: &MatchOptions, config: &Config) -> Result<()> {
    let mut filter = resolve_filter(opts, config)?;
    filter.set_area_level(opts.area_level);

    let parsed = filter.parsed();
    if !parsed.is_ok() {
        tracing::warn!(
            version = filter.version(),
            errors = parsed.errors.len(),
            "filter has errors, the affected lines are ignored"
        );
    }

    let items = load_items(&opts.items)?;
    let rows = match_items(&filter, &items, opts.shown)?;

    if ctx.json_output {
        println!(
            "{}",
            format_matches_json(filter.version(), opts.area_level, &rows)?
        );
    } else if !ctx.quiet {
        print!("{}", format_matches_table(&rows, ctx.use_colors));
    }

    Ok(())
}

/// Matches every item, optionally keeping only shown ones.
pub fn match_items<'a>(
    filter: &CompiledFilter,
    items: &'a [Item],
    shown_only: bool,
) -> Result<Vec<MatchRow<'a>>> {
    let mut rows = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let decision = filter.match_item(item)?.map(|m| Decision {
            shown: m.is_shown(),
            rule: m.index,
            line: m.rule.source_lines.first().map_or(0, |l| l + 1),
            style: m.style,
        });
        let row = MatchRow {
            position,
            item,
            decision,
        };
        if !shown_only || row.is_shown() {
            rows.push(row);
        }
    }
    Ok(rows)
}

fn resolve_filter(opts: &MatchOptions, config: &Config) -> Result<CompiledFilter> {
    if let Some(path) = &opts.filter {
        let text = fs::read_to_string(path)?;
        return Ok(CompiledFilter::compile(path.display().to_string(), &text));
    }

    let profile = opts.profile.as_deref().unwrap_or(config.profile());
    let at = opts.at.unwrap_or_else(Utc::now);
    let archive = config.filter_store()?.load_or_default()?;

    let filter = match FilterCache::new().get_compiled_filter(&archive, at, profile) {
        Ok(filter) => filter,
        Err(never) => match never {},
    };
    if filter.version().is_empty() {
        return Err(CommandError::NoFilter {
            profile: profile.to_string(),
        });
    }
    Ok(filter)
}
