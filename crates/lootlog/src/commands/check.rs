//! Check command implementation.
//!
//! Compiles a filter document and reports every diagnostic with its line.

use std::fs;
use std::path::PathBuf;

use lootlog_engine::FilterParser;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_check_json, format_check_table};

/// Options for the check command.
#[derive(Debug)]
pub struct CheckOptions {
    /// Filter document to check.
    pub file: PathBuf,
}

/// Executes the check command.
///
/// # Errors
///
/// Returns `CommandError::InvalidFilter` after printing the report if the
/// document has errors, so the exit status reflects them.
pub fn execute(ctx: &CommandContext, opts: &CheckOptions) -> Result<()> {
    let text = fs::read_to_string(&opts.file)?;
    let result = FilterParser::parse(&text);

    if ctx.json_output {
        println!("{}", format_check_json(&opts.file, &result)?);
    } else if !ctx.quiet {
        print!("{}", format_check_table(&opts.file, &result, ctx.use_colors));
    }

    if result.is_ok() {
        Ok(())
    } else {
        Err(CommandError::InvalidFilter {
            path: opts.file.clone(),
            errors: result.errors.len(),
        })
    }
}
