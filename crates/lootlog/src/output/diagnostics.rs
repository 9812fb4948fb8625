//! Filter diagnostics output formatting.

use std::path::Path;

use lootlog_engine::ParseResult;
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput {
    pub file: String,
    pub rules: usize,
    pub errors: Vec<DiagnosticOutput>,
    pub warnings: Vec<DiagnosticOutput>,
    pub aborted: bool,
}

/// JSON output structure for a single diagnostic.
#[derive(Serialize)]
pub struct DiagnosticOutput {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// Formats a parse result as JSON.
pub fn format_check_json(file: &Path, result: &ParseResult) -> Result<String, serde_json::Error> {
    let output = CheckOutput {
        file: file.display().to_string(),
        rules: result.rules.len(),
        errors: result
            .errors
            .iter()
            .map(|e| DiagnosticOutput {
                line: e.line + 1,
                message: e.error.to_string(),
            })
            .collect(),
        warnings: result
            .warnings
            .iter()
            .map(|w| DiagnosticOutput {
                line: w.line + 1,
                message: w.warning.to_string(),
            })
            .collect(),
        aborted: result.aborted,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a parse result as a report, errors before warnings.
pub fn format_check_table(file: &Path, result: &ParseResult, use_colors: bool) -> String {
    let mut output = String::new();

    for error in &result.errors {
        let label = if use_colors {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        };
        output.push_str(&format!("{}:{}: {}: {}\n", file.display(), error.line + 1, label, error.error));
    }

    for warning in &result.warnings {
        let label = if use_colors {
            "warning".yellow().to_string()
        } else {
            "warning".to_string()
        };
        output.push_str(&format!(
            "{}:{}: {}: {}\n",
            file.display(),
            warning.line + 1,
            label,
            warning.warning
        ));
    }

    if result.aborted {
        output.push_str("Stopped after too many errors.\n");
    }

    let summary = format!(
        "{}: {} rule(s), {} error(s), {} warning(s)",
        file.display(),
        result.rules.len(),
        result.errors.len(),
        result.warnings.len()
    );
    if use_colors && result.is_ok() {
        output.push_str(&format!("{}\n", summary.green()));
    } else {
        output.push_str(&summary);
        output.push('\n');
    }

    output
}
