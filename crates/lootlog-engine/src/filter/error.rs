//! Error and warning types for filter documents.

use std::fmt;

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while parsing or matching a filter document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The first token of a line is not a known keyword.
    #[error("unknown keyword: {keyword}{}", suggestion_suffix(.suggestion))]
    UnknownKeyword {
        /// The unrecognized keyword.
        keyword: String,
        /// The closest known keyword, if any is close enough.
        suggestion: Option<String>,
    },

    /// A condition or action appeared before any `Show`/`Hide` line.
    #[error("{keyword} outside of a Show/Hide block")]
    NoOpenRule {
        /// The keyword that had no rule to attach to.
        keyword: String,
    },

    /// `Continue` appeared with no open rule.
    #[error("Continue outside of a Show/Hide block")]
    ContinueOutsideRule,

    /// A keyword was followed by no usable arguments.
    #[error("unexpected end of line after {keyword}")]
    UnexpectedEndOfLine {
        /// The keyword missing its arguments.
        keyword: String,
    },

    /// A keyword was given the wrong number of arguments.
    #[error("{keyword} expects {expected}, got {found} argument(s)")]
    ArgumentCount {
        /// The keyword.
        keyword: String,
        /// Human readable description of what is accepted.
        expected: &'static str,
        /// How many arguments were found.
        found: usize,
    },

    /// A number was expected.
    #[error("invalid number: {token}")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },

    /// `True` or `False` was expected.
    #[error("expected True or False, got {token}")]
    InvalidBoolean {
        /// The offending token.
        token: String,
    },

    /// A rarity name was expected.
    #[error("invalid rarity: {token}")]
    InvalidRarity {
        /// The offending token.
        token: String,
    },

    /// A comparison operator was expected or is not allowed here.
    #[error("invalid operator: {token}")]
    InvalidOperator {
        /// The offending token.
        token: String,
    },

    /// A quoted string was not closed before the end of the line.
    #[error("unterminated quoted string")]
    UnterminatedString,

    /// A socket group token used characters outside `0123456RGBWDA`.
    #[error("invalid socket group: {token}")]
    InvalidSocketSpec {
        /// The offending token.
        token: String,
    },

    /// An influence name was expected.
    #[error("invalid influence: {token}")]
    InvalidInfluence {
        /// The offending token.
        token: String,
    },

    /// A colour component was outside 0-255.
    #[error("invalid colour component: {token} (expected 0-255)")]
    InvalidColor {
        /// The offending token.
        token: String,
    },

    /// An action argument was not one of the accepted values.
    #[error("invalid argument for {keyword}: {token}")]
    InvalidArgument {
        /// The keyword.
        keyword: String,
        /// The offending token.
        token: String,
    },

    /// A socket filter mode other than linked/unlinked was requested.
    #[error("invalid socket group mode: {mode}")]
    InvalidSocketMode {
        /// The requested mode.
        mode: String,
    },

    /// A compiled filter was matched before its area level was set.
    #[error("area level must be set before matching")]
    AreaLevelNotSet,
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

impl FilterError {
    /// Creates an unknown keyword error.
    pub fn unknown_keyword(keyword: impl Into<String>, suggestion: Option<String>) -> Self {
        FilterError::UnknownKeyword {
            keyword: keyword.into(),
            suggestion,
        }
    }

    /// Creates an unexpected end of line error.
    pub fn end_of_line(keyword: impl Into<String>) -> Self {
        FilterError::UnexpectedEndOfLine {
            keyword: keyword.into(),
        }
    }

    /// Creates an argument count error.
    pub fn argument_count(keyword: impl Into<String>, expected: &'static str, found: usize) -> Self {
        FilterError::ArgumentCount {
            keyword: keyword.into(),
            expected,
            found,
        }
    }

    /// Creates an invalid number error.
    pub fn invalid_number(token: impl Into<String>) -> Self {
        FilterError::InvalidNumber {
            token: token.into(),
        }
    }

    /// Creates an invalid operator error.
    pub fn invalid_operator(token: impl Into<String>) -> Self {
        FilterError::InvalidOperator {
            token: token.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(keyword: impl Into<String>, token: impl Into<String>) -> Self {
        FilterError::InvalidArgument {
            keyword: keyword.into(),
            token: token.into(),
        }
    }
}

/// Benign problems that do not stop a rule from being used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterWarning {
    /// More than one sound action in a rule; only the last takes effect.
    #[error("multiple alert sounds in one block, only the last one ({keyword}) is used")]
    MultipleSounds {
        /// The keyword of the sound that wins.
        keyword: String,
    },

    /// The same style action was set twice in a rule.
    #[error("{keyword} set more than once in one block, only the last value is used")]
    DuplicateModifier {
        /// The repeated keyword.
        keyword: String,
    },
}

/// A parse error tagged with its 0-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 0-based line number.
    pub line: usize,
    /// The error.
    pub error: FilterError,
}

/// A parse warning tagged with its 0-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 0-based line number.
    pub line: usize,
    /// The warning.
    pub warning: FilterWarning,
}

// Displayed line numbers are 1-based, as editors show them.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line + 1, self.error)
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line + 1, self.warning)
    }
}

impl std::error::Error for ParseError {}
