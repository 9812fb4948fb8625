//! Line-oriented compiler for filter documents.

use lootlog_data::models::{Influence, Rarity};
use serde::Serialize;
use strsim::levenshtein;

use super::ast::{
    Comparison, FlagField, InfluenceMode, Modifier, NumericField, Predicate, Rgba, Rule,
    SocketMode, SocketSpec, TextField, Visibility,
};
use super::error::{FilterError, FilterResult, FilterWarning, ParseError, ParseWarning};
use super::lexer::{
    detach_operator, normalize_whitespace, split_arguments, split_quoted_arguments,
    strip_inline_comment,
};

/// Parsing stops once more than this many errors have been collected.
pub const MAX_ERRORS: usize = 100;

/// Maximum Levenshtein distance to suggest a keyword.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Characters allowed in a socket group token.
const SOCKET_ALPHABET: &str = "0123456RGBWDA";
/// Largest socket count an item can have.
const MAX_SOCKETS: u32 = 6;

/// Action keywords.
pub const MODIFIER_KEYWORDS: [&str; 11] = [
    "SetBackgroundColor",
    "SetBorderColor",
    "SetTextColor",
    "SetFontSize",
    "PlayAlertSound",
    "PlayAlertSoundPositional",
    "CustomAlertSound",
    "DisableDropSound",
    "EnableDropSound",
    "MinimapIcon",
    "PlayEffect",
];

const MINIMAP_COLOURS: [&str; 11] = [
    "Red", "Green", "Blue", "Brown", "White", "Yellow", "Cyan", "Grey", "Orange", "Pink",
    "Purple",
];

const MINIMAP_SHAPES: [&str; 12] = [
    "Circle",
    "Diamond",
    "Hexagon",
    "Square",
    "Star",
    "Triangle",
    "Cross",
    "Moon",
    "Raindrop",
    "Kite",
    "Pentagon",
    "UpsideDownHouse",
];

/// Classification of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    Empty,
    Comment,
    /// `Show`, `Hide` or `Continue`.
    Visibility,
    Filter,
    Modifier,
    Error,
}

/// Output of [`FilterParser::parse`].
///
/// Parsing never fails outright: a document with errors still yields every
/// rule that could be built, and the diagnostics say what was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub rules: Vec<Rule>,
    pub errors: Vec<ParseError>,
    pub warnings: Vec<ParseWarning>,
    /// One entry per processed line, indexed by 0-based line number.
    pub line_kinds: Vec<LineKind>,
    /// True if parsing stopped early after too many errors.
    pub aborted: bool,
}

impl ParseResult {
    /// Returns true if there were no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compiler for filter documents.
///
/// # Example
///
/// ```
/// use lootlog_engine::filter::FilterParser;
///
/// let result = FilterParser::parse("Show\nItemLevel >= 80\nSetFontSize 45\n");
/// assert!(result.is_ok());
/// assert_eq!(result.rules.len(), 1);
/// assert_eq!(result.rules[0].filters.len(), 1);
/// ```
pub struct FilterParser {
    result: ParseResult,
    current: Option<Rule>,
}

enum Keyword {
    Filter(&'static str),
    Modifier(&'static str),
}

impl FilterParser {
    /// Compiles a filter document.
    pub fn parse(text: &str) -> ParseResult {
        let mut parser = Self {
            result: ParseResult::default(),
            current: None,
        };

        for (line_no, raw) in text.lines().enumerate() {
            let kind = match parser.parse_line(line_no, raw) {
                Ok(kind) => kind,
                Err(error) => {
                    parser.result.errors.push(ParseError {
                        line: line_no,
                        error,
                    });
                    LineKind::Error
                }
            };
            parser.result.line_kinds.push(kind);

            if parser.result.errors.len() > MAX_ERRORS {
                tracing::debug!(line = line_no, "too many errors, not a filter document");
                parser.result.aborted = true;
                break;
            }
        }

        parser.close_rule();
        tracing::debug!(
            rules = parser.result.rules.len(),
            errors = parser.result.errors.len(),
            warnings = parser.result.warnings.len(),
            "compiled filter document"
        );
        parser.result
    }

    fn close_rule(&mut self) {
        if let Some(rule) = self.current.take() {
            self.result.rules.push(rule);
        }
    }

    fn warn(&mut self, line: usize, warning: FilterWarning) {
        self.result.warnings.push(ParseWarning { line, warning });
    }

    fn parse_line(&mut self, line_no: usize, raw: &str) -> FilterResult<LineKind> {
        let normalized = normalize_whitespace(raw);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Ok(LineKind::Empty);
        }
        if trimmed.starts_with('#') {
            return Ok(LineKind::Comment);
        }

        let code = strip_inline_comment(trimmed).trim();
        let (keyword, rest) = match code.split_once(' ') {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (code, ""),
        };

        match keyword {
            "Show" | "Hide" => {
                if !rest.is_empty() {
                    return Err(FilterError::argument_count(
                        keyword,
                        "no arguments",
                        split_arguments(rest).len(),
                    ));
                }
                let visibility = if keyword == "Show" {
                    Visibility::Show
                } else {
                    Visibility::Hide
                };
                self.close_rule();
                self.current = Some(Rule::new(visibility, line_no));
                Ok(LineKind::Visibility)
            }
            "Continue" => {
                if !rest.is_empty() {
                    return Err(FilterError::argument_count(
                        keyword,
                        "no arguments",
                        split_arguments(rest).len(),
                    ));
                }
                let mut rule = self
                    .current
                    .take()
                    .ok_or(FilterError::ContinueOutsideRule)?;
                rule.continues = true;
                rule.source_lines.push(line_no);
                self.result.rules.push(rule);
                Ok(LineKind::Visibility)
            }
            _ => match lookup_keyword(keyword) {
                Some(Keyword::Filter(keyword)) => {
                    self.require_rule(keyword)?;
                    let predicate = parse_predicate(keyword, rest)?;
                    if let Some(rule) = self.current.as_mut() {
                        rule.filters.push(predicate);
                        rule.source_lines.push(line_no);
                    }
                    Ok(LineKind::Filter)
                }
                Some(Keyword::Modifier(keyword)) => {
                    self.require_rule(keyword)?;
                    let modifier = parse_modifier(keyword, rest)?;
                    self.add_modifier(line_no, modifier);
                    Ok(LineKind::Modifier)
                }
                None => Err(FilterError::unknown_keyword(keyword, suggest_keyword(keyword))),
            },
        }
    }

    fn require_rule(&self, keyword: &str) -> FilterResult<()> {
        if self.current.is_none() {
            return Err(FilterError::NoOpenRule {
                keyword: keyword.to_string(),
            });
        }
        Ok(())
    }

    fn add_modifier(&mut self, line_no: usize, modifier: Modifier) {
        let Some(rule) = self.current.as_mut() else {
            return;
        };

        let warning = if modifier.is_sound() && rule.modifiers.iter().any(Modifier::is_sound) {
            Some(FilterWarning::MultipleSounds {
                keyword: modifier.keyword().to_string(),
            })
        } else if !modifier.is_sound()
            && rule.modifiers.iter().any(|m| m.keyword() == modifier.keyword())
        {
            Some(FilterWarning::DuplicateModifier {
                keyword: modifier.keyword().to_string(),
            })
        } else {
            None
        };

        rule.modifiers.push(modifier);
        rule.source_lines.push(line_no);
        if let Some(warning) = warning {
            self.warn(line_no, warning);
        }
    }
}

// ==================== Keywords ====================

/// All filter condition keywords.
pub fn filter_keywords() -> impl Iterator<Item = &'static str> {
    NumericField::ALL
        .into_iter()
        .map(NumericField::keyword)
        .chain(TextField::ALL.into_iter().map(TextField::keyword))
        .chain(FlagField::ALL.into_iter().map(FlagField::keyword))
        .chain([
            "AreaLevel",
            "Rarity",
            "Prophecy",
            "Sockets",
            "SocketGroup",
            "HasExplicitMod",
            "HasInfluence",
        ])
}

fn lookup_keyword(word: &str) -> Option<Keyword> {
    if let Some(keyword) = filter_keywords().find(|k| *k == word) {
        return Some(Keyword::Filter(keyword));
    }
    MODIFIER_KEYWORDS
        .into_iter()
        .find(|k| *k == word)
        .map(Keyword::Modifier)
}

fn suggest_keyword(word: &str) -> Option<String> {
    let (best, distance) = filter_keywords()
        .chain(MODIFIER_KEYWORDS)
        .chain(["Show", "Hide", "Continue"])
        .map(|k| (k, levenshtein(word, k)))
        .min_by_key(|(_, d)| *d)?;

    (distance > 0 && distance <= MAX_SUGGESTION_DISTANCE).then(|| best.to_string())
}

// ==================== Argument helpers ====================

fn parse_number(token: &str) -> FilterResult<u32> {
    token
        .parse::<u32>()
        .map_err(|_| FilterError::invalid_number(token))
}

fn parse_operator(token: &str) -> FilterResult<Comparison> {
    Comparison::from_token(token).ok_or_else(|| FilterError::invalid_operator(token))
}

fn is_operator(token: &str) -> bool {
    Comparison::from_token(token).is_some()
}

/// Splits `[op] value` arguments: one token means an implicit `=`.
fn operator_and_value(keyword: &str, rest: &str) -> FilterResult<(Comparison, String)> {
    let tokens = detach_operator(split_arguments(rest));
    match tokens.as_slice() {
        [] => Err(FilterError::end_of_line(keyword)),
        [op] if is_operator(op) => Err(FilterError::end_of_line(keyword)),
        [value] => Ok((Comparison::Equal, value.clone())),
        [op, value] => Ok((parse_operator(op)?, value.clone())),
        other => Err(FilterError::argument_count(
            keyword,
            "an optional operator and one value",
            other.len(),
        )),
    }
}

/// Splits an optional leading operator off a token list.
fn leading_operator(tokens: &mut Vec<String>) -> FilterResult<Option<Comparison>> {
    match tokens.first() {
        Some(first) if is_operator(first) => {
            let op = parse_operator(&tokens.remove(0))?;
            Ok(Some(op))
        }
        _ => Ok(None),
    }
}

fn quoted_tokens(rest: &str) -> FilterResult<Vec<String>> {
    let split = split_quoted_arguments(rest);
    if split.unterminated {
        return Err(FilterError::UnterminatedString);
    }
    Ok(split.tokens)
}

/// Parses a string list, where a leading `==` asks for exact matches.
fn string_list(keyword: &str, rest: &str) -> FilterResult<(bool, Vec<String>)> {
    let mut tokens = detach_operator(quoted_tokens(rest)?);
    let exact = match leading_operator(&mut tokens)? {
        None | Some(Comparison::Equal) => false,
        Some(Comparison::ExactEqual) => true,
        Some(op) => return Err(FilterError::invalid_operator(op.symbol())),
    };
    if tokens.is_empty() {
        return Err(FilterError::end_of_line(keyword));
    }
    Ok((exact, tokens))
}

fn parse_bool(keyword: &str, rest: &str) -> FilterResult<bool> {
    let mut tokens = detach_operator(split_arguments(rest));
    match leading_operator(&mut tokens)? {
        None | Some(Comparison::Equal) | Some(Comparison::ExactEqual) => {}
        Some(op) => return Err(FilterError::invalid_operator(op.symbol())),
    }
    match tokens.as_slice() {
        [] => Err(FilterError::end_of_line(keyword)),
        [value] if value.eq_ignore_ascii_case("true") => Ok(true),
        [value] if value.eq_ignore_ascii_case("false") => Ok(false),
        [value] => Err(FilterError::InvalidBoolean {
            token: value.clone(),
        }),
        other => Err(FilterError::argument_count(keyword, "True or False", other.len())),
    }
}

fn parse_rarity(token: &str) -> FilterResult<Rarity> {
    token.parse::<Rarity>().map_err(|_| FilterError::InvalidRarity {
        token: token.to_string(),
    })
}

/// Parses `[count]colours`, e.g. `5GGG`, `3R`, `RGB` or `6`.
///
/// A count followed by a single colour asks for that many sockets of that
/// colour; otherwise the count constrains the group size.
pub fn parse_socket_spec(token: &str) -> FilterResult<SocketSpec> {
    let invalid = || FilterError::InvalidSocketSpec {
        token: token.to_string(),
    };
    if token.is_empty() || !token.chars().all(|c| SOCKET_ALPHABET.contains(c)) {
        return Err(invalid());
    }

    let split = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, colours) = token.split_at(split);
    if colours.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let count = if digits.is_empty() {
        None
    } else {
        Some(digits.parse::<u32>().map_err(|_| invalid())?)
    };
    if count.is_some_and(|n| n > MAX_SOCKETS) {
        return Err(invalid());
    }

    Ok(match (count, colours.chars().count()) {
        (Some(n), 1) => SocketSpec {
            count: None,
            colours: colours.repeat(n as usize),
        },
        _ => SocketSpec {
            count,
            colours: colours.to_string(),
        },
    })
}

fn parse_colour(keyword: &str, rest: &str) -> FilterResult<Rgba> {
    let tokens = split_arguments(rest);
    if !(3..=4).contains(&tokens.len()) {
        return Err(FilterError::argument_count(keyword, "3 or 4 values", tokens.len()));
    }
    let mut parts = [0u8; 4];
    for (slot, token) in parts.iter_mut().zip(&tokens) {
        let value = parse_number(token)?;
        *slot = u8::try_from(value).map_err(|_| FilterError::InvalidColor {
            token: token.clone(),
        })?;
    }
    let alpha = (tokens.len() == 4).then_some(parts[3]);
    Ok(Rgba::new(parts[0], parts[1], parts[2], alpha))
}

fn one_of(keyword: &str, token: &str, allowed: &[&str]) -> FilterResult<String> {
    allowed
        .iter()
        .find(|a| **a == token)
        .map(|a| a.to_string())
        .ok_or_else(|| FilterError::invalid_argument(keyword, token))
}

// ==================== Predicates ====================

fn parse_predicate(keyword: &'static str, rest: &str) -> FilterResult<Predicate> {
    if let Some(field) = NumericField::ALL.into_iter().find(|f| f.keyword() == keyword) {
        let (op, value) = operator_and_value(keyword, rest)?;
        return Ok(Predicate::Numeric {
            field,
            op,
            value: parse_number(&value)?,
        });
    }
    if let Some(field) = TextField::ALL.into_iter().find(|f| f.keyword() == keyword) {
        let (exact, values) = string_list(keyword, rest)?;
        return Ok(Predicate::Text {
            field,
            exact,
            values,
        });
    }
    if let Some(field) = FlagField::ALL.into_iter().find(|f| f.keyword() == keyword) {
        return Ok(Predicate::Flag {
            field,
            value: parse_bool(keyword, rest)?,
        });
    }

    match keyword {
        "AreaLevel" => {
            let (op, value) = operator_and_value(keyword, rest)?;
            Ok(Predicate::AreaLevel {
                op,
                value: parse_number(&value)?,
            })
        }
        "Rarity" => parse_rarity_predicate(keyword, rest),
        "Prophecy" => {
            let (exact, values) = string_list(keyword, rest)?;
            Ok(Predicate::Prophecy { exact, values })
        }
        "Sockets" => parse_sockets(keyword, rest, SocketMode::Unlinked),
        "SocketGroup" => parse_sockets(keyword, rest, SocketMode::Linked),
        "HasExplicitMod" => parse_explicit_mods(keyword, rest),
        "HasInfluence" => parse_influence(keyword, rest),
        other => Err(FilterError::unknown_keyword(other, None)),
    }
}

fn parse_rarity_predicate(keyword: &str, rest: &str) -> FilterResult<Predicate> {
    let mut tokens = detach_operator(split_arguments(rest));
    match leading_operator(&mut tokens)? {
        Some(op) => match tokens.as_slice() {
            [] => Err(FilterError::end_of_line(keyword)),
            [value] => Ok(Predicate::Rarity {
                op,
                value: parse_rarity(value)?,
            }),
            other => Err(FilterError::argument_count(
                keyword,
                "one rarity after an operator",
                other.len() + 1,
            )),
        },
        None if tokens.is_empty() => Err(FilterError::end_of_line(keyword)),
        None => {
            let rarities = tokens
                .iter()
                .map(|t| parse_rarity(t))
                .collect::<FilterResult<Vec<_>>>()?;
            Ok(Predicate::RarityIn(rarities))
        }
    }
}

fn parse_sockets(keyword: &str, rest: &str, mode: SocketMode) -> FilterResult<Predicate> {
    let mut tokens = detach_operator(quoted_tokens(rest)?);
    let op = leading_operator(&mut tokens)?.unwrap_or(Comparison::Equal);
    if tokens.is_empty() {
        return Err(FilterError::end_of_line(keyword));
    }
    let specs = tokens
        .iter()
        .map(|t| parse_socket_spec(t))
        .collect::<FilterResult<Vec<_>>>()?;
    Ok(Predicate::Sockets { mode, op, specs })
}

fn parse_explicit_mods(keyword: &str, rest: &str) -> FilterResult<Predicate> {
    let mut tokens = detach_operator(quoted_tokens(rest)?);
    let (op, threshold) = match leading_operator(&mut tokens)? {
        Some(op) => {
            if tokens.is_empty() {
                return Err(FilterError::end_of_line(keyword));
            }
            (op, parse_number(&tokens.remove(0))?)
        }
        None => (Comparison::Greater, 0),
    };
    if tokens.is_empty() {
        return Err(FilterError::end_of_line(keyword));
    }
    Ok(Predicate::HasExplicitMod {
        op,
        threshold,
        mods: tokens,
    })
}

fn parse_influence(keyword: &str, rest: &str) -> FilterResult<Predicate> {
    let mut tokens = quoted_tokens(rest)?;
    let op = leading_operator(&mut tokens)?;
    if tokens.is_empty() {
        return Err(FilterError::end_of_line(keyword));
    }
    if let [only] = tokens.as_slice() {
        if only.eq_ignore_ascii_case("none") {
            return Ok(Predicate::HasInfluence {
                mode: InfluenceMode::None,
                influences: Vec::new(),
            });
        }
    }

    let influences = tokens
        .iter()
        .map(|t| {
            t.parse::<Influence>()
                .map_err(|token| FilterError::InvalidInfluence { token })
        })
        .collect::<FilterResult<Vec<_>>>()?;
    let mode = if op == Some(Comparison::ExactEqual) {
        InfluenceMode::All
    } else {
        InfluenceMode::Any
    };
    Ok(Predicate::HasInfluence { mode, influences })
}

// ==================== Modifiers ====================

fn parse_modifier(keyword: &'static str, rest: &str) -> FilterResult<Modifier> {
    match keyword {
        "SetBackgroundColor" => Ok(Modifier::BackgroundColor(parse_colour(keyword, rest)?)),
        "SetBorderColor" => Ok(Modifier::BorderColor(parse_colour(keyword, rest)?)),
        "SetTextColor" => Ok(Modifier::TextColor(parse_colour(keyword, rest)?)),
        "SetFontSize" => match split_arguments(rest).as_slice() {
            [] => Err(FilterError::end_of_line(keyword)),
            [size] => Ok(Modifier::FontSize(super::ast::remap_font_size(
                parse_number(size)?,
            ))),
            other => Err(FilterError::argument_count(keyword, "one value", other.len())),
        },
        "PlayAlertSound" | "PlayAlertSoundPositional" => {
            let positional = keyword == "PlayAlertSoundPositional";
            match split_arguments(rest).as_slice() {
                [] => Err(FilterError::end_of_line(keyword)),
                [sound] => Ok(Modifier::AlertSound {
                    sound: sound.clone(),
                    volume: None,
                    positional,
                }),
                [sound, volume] => {
                    let volume = parse_number(volume)?;
                    if volume > 300 {
                        return Err(FilterError::invalid_argument(keyword, volume.to_string()));
                    }
                    Ok(Modifier::AlertSound {
                        sound: sound.clone(),
                        volume: Some(volume),
                        positional,
                    })
                }
                other => Err(FilterError::argument_count(
                    keyword,
                    "a sound and an optional volume",
                    other.len(),
                )),
            }
        }
        "CustomAlertSound" => match quoted_tokens(rest)?.as_slice() {
            [] => Err(FilterError::end_of_line(keyword)),
            [file] => Ok(Modifier::CustomAlertSound { file: file.clone() }),
            other => Err(FilterError::argument_count(keyword, "one file name", other.len())),
        },
        "DisableDropSound" | "EnableDropSound" => {
            let found = split_arguments(rest).len();
            if found != 0 {
                return Err(FilterError::argument_count(keyword, "no arguments", found));
            }
            Ok(if keyword == "DisableDropSound" {
                Modifier::DisableDropSound
            } else {
                Modifier::EnableDropSound
            })
        }
        "MinimapIcon" => parse_minimap_icon(keyword, rest),
        "PlayEffect" => match split_arguments(rest).as_slice() {
            [] => Err(FilterError::end_of_line(keyword)),
            [colour] => Ok(Modifier::PlayEffect {
                colour: effect_colour(keyword, colour)?,
                temporary: false,
            }),
            [colour, temp] if temp == "Temp" => Ok(Modifier::PlayEffect {
                colour: effect_colour(keyword, colour)?,
                temporary: true,
            }),
            [_, other] => Err(FilterError::invalid_argument(keyword, other.as_str())),
            other => Err(FilterError::argument_count(
                keyword,
                "a colour and an optional Temp",
                other.len(),
            )),
        },
        other => Err(FilterError::unknown_keyword(other, None)),
    }
}

fn effect_colour(keyword: &str, token: &str) -> FilterResult<String> {
    if token == "None" {
        return Ok(token.to_string());
    }
    one_of(keyword, token, &MINIMAP_COLOURS)
}

fn parse_minimap_icon(keyword: &str, rest: &str) -> FilterResult<Modifier> {
    let tokens = split_arguments(rest);
    match tokens.as_slice() {
        [] => Err(FilterError::end_of_line(keyword)),
        [size] if size == "-1" => Ok(Modifier::MinimapIcon {
            size: -1,
            colour: None,
            shape: None,
        }),
        [size, colour, shape] => {
            let size = match size.as_str() {
                "0" => 0,
                "1" => 1,
                "2" => 2,
                other => return Err(FilterError::invalid_argument(keyword, other)),
            };
            Ok(Modifier::MinimapIcon {
                size,
                colour: Some(one_of(keyword, colour, &MINIMAP_COLOURS)?),
                shape: Some(one_of(keyword, shape, &MINIMAP_SHAPES)?),
            })
        }
        other => Err(FilterError::argument_count(
            keyword,
            "-1 or a size, colour and shape",
            other.len(),
        )),
    }
}
