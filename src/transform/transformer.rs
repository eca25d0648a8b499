//! Filename transformer
//!
//! Matches a filename against the input pattern of a compiled scheme and
//! renders the output pattern with the extracted values.

use std::collections::HashMap;
use std::str::FromStr;

use log::{debug, trace};
use serde::Deserialize;

use crate::constants::EXTENSION_SEPARATOR;
use crate::errors::ApplyError;
use crate::pattern::{CompiledSpec, Pattern, Token};

/// Values extracted from one filename, keyed by variable name
pub type Bindings = HashMap<String, String>;

/// How literal text of the input pattern is checked while matching
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every literal must be present at the cursor and nothing may be left over
    #[default]
    Strict,
    /// Literals are skipped by length without looking at the text
    Lenient,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(MatchMode::Strict),
            "lenient" => Ok(MatchMode::Lenient),
            _ => Err(format!("Unknown match mode: {s}")),
        }
    }
}

/// Splits a filename into stem and extension at the last `.`
///
/// The extension keeps its leading dot. A name without a dot has an empty
/// extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind(EXTENSION_SEPARATOR) {
        Some(index) => filename.split_at(index),
        None => (filename, ""),
    }
}

/// Extracts variable values from a stem with a greedy left-to-right scan
///
/// A variable followed by a literal takes everything up to the first
/// occurrence of that literal; a variable at the end of the pattern takes the
/// rest of the stem. Positions in errors are byte offsets into `stem`.
///
/// # Errors
/// In [`MatchMode::Strict`]:
/// * [`ApplyError::PatternMismatch`] if a literal is missing at the cursor or a delimiter never occurs
/// * [`ApplyError::TrailingInput`] if text is left after the last token
///
/// In both modes [`ApplyError::AdjacentVariables`] is returned for a pattern
/// with two variables in a row, which a compiled scheme never contains.
pub fn extract(pattern: &Pattern, stem: &str, mode: MatchMode) -> Result<Bindings, ApplyError> {
    let tokens = pattern.tokens();
    let mut bindings = Bindings::new();
    let mut index = 0;
    let mut position = 0;

    while let Some(token) = tokens.get(position) {
        match (token, tokens.get(position + 1)) {
            (Token::Literal(text), _) => {
                index = consume_literal(stem, index, text, mode)?;
                position += 1;
            }
            (Token::Variable(name), None) => {
                bindings.insert(name.clone(), stem[index..].to_string());
                index = stem.len();
                position += 1;
            }
            (Token::Variable(name), Some(Token::Literal(delimiter))) => {
                let rest = &stem[index..];
                let (value, next) = match rest.find(delimiter.as_str()) {
                    Some(offset) => (&rest[..offset], index + offset + delimiter.len()),
                    None if mode == MatchMode::Strict => {
                        return Err(ApplyError::PatternMismatch {
                            expected: delimiter.clone(),
                            position: index,
                        });
                    }
                    None => (rest, stem.len()),
                };
                trace!("Bound '{name}' to '{value}'");
                bindings.insert(name.clone(), value.to_string());
                index = next;
                position += 2;
            }
            (Token::Variable(first), Some(Token::Variable(second))) => {
                return Err(ApplyError::AdjacentVariables {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }

    if mode == MatchMode::Strict && index < stem.len() {
        return Err(ApplyError::TrailingInput {
            position: index,
            remainder: stem[index..].to_string(),
        });
    }

    Ok(bindings)
}

fn consume_literal(
    stem: &str,
    index: usize,
    literal: &str,
    mode: MatchMode,
) -> Result<usize, ApplyError> {
    match mode {
        MatchMode::Strict if stem[index..].starts_with(literal) => Ok(index + literal.len()),
        MatchMode::Strict => Err(ApplyError::PatternMismatch {
            expected: literal.to_string(),
            position: index,
        }),
        MatchMode::Lenient => Ok(advance_chars(stem, index, literal.chars().count())),
    }
}

/// Moves `index` forward by `count` characters, stopping at the end of `stem`
fn advance_chars(stem: &str, index: usize, count: usize) -> usize {
    stem[index..]
        .char_indices()
        .nth(count)
        .map_or(stem.len(), |(offset, _)| index + offset)
}

/// Renders a pattern by concatenating literals and bound values
///
/// # Errors
/// Returns [`ApplyError::UnboundVariable`] if a variable has no value
pub fn render(pattern: &Pattern, bindings: &Bindings) -> Result<String, ApplyError> {
    pattern.iter().try_fold(String::new(), |mut rendered, token| -> Result<String, ApplyError> {
        match token {
            Token::Literal(text) => rendered.push_str(text),
            Token::Variable(name) => rendered.push_str(
                bindings
                    .get(name)
                    .ok_or_else(|| ApplyError::UnboundVariable(name.clone()))?,
            ),
        }
        Ok(rendered)
    })
}

/// Computes the new relative path for a filename
///
/// The extension is split off, the stem is matched against the input
/// pattern, the output pattern is rendered and the file extension is
/// appended unchanged. The result uses `/` between directory segments.
///
/// # Errors
/// Returns an [`ApplyError`] if the filename does not fit the input pattern
pub fn apply(spec: &CompiledSpec, filename: &str, mode: MatchMode) -> Result<String, ApplyError> {
    let (stem, extension) = split_extension(filename);
    let bindings = extract(spec.input(), stem, mode)?;
    let mut rendered = render(spec.output(), &bindings)?;
    rendered.push_str(extension);

    debug!("Transformed '{filename}' into '{rendered}'");

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PatternLine;
    use crate::pattern::{compile, tokenize};

    fn input(line: &str) -> Pattern {
        tokenize(line, PatternLine::Input).unwrap()
    }

    fn bound<'a>(bindings: &'a Bindings, name: &str) -> &'a str {
        bindings.get(name).map(String::as_str).unwrap()
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("Foo - 05.mkv"), ("Foo - 05", ".mkv"));
        assert_eq!(split_extension("show.s01.e02.MP4"), ("show.s01.e02", ".MP4"));
        assert_eq!(split_extension("no extension"), ("no extension", ""));
        assert_eq!(split_extension(".mkv"), ("", ".mkv"));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
    }

    #[test]
    fn test_trailing_variable_takes_the_rest() {
        let bindings = extract(&input("<show> - <episode>"), "Foo - 05", MatchMode::Strict).unwrap();
        assert_eq!(bound(&bindings, "show"), "Foo");
        assert_eq!(bound(&bindings, "episode"), "05");
    }

    #[test]
    fn test_delimiter_match_is_first_occurrence() {
        let bindings =
            extract(&input("<show> - <title>"), "A - B - C", MatchMode::Strict).unwrap();
        assert_eq!(bound(&bindings, "show"), "A");
        assert_eq!(bound(&bindings, "title"), "B - C");
    }

    #[test]
    fn test_leading_literal() {
        let bindings =
            extract(&input("[<group>] <title>"), "[subs] Pilot", MatchMode::Strict).unwrap();
        assert_eq!(bound(&bindings, "group"), "subs");
        assert_eq!(bound(&bindings, "title"), "Pilot");
    }

    #[test]
    fn test_empty_value_between_delimiters() {
        let bindings = extract(&input("<a>-<b>-<c>"), "x--z", MatchMode::Strict).unwrap();
        assert_eq!(bound(&bindings, "a"), "x");
        assert_eq!(bound(&bindings, "b"), "");
        assert_eq!(bound(&bindings, "c"), "z");
    }

    #[test]
    fn test_duplicate_variable_keeps_last_value() {
        let bindings = extract(&input("<n>-<n>"), "1-2", MatchMode::Strict).unwrap();
        assert_eq!(bound(&bindings, "n"), "2");
    }

    #[test]
    fn test_non_ascii_stem() {
        let bindings =
            extract(&input("<série> – <épisode>"), "Amélie – 03", MatchMode::Strict).unwrap();
        assert_eq!(bound(&bindings, "série"), "Amélie");
        assert_eq!(bound(&bindings, "épisode"), "03");
    }

    #[test]
    fn test_strict_literal_mismatch() {
        let result = extract(&input("[<group>] <title>"), "subs Pilot", MatchMode::Strict);
        assert_eq!(
            result,
            Err(ApplyError::PatternMismatch {
                expected: "[".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_strict_missing_delimiter() {
        let result = extract(&input("<show> - <episode>"), "Foo 05", MatchMode::Strict);
        assert_eq!(
            result,
            Err(ApplyError::PatternMismatch {
                expected: " - ".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_strict_trailing_input() {
        let result = extract(&input("<show> - <episode> END"), "Foo - 05 END extra", MatchMode::Strict);
        assert_eq!(
            result,
            Err(ApplyError::TrailingInput {
                position: 12,
                remainder: " extra".to_string(),
            })
        );
    }

    #[test]
    fn test_lenient_skips_literals_by_length() {
        // The leading literal is skipped without being checked
        let bindings =
            extract(&input("[<group>] <title>"), "subs] Pilot", MatchMode::Lenient).unwrap();
        assert_eq!(bound(&bindings, "group"), "ubs");
        assert_eq!(bound(&bindings, "title"), "Pilot");
    }

    #[test]
    fn test_lenient_missing_delimiter_takes_the_rest() {
        let bindings =
            extract(&input("<show> - <episode>"), "Foo 05", MatchMode::Lenient).unwrap();
        assert_eq!(bound(&bindings, "show"), "Foo 05");
        assert_eq!(bound(&bindings, "episode"), "");
    }

    #[test]
    fn test_lenient_cursor_never_splits_characters() {
        let bindings = extract(&input("ab<rest>"), "éé-x", MatchMode::Lenient).unwrap();
        assert_eq!(bound(&bindings, "rest"), "-x");

        let bindings = extract(&input("abcdef<rest>"), "é", MatchMode::Lenient).unwrap();
        assert_eq!(bound(&bindings, "rest"), "");
    }

    #[test]
    fn test_adjacent_variables_in_hand_built_pattern() {
        let pattern = Pattern::new(vec![
            Token::Variable("a".to_string()),
            Token::Variable("b".to_string()),
        ]);
        assert_eq!(
            extract(&pattern, "xy", MatchMode::Lenient),
            Err(ApplyError::AdjacentVariables {
                first: "a".to_string(),
                second: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_render_reports_unbound_variable() {
        let pattern = tokenize("<show>/<season>", PatternLine::Output).unwrap();
        let mut bindings = Bindings::new();
        bindings.insert("show".to_string(), "Foo".to_string());

        assert_eq!(
            render(&pattern, &bindings),
            Err(ApplyError::UnboundVariable("season".to_string()))
        );
    }

    #[test]
    fn test_apply_end_to_end() {
        let spec = compile(
            "<show> - <season>x<episode> - <title>\n<show>/Season <season>/<episode> - <title>",
        )
        .unwrap();

        let result = apply(&spec, "Breaking Bad - 1x05 - Pilot.mkv", MatchMode::Strict).unwrap();
        assert_eq!(result, "Breaking Bad/Season 1/05 - Pilot.mkv");
    }

    #[test]
    fn test_apply_keeps_extension_case() {
        let spec = compile("<show> - <episode>\n<show>/<episode>").unwrap();
        assert_eq!(
            apply(&spec, "Foo - 05.MKV", MatchMode::Strict).unwrap(),
            "Foo/05.MKV"
        );
    }

    #[test]
    fn test_apply_escaped_literal_round_trip() {
        let spec = compile("id-\\<x>-<n>\n<n>/\\<x>").unwrap();
        assert_eq!(
            apply(&spec, "id-<x>-7.mkv", MatchMode::Strict).unwrap(),
            "7/<x>.mkv"
        );
    }

    #[test]
    fn test_bound_values_are_not_unescaped() {
        let spec = compile("<show> - <episode>\n<show> <episode>").unwrap();
        assert_eq!(
            apply(&spec, "a\\<b - 1.mkv", MatchMode::Strict).unwrap(),
            "a\\<b 1.mkv"
        );
    }

    #[test]
    fn test_match_mode_from_str() {
        assert_eq!(MatchMode::from_str("strict").unwrap(), MatchMode::Strict);
        assert_eq!(MatchMode::from_str("Lenient").unwrap(), MatchMode::Lenient);
        assert_eq!(
            MatchMode::from_str("fuzzy").unwrap_err(),
            "Unknown match mode: fuzzy"
        );
        assert_eq!(MatchMode::default(), MatchMode::Strict);
    }
}
