//! Template string parser using winnow.
//!
//! Parses message source text into an AST. Handles:
//! - Literal text between actions (a stray closing delimiter is literal)
//! - Actions with configurable delimiters
//! - Field paths, string/number/bool literals, function calls, pipelines
//! - Trim markers: `{{- ` and ` -}}`

use super::ast::*;
use super::error::ParseError;
use crate::types::Delimiters;
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, not, opt, preceded, repeat, separated, terminated};
use winnow::prelude::*;
use winnow::token::{literal, none_of, one_of, take_till, take_while};

/// Parse a template string into an AST.
///
/// # Example
///
/// ```
/// use plural_template::Delimiters;
/// use plural_template::parser::{Segment, parse_template};
///
/// let t = parse_template("You have {{.Count}} items", &Delimiters::default()).unwrap();
/// assert_eq!(t.segments.len(), 3);
/// assert!(matches!(t.segments[1], Segment::Action(_)));
/// ```
pub fn parse_template(input: &str, delims: &Delimiters) -> Result<Template, ParseError> {
    let mut segments = Vec::new();
    let mut remaining = input;
    let mut trim_leading = false;

    while !remaining.is_empty() {
        let Some(start) = remaining.find(delims.left()) else {
            push_literal(&mut segments, remaining, trim_leading);
            break;
        };
        let (text, rest) = remaining.split_at(start);
        push_literal(&mut segments, text, trim_leading);
        remaining = rest;

        if !rest[delims.left().len()..].contains(delims.right()) {
            let (line, column) = calculate_position(input, rest);
            return Err(ParseError::UnclosedAction {
                line,
                column,
                right: delims.right().to_string(),
            });
        }

        match action(&mut remaining, delims) {
            Ok(parsed) => {
                if parsed.trim_before {
                    trim_last_literal(&mut segments);
                }
                segments.push(Segment::Action(parsed.pipeline));
                trim_leading = parsed.trim_after;
            }
            Err(_) => {
                let (line, column) = calculate_position(input, remaining);
                return Err(ParseError::Syntax {
                    line,
                    column,
                    message: describe_failure(remaining, delims),
                });
            }
        }
    }

    Ok(Template { segments })
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let line_start = consumed_str.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed_str[line_start..].chars().count() + 1;
    (line, column)
}

fn describe_failure(remaining: &str, delims: &Delimiters) -> String {
    if remaining.starts_with(delims.right()) {
        return "missing value for action".to_string();
    }
    match remaining.chars().next() {
        Some(c) => format!("unexpected character: '{c}'"),
        None => "unexpected end of input".to_string(),
    }
}

fn push_literal(segments: &mut Vec<Segment>, text: &str, trim_leading: bool) {
    let text = if trim_leading {
        text.trim_start_matches(is_space)
    } else {
        text
    };
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
}

fn trim_last_literal(segments: &mut Vec<Segment>) {
    if let Some(Segment::Literal(text)) = segments.last_mut() {
        let trimmed_len = text.trim_end_matches(is_space).len();
        text.truncate(trimmed_len);
        if text.is_empty() {
            segments.pop();
        }
    }
}

/// An action together with its trim markers.
struct ParsedAction {
    pipeline: Pipeline,
    trim_before: bool,
    trim_after: bool,
}

/// Parse an action: LEFT ['- '] pipeline [' -'] RIGHT
fn action(input: &mut &str, delims: &Delimiters) -> ModalResult<ParsedAction> {
    marker(input, delims.left())?;
    let trim_before = opt(('-', ws1)).parse_next(input)?.is_some();
    ws(input)?;
    let pipeline = pipeline(input)?;
    let trailing = ws(input)?;
    let trim_after = !trailing.is_empty()
        && input
            .strip_prefix('-')
            .is_some_and(|rest| rest.starts_with(delims.right()));
    if trim_after {
        *input = &input[1..];
    }
    marker(input, delims.right())?;

    Ok(ParsedAction {
        pipeline,
        trim_before,
        trim_after,
    })
}

/// Match a delimiter exactly.
fn marker<'i>(input: &mut &'i str, text: &str) -> ModalResult<&'i str> {
    literal(text).parse_next(input)
}

/// Parse commands joined by `|`.
fn pipeline(input: &mut &str) -> ModalResult<Pipeline> {
    separated(1.., command, (ws, '|', ws))
        .map(|commands| Pipeline { commands })
        .parse_next(input)
}

/// Parse a single pipeline stage.
fn command(input: &mut &str) -> ModalResult<Command> {
    alt((call, operand.map(Command::Operand))).parse_next(input)
}

/// Parse a function call: name arg*
fn call(input: &mut &str) -> ModalResult<Command> {
    let name = identifier
        .verify(|name: &str| name != "true" && name != "false")
        .parse_next(input)?;
    let args: Vec<Operand> = repeat(0.., preceded(ws1, operand)).parse_next(input)?;
    Ok(Command::Call {
        name: name.to_string(),
        args,
    })
}

fn operand(input: &mut &str) -> ModalResult<Operand> {
    alt((field, quoted_string, raw_string, number, boolean)).parse_next(input)
}

/// Parse a field path: `.`, `.Name`, `.User.Name`
fn field(input: &mut &str) -> ModalResult<Operand> {
    let Some(first) = preceded('.', opt(identifier)).parse_next(input)? else {
        return Ok(Operand::Field(Vec::new()));
    };
    let rest: Vec<&str> = repeat(0.., preceded('.', identifier)).parse_next(input)?;

    let mut path = Vec::with_capacity(1 + rest.len());
    path.push(first.to_string());
    path.extend(rest.into_iter().map(str::to_string));
    Ok(Operand::Field(path))
}

/// Parse a double-quoted string with `\n \t \" \\` escapes.
fn quoted_string(input: &mut &str) -> ModalResult<Operand> {
    delimited('"', repeat(0.., string_char), '"')
        .map(Operand::String)
        .parse_next(input)
}

fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((
        preceded(
            '\\',
            alt((
                'n'.value('\n'),
                't'.value('\t'),
                '"'.value('"'),
                '\\'.value('\\'),
            )),
        ),
        none_of(['"', '\\']),
    ))
    .parse_next(input)
}

/// Parse a backtick raw string (no escapes).
fn raw_string(input: &mut &str) -> ModalResult<Operand> {
    delimited('`', take_till(0.., '`'), '`')
        .map(|s: &str| Operand::String(s.to_string()))
        .parse_next(input)
}

/// Parse an optionally negative integer.
fn number(input: &mut &str) -> ModalResult<Operand> {
    (opt('-'), digit1)
        .take()
        .try_map(|digits: &str| digits.parse::<i64>())
        .map(Operand::Number)
        .parse_next(input)
}

fn boolean(input: &mut &str) -> ModalResult<Operand> {
    terminated(
        alt(("true".value(true), "false".value(false))),
        not(one_of(is_ident_cont)),
    )
    .map(Operand::Bool)
    .parse_next(input)
}

/// Parse an identifier.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .parse_next(input)
}

/// Whitespace inside actions and the text trim markers remove. ASCII only.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Parse optional whitespace.
fn ws<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., is_space).parse_next(input)
}

/// Parse required whitespace.
fn ws1<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_space).parse_next(input)
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_lines_and_columns() {
        let input = "ab\ncd{{";
        let remaining = &input[5..];
        assert_eq!(calculate_position(input, remaining), (2, 3));
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        let input = "héé {{";
        let remaining = &input[input.len() - 2..];
        assert_eq!(calculate_position(input, remaining), (1, 5));
    }

    #[test]
    fn trim_last_literal_drops_whitespace_only_text() {
        let mut segments = vec![Segment::Literal("  \n".to_string())];
        trim_last_literal(&mut segments);
        assert!(segments.is_empty());
    }
}
