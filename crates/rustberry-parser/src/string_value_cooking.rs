//! Turns the raw text of string literals into their values.
//!
//! The lexer only delimits string literals. Escape processing for `"..."`
//! and indentation removal for `"""..."""` happen here, when the parser
//! builds the AST node.

use crate::GraphQLStringParsingError;

/// Cooks a `"..."` literal (quotes included).
pub fn cook_string_value(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;

    let mut cooked = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            cooked.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => cooked.push('"'),
            Some('\\') => cooked.push('\\'),
            Some('/') => cooked.push('/'),
            Some('b') => cooked.push('\u{0008}'),
            Some('f') => cooked.push('\u{000C}'),
            Some('n') => cooked.push('\n'),
            Some('r') => cooked.push('\r'),
            Some('t') => cooked.push('\t'),
            Some('u') => cooked.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }
    Ok(cooked)
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Reads what follows `\u`: either `{X...}` or exactly four hex digits. A
/// four-digit leading surrogate must be followed by `\uXXXX` holding its
/// trailing surrogate.
fn cook_unicode_escape(chars: &mut Chars<'_>) -> Result<char, GraphQLStringParsingError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() && hex.len() < 8 => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
        return u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"))
            });
    }

    let lead = read_four_hex_digits(chars)?;
    if let Some(ch) = char::from_u32(lead) {
        return Ok(ch);
    }

    let invalid = || GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{lead:04X}"));
    if !(0xD800..=0xDBFF).contains(&lead) {
        return Err(invalid());
    }
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(invalid());
    }
    let trail = read_four_hex_digits(chars)?;
    if !(0xDC00..=0xDFFF).contains(&trail) {
        return Err(invalid());
    }
    let code_point = 0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
    char::from_u32(code_point).ok_or_else(invalid)
}

fn read_four_hex_digits(chars: &mut Chars<'_>) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}{c}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}"),
                ));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Cooks a `"""..."""` literal (quotes included): unescapes `\"""`, strips
/// the common indentation of all lines after the first, then drops leading
/// and trailing blank lines.
pub fn cook_block_string_value(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix("\"\"\"")
        .and_then(|rest| rest.strip_suffix("\"\"\""))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;
    let content = content.replace("\\\"\"\"", "\"\"\"");

    let lines = split_lines(&content);
    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let mut lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 || line.len() < common_indent {
                *line
            } else {
                &line[common_indent..]
            }
        })
        .collect();

    let is_blank = |line: &&str| leading_whitespace_len(line) == line.len();
    while lines.first().is_some_and(is_blank) {
        lines.remove(0);
    }
    while lines.last().is_some_and(is_blank) {
        lines.pop();
    }

    Ok(lines.join("\n"))
}

/// Splits on `\r\n`, `\n` and lone `\r`.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut line_start = 0;
    let mut idx = 0;
    while let Some(offset) = memchr::memchr2(b'\n', b'\r', &bytes[idx..]) {
        let at = idx + offset;
        lines.push(&text[line_start..at]);
        idx =
            if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                at + 2
            } else {
                at + 1
            };
        line_start = idx;
    }
    lines.push(&text[line_start..]);
    lines
}

/// Length in bytes of the leading run of spaces and tabs.
fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Renders `value` as a `"..."` literal that cooks back to `value`.
pub fn print_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
