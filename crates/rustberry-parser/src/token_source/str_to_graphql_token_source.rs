//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes a `&str`.
//!
//! Token payloads borrow from the source, so lexing allocates only for error
//! messages. Ignored tokens (whitespace, commas, comments, the BOM) are
//! skipped rather than surfaced.
//!
//! The first lexical error ends the sequence: the lexer emits a single
//! `Error` token and then reports itself exhausted, so a malformed source
//! unit never yields a partial token stream past the error.
//!
//! ```rust
//! use rustberry_parser::token::GraphQLTokenKind;
//! use rustberry_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> =
//!     StrGraphQLTokenSource::new("{ name }")
//!         .map(|token| token.kind)
//!         .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name("name"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

const SPEC_INT_VALUE: &str = "https://spec.graphql.org/October2021/#IntValue";
const SPEC_FLOAT_VALUE: &str = "https://spec.graphql.org/October2021/#FloatValue";

#[derive(Clone, Debug)]
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,
    curr_byte_offset: usize,
    curr_line: u32,
    curr_col_utf8: u32,
    curr_col_utf16: u32,
    /// Set after a `\r` so that a following `\n` does not count as a second
    /// line break.
    last_char_was_cr: bool,
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    /// Rewinds to the start of the source.
    pub fn restart(&mut self) {
        *self = Self::new(self.source);
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset as u32,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.remaining().as_bytes().get(n).copied()
    }

    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16() as u32;
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `len` bytes known to contain no line terminators.
    fn consume_inline_bytes(&mut self, len: usize) {
        let text = &self.remaining()[..len];
        if text.is_ascii() {
            self.curr_col_utf8 += len as u32;
            self.curr_col_utf16 += len as u32;
        } else {
            for ch in text.chars() {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16() as u32;
            }
        }
        if len > 0 {
            self.last_char_was_cr = false;
        }
        self.curr_byte_offset += len;
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_error(
        &mut self,
        start: SourcePosition,
        message: impl Into<String>,
        notes: crate::GraphQLErrorNotes,
    ) -> GraphQLToken<'src> {
        self.finished = true;
        GraphQLToken::new(
            GraphQLTokenKind::error(message, notes),
            self.make_span(start),
        )
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.curr_position();

        let Some(ch) = self.peek_char() else {
            self.finished = true;
            return GraphQLToken::new(GraphQLTokenKind::Eof, self.make_span(start));
        };

        let punctuator = match ch {
            '!' => Some(GraphQLTokenKind::Bang),
            '$' => Some(GraphQLTokenKind::Dollar),
            '&' => Some(GraphQLTokenKind::Ampersand),
            '(' => Some(GraphQLTokenKind::ParenOpen),
            ')' => Some(GraphQLTokenKind::ParenClose),
            ':' => Some(GraphQLTokenKind::Colon),
            '=' => Some(GraphQLTokenKind::Equals),
            '@' => Some(GraphQLTokenKind::At),
            '[' => Some(GraphQLTokenKind::SquareBracketOpen),
            ']' => Some(GraphQLTokenKind::SquareBracketClose),
            '{' => Some(GraphQLTokenKind::CurlyBraceOpen),
            '}' => Some(GraphQLTokenKind::CurlyBraceClose),
            '|' => Some(GraphQLTokenKind::Pipe),
            _ => None,
        };
        if let Some(kind) = punctuator {
            self.consume();
            return GraphQLToken::new(kind, self.make_span(start));
        }

        match ch {
            '.' => self.lex_ellipsis(start),
            '"' => self.lex_string(start),
            c if is_name_start(c) => self.lex_name(start),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            _ => self.lex_invalid_character(start),
        }
    }

    /// Skips whitespace, line terminators, commas, the BOM and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => {
                    let rest = self.remaining().as_bytes();
                    let comment_len =
                        memchr::memchr2(b'\n', b'\r', rest)
                            .unwrap_or(rest.len());
                    self.consume_inline_bytes(comment_len);
                },
                _ => break,
            }
        }
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume_inline_bytes(3);
            return GraphQLToken::new(GraphQLTokenKind::Ellipsis, self.make_span(start));
        }

        let dots =
            self.remaining()
                .bytes()
                .take_while(|b| *b == b'.')
                .count();
        self.consume_inline_bytes(dots);
        let notes =
            if dots == 2 {
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`",
                )]
            } else {
                smallvec![]
            };
        let text = ".".repeat(dots);
        self.make_error(start, format!("Unexpected `{text}`"), notes)
    }

    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        let len =
            self.remaining()
                .bytes()
                .take_while(|b| *b == b'_' || b.is_ascii_alphanumeric())
                .count();
        self.consume_inline_bytes(len);
        let name = &self.source[name_start..name_start + len];
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::Name(name),
        };
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn consume_digits(&mut self) -> usize {
        let len =
            self.remaining()
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
        self.consume_inline_bytes(len);
        len
    }

    /// `-? (0 | [1-9][0-9]*) ( . [0-9]+ )? ( [eE] [+-]? [0-9]+ )?`
    ///
    /// A number may not be directly followed by a `.` or a name-start
    /// character.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_byte_nth(0) {
            Some(b'0') => {
                self.consume();
                if self.peek_byte_nth(0).is_some_and(|b| b.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        SPEC_INT_VALUE,
                    );
                }
            },
            Some(b) if b.is_ascii_digit() => {
                self.consume_digits();
            },
            _ => return self.make_error(start, "Unexpected `-`", smallvec![]),
        }

        if self.peek_byte_nth(0) == Some(b'.') {
            self.consume();
            is_float = true;
            if self.consume_digits() == 0 {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected a digit after `.`",
                    SPEC_FLOAT_VALUE,
                );
            }
        }

        if matches!(self.peek_byte_nth(0), Some(b'e' | b'E')) {
            self.consume();
            is_float = true;
            if matches!(self.peek_byte_nth(0), Some(b'+' | b'-')) {
                self.consume();
            }
            if self.consume_digits() == 0 {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    SPEC_FLOAT_VALUE,
                );
            }
        }

        if let Some(next) = self.peek_char()
            && (next == '.' || is_name_start(next)) {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: a number cannot be directly followed by a name or `.`",
                SPEC_INT_VALUE,
            );
        }

        let text = &self.source[num_start..self.curr_byte_offset];
        let kind =
            if is_float {
                GraphQLTokenKind::FloatValue(text)
            } else {
                GraphQLTokenKind::IntValue(text)
            };
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLToken<'src> {
        let tail_len =
            self.remaining()
                .bytes()
                .take_while(|b| {
                    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-' | b'_')
                })
                .count();
        self.consume_inline_bytes(tail_len);
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.make_error(
            start,
            format!("{message}: `{invalid_text}`"),
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        let str_start = self.curr_byte_offset;
        self.consume();

        loop {
            let rest = self.remaining().as_bytes();
            let Some(stop) = memchr::memchr3(b'"', b'\\', b'\n', rest) else {
                if let Some(cr) = memchr::memchr(b'\r', rest) {
                    self.consume_inline_bytes(cr);
                    return self.unterminated_line_string(start);
                }
                self.consume_inline_bytes(rest.len());
                return self.make_error(
                    start,
                    "Unterminated string literal",
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "String started here",
                            GraphQLSourceSpan::empty_at(start),
                        ),
                        GraphQLErrorNote::help("Add closing `\"`"),
                    ],
                );
            };

            if let Some(cr) = memchr::memchr(b'\r', &rest[..stop]) {
                self.consume_inline_bytes(cr);
                return self.unterminated_line_string(start);
            }
            self.consume_inline_bytes(stop);

            match self.consume() {
                Some('"') => break,
                Some('\\') => {
                    // The escaped character is validated when the literal is
                    // cooked; here it only must not end the line.
                    match self.peek_char() {
                        Some('\n' | '\r') | None => {},
                        Some(_) => {
                            self.consume();
                        },
                    }
                },
                _ => return self.unterminated_line_string(start),
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(GraphQLTokenKind::StringValue(text), self.make_span(start))
    }

    fn unterminated_line_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        self.make_error(
            start,
            "Unterminated string literal",
            smallvec![
                GraphQLErrorNote::general(
                    "Single-line strings cannot contain unescaped line terminators",
                ),
                GraphQLErrorNote::help(
                    "Use a block string (`\"\"\"`) for multi-line text, or escape \
                    the line break with `\\n`",
                ),
            ],
        )
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        self.consume_inline_bytes(3);

        let finder = memchr::memmem::Finder::new(b"\"\"\"");
        loop {
            let rest = self.remaining();
            let Some(found) = finder.find(rest.as_bytes()) else {
                self.consume_multiline(rest.len());
                return self.make_error(
                    start,
                    "Unterminated block string",
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "Block string started here",
                            GraphQLSourceSpan::empty_at(start),
                        ),
                        GraphQLErrorNote::help("Add closing `\"\"\"`"),
                    ],
                );
            };

            let escaped = found > 0 && rest.as_bytes()[found - 1] == b'\\';
            self.consume_multiline(found + 3);
            if !escaped {
                break;
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::BlockStringValue(text),
            self.make_span(start),
        )
    }

    /// Consumes `len` bytes that may contain line terminators.
    fn consume_multiline(&mut self, len: usize) {
        let target = self.curr_byte_offset + len;
        while self.curr_byte_offset < target {
            let rest = &self.remaining().as_bytes()[..target - self.curr_byte_offset];
            match memchr::memchr2(b'\n', b'\r', rest) {
                Some(line_break) => {
                    self.consume_inline_bytes(line_break);
                    self.consume();
                },
                None => self.consume_inline_bytes(rest.len()),
            }
        }
    }

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let description =
            self.consume()
                .map(describe_char)
                .unwrap_or_else(|| "end of input".to_string());
        self.make_error(start, format!("Unexpected character {description}"), smallvec![])
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

impl std::iter::FusedIterator for StrGraphQLTokenSource<'_> {}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Printable characters render as themselves; invisible ones also get their
/// code point so they can be found in an editor.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || is_invisible_format_char(ch) {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}

fn is_invisible_format_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{00AD}' | '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{2064}'
    )
}
