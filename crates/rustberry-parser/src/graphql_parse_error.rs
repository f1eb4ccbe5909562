use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// The single error produced by a failed parse.
///
/// Lexing and parsing both stop at the first problem they find, so a source
/// unit yields at most one of these.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline(None))]
pub struct GraphQLParseError {
    message: String,
    span: GraphQLSourceSpan,
    kind: GraphQLParseErrorKind,
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Wraps an `Error` token emitted by the lexer, keeping its notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn with_note(mut self, note: GraphQLErrorNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// `file:line:col: error: message`
    pub fn format_oneline(&self, file_name: Option<&str>) -> String {
        let (line, column) = self.span.start_inclusive.to_line_column();
        format!(
            "{}:{line}:{column}: error: {}",
            file_name.unwrap_or("<input>"),
            self.message,
        )
    }

    /// Renders the error with a caret-underlined snippet of `source` followed
    /// by its notes:
    ///
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.graphql:1:18
    ///    |
    ///  1 | type User { name String }
    ///    |                  ^^^^^^
    ///    = help: field definitions need a `:` between name and type
    /// ```
    pub fn format_detailed(&self, source: &str, file_name: Option<&str>) -> String {
        let (line, column) = self.span.start_inclusive.to_line_column();
        let mut output = format!(
            "error: {}\n  --> {}:{line}:{column}\n",
            self.message,
            file_name.unwrap_or("<input>"),
        );

        if let Some(snippet) = format_snippet(source, &self.span, '^') {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind.prefix(),
                note.message,
            ));
            if let Some(note_span) = &note.span
                && let Some(snippet) = format_snippet(source, note_span, '-') {
                output.push_str(&snippet);
            }
        }

        output
    }
}

fn format_snippet(
    source: &str,
    span: &GraphQLSourceSpan,
    marker: char,
) -> Option<String> {
    let line_idx = span.start_inclusive.line() as usize;
    let line_content = source.lines().nth(line_idx)?;
    let display_line = line_idx + 1;
    let gutter = display_line.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8() as usize;
    let marker_len =
        if span.end_exclusive.line() == span.start_inclusive.line() {
            (span.end_exclusive.col_utf8() as usize)
                .saturating_sub(col_start)
                .max(1)
        } else {
            line_content.chars().count().saturating_sub(col_start).max(1)
        };

    Some(format!(
        "{:>gutter$} |\n{display_line:>gutter$} | {line_content}\n{:>gutter$} | {:>col_start$}{}\n",
        "",
        "",
        "",
        marker.to_string().repeat(marker_len),
    ))
}
