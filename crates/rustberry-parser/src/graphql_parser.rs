//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] works over any
//! [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource). Each
//! grammar rule has a `parse_*` method returning
//! `Result<ast::Node, GraphQLParseError>`; the first error propagates with `?`
//! and ends the parse, so a failed parse yields exactly one error.
//!
//! The grammar is split by document kind:
//!
//! - `shared_grammar`: values, arguments, directive annotations, type
//!   annotations and descriptions, used by both document kinds.
//! - `executable_grammar`: operations, selections and fragments.
//! - `type_system_grammar`: schema, type, directive and extension
//!   definitions.

mod executable_grammar;
mod shared_grammar;
mod type_system_grammar;

use crate::DocumentKind;
use crate::GraphQLErrorNote;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;

/// A recursive descent parser for GraphQL documents.
///
/// ```
/// use rustberry_parser::GraphQLParser;
///
/// let doc = GraphQLParser::new("type Query { hello: String }")
///     .parse_schema_document()
///     .unwrap();
/// assert_eq!(doc.definitions.len(), 1);
///
/// let err = GraphQLParser::new("{ hello ")
///     .parse_executable_document()
///     .unwrap_err();
/// assert_eq!(err.message(), "expected `}`, found end of input");
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Shared by values, selection sets and type annotations.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting of values, selection sets and type annotations.
    ///
    /// Keeps adversarial input such as `[[[[...` from overflowing the stack.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses a document containing only operations and fragments.
    pub fn parse_executable_document(
        mut self,
    ) -> Result<ast::ExecutableDocument, GraphQLParseError> {
        let start = self.peek_token()?.span;
        let mut definitions = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::Eof)? {
            definitions.push(self.parse_executable_definition()?);
        }
        if definitions.is_empty() {
            return Err(self.empty_document_error(start, DocumentKind::Executable));
        }
        Ok(ast::ExecutableDocument {
            definitions,
            span: self.span_from(start),
        })
    }

    /// Parses a document containing only type-system definitions and
    /// extensions.
    pub fn parse_schema_document(
        mut self,
    ) -> Result<ast::SchemaDocument, GraphQLParseError> {
        let start = self.peek_token()?.span;
        let mut definitions = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::Eof)? {
            definitions.push(self.parse_type_system_definition()?);
        }
        if definitions.is_empty() {
            return Err(self.empty_document_error(start, DocumentKind::Schema));
        }
        Ok(ast::SchemaDocument {
            definitions,
            span: self.span_from(start),
        })
    }

    fn empty_document_error(
        &self,
        span: GraphQLSourceSpan,
        document_kind: DocumentKind,
    ) -> GraphQLParseError {
        GraphQLParseError::new(
            format!("a {} must contain at least one definition", document_kind.description()),
            span,
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: "document".to_string(),
            },
        )
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Returns (a copy of) the next token without consuming it.
    ///
    /// A lexer `Error` token is turned into the parse error right here, so no
    /// grammar rule ever observes one.
    fn peek_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let eof_span = self.eof_span();
        match self.token_stream.peek() {
            None => Ok(GraphQLToken::new(GraphQLTokenKind::Eof, eof_span)),
            Some(GraphQLToken {
                kind: GraphQLTokenKind::Error { message, error_notes },
                span,
            }) => Err(GraphQLParseError::from_lexer_error(
                message.clone(),
                *span,
                error_notes.clone(),
            )),
            Some(token) => Ok(token.clone()),
        }
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> Result<bool, GraphQLParseError> {
        Ok(self.peek_token()?.kind.same_variant(kind))
    }

    /// `true` if the next token is the name `keyword`.
    fn peek_is_keyword(&mut self, keyword: &str) -> Result<bool, GraphQLParseError> {
        Ok(matches!(self.peek_token()?.kind, GraphQLTokenKind::Name(name) if name == keyword))
    }

    fn consume_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let token = self.peek_token()?;
        self.token_stream.consume();
        Ok(token)
    }

    /// Consumes the next token if it is of `kind`.
    fn consume_if(
        &mut self,
        kind: &GraphQLTokenKind<'_>,
    ) -> Result<Option<GraphQLToken<'src>>, GraphQLParseError> {
        if self.peek_is(kind)? {
            self.consume_token().map(Some)
        } else {
            Ok(None)
        }
    }

    fn expect(
        &mut self,
        expected_kind: &GraphQLTokenKind<'_>,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let token = self.peek_token()?;
        if token.kind.same_variant(expected_kind) {
            return self.consume_token();
        }
        Err(self.unexpected(&token, &[&format!("`{}`", expected_kind.display())]))
    }

    /// Expects a `Name`. `true`, `false` and `null` are accepted because they
    /// match the `Name` production.
    fn expect_name(&mut self) -> Result<ast::Name, GraphQLParseError> {
        let token = self.peek_token()?;
        match token.kind.as_name() {
            Some(name) => {
                self.consume_token()?;
                Ok(ast::Name {
                    value: name.to_string(),
                    span: token.span,
                })
            },
            None => Err(self.unexpected(&token, &["name"])),
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let token = self.peek_token()?;
        if matches!(token.kind, GraphQLTokenKind::Name(name) if name == keyword) {
            return self.consume_token();
        }
        Err(self.unexpected(&token, &[&format!("`{keyword}`")]))
    }

    /// Builds the error for `found` appearing where one of `expected` was
    /// required.
    fn unexpected(&self, found: &GraphQLToken<'src>, expected: &[&str]) -> GraphQLParseError {
        let expected_text = match expected {
            [only] => only.to_string(),
            [init @ .., last] => format!("{} or {last}", init.join(", ")),
            [] => "more input".to_string(),
        };
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        let found_text = found.kind.display();

        if matches!(found.kind, GraphQLTokenKind::Eof) {
            return GraphQLParseError::new(
                format!("expected {expected_text}, found end of input"),
                found.span,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            );
        }
        GraphQLParseError::new(
            format!("expected {expected_text}, found `{found_text}`"),
            found.span,
            GraphQLParseErrorKind::UnexpectedToken {
                expected,
                found: found_text,
            },
        )
    }

    /// Span at the end of the last consumed token, or at the origin if
    /// nothing was consumed.
    fn eof_span(&self) -> GraphQLSourceSpan {
        self.token_stream
            .last_consumed_span()
            .map(|span| GraphQLSourceSpan::empty_at(span.end_exclusive))
            .unwrap_or_default()
    }

    /// From the start of `start` to the end of the last consumed token.
    fn span_from(&self, start: GraphQLSourceSpan) -> GraphQLSourceSpan {
        match self.token_stream.last_consumed_span() {
            Some(last) => GraphQLSourceSpan::new(start.start_inclusive, last.end_exclusive),
            None => start,
        }
    }

    // =========================================================================
    // Recursion limit
    // =========================================================================

    fn enter_recursion(&mut self) -> Result<(), GraphQLParseError> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            let span = self.peek_token()?.span;
            return Err(GraphQLParseError::new(
                format!(
                    "maximum nesting depth of {} exceeded",
                    Self::MAX_RECURSION_DEPTH,
                ),
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ).with_note(GraphQLErrorNote::help(
                "flatten deeply nested values, selections or list types",
            )));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, GraphQLParseError>,
    ) -> Result<T, GraphQLParseError> {
        self.enter_recursion()?;
        let result = parse(self);
        self.exit_recursion();
        result
    }

    // =========================================================================
    // Document-kind checks
    // =========================================================================

    /// Error for a definition keyword that belongs to the other document
    /// kind.
    fn wrong_document_kind(
        &self,
        token: &GraphQLToken<'src>,
        found: &str,
        document_kind: DocumentKind,
    ) -> GraphQLParseError {
        let help = match document_kind {
            DocumentKind::Executable => {
                "type-system definitions belong in a schema document"
            },
            DocumentKind::Schema => {
                "operations and fragments belong in an executable document"
            },
        };
        GraphQLParseError::new(
            format!("{found} is not allowed in a {}", document_kind.description()),
            token.span,
            GraphQLParseErrorKind::WrongDocumentKind {
                found: found.to_string(),
                document_kind,
            },
        ).with_note(GraphQLErrorNote::help(help))
    }
}

/// Describes the definition a keyword token would start, if any.
fn definition_keyword_description(keyword: &str) -> Option<&'static str> {
    Some(match keyword {
        "query" | "mutation" | "subscription" => "an operation",
        "fragment" => "a fragment definition",
        "schema" => "a schema definition",
        "scalar" | "type" | "interface" | "union" | "enum" | "input" => "a type definition",
        "directive" => "a directive definition",
        "extend" => "a type-system extension",
        _ => return None,
    })
}
