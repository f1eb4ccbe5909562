use crate::GraphQLSourceSpan;
use crate::token::GraphQLTokenKind;

/// A single lexical token. Immutable once produced.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }

    /// The exact source text this token was lexed from.
    pub fn raw_text(&self, source: &'src str) -> &'src str {
        self.span.slice(source).unwrap_or("")
    }
}
