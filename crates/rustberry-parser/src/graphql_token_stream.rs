//! Bounded-lookahead buffer over a
//! [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource).

use std::collections::VecDeque;

use crate::GraphQLSourceSpan;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Wraps a token source and provides the `peek`/`peek_nth`/`consume` surface
/// the parser is written against.
///
/// Tokens live in a [`VecDeque`]: unconsumed tokens are pushed at the back as
/// lookahead demands them, and `consume()` pops from the front.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<GraphQLToken<'src>>,
    /// Span of the most recently consumed token. Errors at end of input are
    /// anchored here.
    last_consumed_span: Option<GraphQLSourceSpan>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            last_consumed_span: None,
        }
    }

    /// Advances past the next token and returns it.
    ///
    /// Returns `None` once the source is exhausted.
    pub fn consume(&mut self) -> Option<GraphQLToken<'src>> {
        self.ensure_buffer_has(1);
        let token = self.buffer.pop_front()?;
        self.last_consumed_span = Some(token.span);
        Some(token)
    }

    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    /// `true` when nothing is left or the next token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => matches!(token.kind, GraphQLTokenKind::Eof),
        }
    }

    pub fn last_consumed_span(&self) -> Option<GraphQLSourceSpan> {
        self.last_consumed_span
    }

    #[inline]
    pub fn peek(&mut self) -> Option<&GraphQLToken<'src>> {
        self.peek_nth(0)
    }

    /// Peeks `n` tokens ahead; `peek_nth(0)` is `peek()`.
    pub fn peek_nth(&mut self, n: usize) -> Option<&GraphQLToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }
}
