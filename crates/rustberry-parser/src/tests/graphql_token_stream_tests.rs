use crate::GraphQLTokenStream;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

fn stream(source: &str) -> GraphQLTokenStream<'_, StrGraphQLTokenSource<'_>> {
    GraphQLTokenStream::new(StrGraphQLTokenSource::new(source))
}

#[test]
fn peek_does_not_consume() {
    let mut tokens = stream("query Q");
    assert_eq!(tokens.peek().unwrap().kind, GraphQLTokenKind::Name("query"));
    assert_eq!(tokens.peek().unwrap().kind, GraphQLTokenKind::Name("query"));
    assert_eq!(tokens.current_buffer_len(), 1);
    assert_eq!(tokens.consume().unwrap().kind, GraphQLTokenKind::Name("query"));
    assert_eq!(tokens.consume().unwrap().kind, GraphQLTokenKind::Name("Q"));
}

#[test]
fn peek_nth_buffers_lookahead() {
    let mut tokens = stream("{ a b }");
    assert_eq!(tokens.peek_nth(2).unwrap().kind, GraphQLTokenKind::Name("b"));
    assert_eq!(tokens.current_buffer_len(), 3);
    assert_eq!(tokens.consume().unwrap().kind, GraphQLTokenKind::CurlyBraceOpen);
    assert_eq!(tokens.current_buffer_len(), 2);
}

#[test]
fn last_consumed_span_tracks_consumption() {
    let mut tokens = stream("a bc");
    assert_eq!(tokens.last_consumed_span(), None);
    tokens.consume();
    tokens.consume();
    assert_eq!(tokens.last_consumed_span().unwrap().byte_range(), 2..4);
}

#[test]
fn ends_with_eof_then_none() {
    let mut tokens = stream("a");
    assert!(!tokens.is_at_end());
    tokens.consume();
    assert!(tokens.is_at_end());
    assert_eq!(tokens.consume().unwrap().kind, GraphQLTokenKind::Eof);
    assert!(tokens.consume().is_none());
    assert!(tokens.is_at_end());
}
