use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use proptest::prelude::*;

/// Fragments that exercise every lexer branch when concatenated.
fn graphql_ish_source() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("{".to_string()),
        Just("}".to_string()),
        Just("...".to_string()),
        Just("\"str\\n\"".to_string()),
        Just("\"\"\"block\n  text\"\"\"".to_string()),
        Just("# comment\n".to_string()),
        Just(",".to_string()),
        Just("\r\n".to_string()),
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "-?[0-9]{1,4}(\\.[0-9]{1,3})?",
        "[ \t\n]{1,3}",
        "\\PC{1,3}",
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.join(" "))
}

fn check_token_invariants(source: &str) -> Result<(), TestCaseError> {
    let tokens: Vec<_> = StrGraphQLTokenSource::new(source).collect();
    prop_assert!(!tokens.is_empty());

    let mut prev_end = 0;
    for (idx, token) in tokens.iter().enumerate() {
        let range = token.span.byte_range();
        prop_assert!(range.start <= range.end);
        prop_assert!(range.end <= source.len());
        prop_assert!(range.start >= prev_end, "spans overlap or go backwards");
        prop_assert!(token.span.slice(source).is_some(), "span splits a character");
        prev_end = range.end;

        let is_last = idx == tokens.len() - 1;
        let terminal = matches!(token.kind, GraphQLTokenKind::Eof) || token.kind.is_error();
        prop_assert_eq!(terminal, is_last, "only the last token may end the stream");
    }
    Ok(())
}

proptest! {
    #[test]
    fn spans_are_in_bounds_and_monotonic(source in any::<String>()) {
        check_token_invariants(&source)?;
    }

    #[test]
    fn graphql_like_sources_lex_consistently(source in graphql_ish_source()) {
        check_token_invariants(&source)?;

        let first: Vec<_> = StrGraphQLTokenSource::new(&source).collect();
        let mut lexer = StrGraphQLTokenSource::new(&source);
        lexer.by_ref().for_each(drop);
        lexer.restart();
        let second: Vec<_> = lexer.collect();
        prop_assert_eq!(first, second);
    }
}
