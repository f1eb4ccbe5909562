use crate::GraphQLErrorNoteKind;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

fn lex(source: &str) -> Vec<GraphQLToken<'_>> {
    StrGraphQLTokenSource::new(source).collect()
}

fn kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    lex(source).into_iter().map(|token| token.kind).collect()
}

fn single_error_message(source: &str) -> String {
    let tokens = lex(source);
    let last = tokens.last().unwrap();
    match &last.kind {
        GraphQLTokenKind::Error { message, .. } => message.clone(),
        other => panic!("expected an error token, found {other:?}"),
    }
}

#[test]
fn lexes_punctuators() {
    assert_eq!(
        kinds("! $ & ( ) ... : = @ [ ] { | }"),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn lexes_names_and_keyword_literals() {
    assert_eq!(
        kinds("_id name2 true false null"),
        vec![
            GraphQLTokenKind::Name("_id"),
            GraphQLTokenKind::Name("name2"),
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn classifies_ints_and_floats() {
    assert_eq!(
        kinds("0 -12 3.5 1e10 -0.25E-3"),
        vec![
            GraphQLTokenKind::IntValue("0"),
            GraphQLTokenKind::IntValue("-12"),
            GraphQLTokenKind::FloatValue("3.5"),
            GraphQLTokenKind::FloatValue("1e10"),
            GraphQLTokenKind::FloatValue("-0.25E-3"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn keeps_raw_string_text() {
    assert_eq!(
        kinds(r#""a\"b" """block "" text""""#),
        vec![
            GraphQLTokenKind::StringValue(r#""a\"b""#),
            GraphQLTokenKind::BlockStringValue(r#""""block "" text""""#),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn block_string_allows_escaped_triple_quote() {
    let source = r#""""a \""" b""""#;
    assert_eq!(
        kinds(source),
        vec![GraphQLTokenKind::BlockStringValue(source), GraphQLTokenKind::Eof],
    );
}

#[test]
fn skips_ignored_tokens() {
    assert_eq!(
        kinds("\u{FEFF}a,b # comment } {\n\t,c"),
        vec![
            GraphQLTokenKind::Name("a"),
            GraphQLTokenKind::Name("b"),
            GraphQLTokenKind::Name("c"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn tracks_positions_across_lines() {
    let tokens = lex("{\n  name\r\n}");
    let name = &tokens[1];
    assert_eq!(name.span.start_inclusive.line(), 1);
    assert_eq!(name.span.start_inclusive.col_utf8(), 2);
    assert_eq!(name.span.start_inclusive.byte_offset(), 4);
    assert_eq!(name.span.end_exclusive.byte_offset(), 8);

    // `\r\n` counts as a single line break.
    let close = &tokens[2];
    assert_eq!(close.span.start_inclusive.line(), 2);
    assert_eq!(close.span.start_inclusive.col_utf8(), 0);
}

#[test]
fn tracks_utf16_columns_separately() {
    let tokens = lex("\"😀\" x");
    let x = &tokens[1];
    assert_eq!(x.kind, GraphQLTokenKind::Name("x"));
    assert_eq!(x.span.start_inclusive.col_utf8(), 4);
    assert_eq!(x.span.start_inclusive.col_utf16(), 5);
    assert_eq!(x.span.start_inclusive.byte_offset(), 7);
}

#[test]
fn raw_text_matches_span() {
    let source = "query Q { a }";
    for token in lex(source) {
        if let GraphQLTokenKind::Name(name) = token.kind {
            assert_eq!(token.raw_text(source), name);
        }
    }
}

#[test]
fn eof_span_is_empty_at_end() {
    let tokens = lex("a  ");
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, GraphQLTokenKind::Eof);
    assert!(eof.span.is_empty());
    assert_eq!(eof.span.start_inclusive.byte_offset(), 3);
}

#[test]
fn rejects_leading_zeros() {
    assert!(single_error_message("007").contains("leading zeros"));
}

#[test]
fn rejects_missing_fraction_digits() {
    assert!(single_error_message("1.").contains("expected a digit after `.`"));
}

#[test]
fn rejects_missing_exponent_digits() {
    assert!(single_error_message("2e+").contains("exponent"));
}

#[test]
fn rejects_number_followed_by_name() {
    assert!(single_error_message("123abc").contains("`123abc`"));
}

#[test]
fn rejects_bare_minus() {
    assert_eq!(single_error_message("- 1"), "Unexpected `-`");
}

#[test]
fn rejects_unterminated_strings() {
    assert_eq!(single_error_message("\"abc"), "Unterminated string literal");
    assert_eq!(single_error_message("\"ab\ncd\""), "Unterminated string literal");
    assert_eq!(single_error_message("\"\"\"abc"), "Unterminated block string");
}

#[test]
fn two_dots_suggest_spread() {
    let tokens = lex("..a");
    let GraphQLTokenKind::Error { message, error_notes } = &tokens[0].kind else {
        panic!("expected error token");
    };
    assert_eq!(message, "Unexpected `..`");
    assert_eq!(error_notes[0].kind, GraphQLErrorNoteKind::Help);
}

#[test]
fn describes_invisible_characters() {
    assert_eq!(single_error_message("a \u{200B}"), "Unexpected character `\\u{200b}` (U+200B)");
    assert_eq!(single_error_message("?"), "Unexpected character `?`");
}

#[test]
fn lexing_stops_after_first_error() {
    let tokens = lex("a ? b c");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, GraphQLTokenKind::Name("a"));
    assert!(tokens[1].kind.is_error());
    assert_eq!(tokens[1].span.byte_range(), 2..3);
}

#[test]
fn restart_rewinds_to_start() {
    let mut source = StrGraphQLTokenSource::new("{ a }");
    let first: Vec<_> = source.by_ref().map(|token| token.kind).collect();
    assert!(source.next().is_none());

    source.restart();
    let second: Vec<_> = source.map(|token| token.kind).collect();
    assert_eq!(first, second);
}
