//! Cross-checks acceptance against apollo-parser on sources both parsers
//! should agree about.

use crate::parse_executable;
use crate::parse_schema;

fn apollo_accepts(source: &str) -> bool {
    apollo_parser::Parser::new(source).parse().errors().next().is_none()
}

const VALID_EXECUTABLE: &[&str] = &[
    "{ hello }",
    "query Q($id: ID! = \"1\", $f: [Int!]) @live { user(id: $id) { ...F ... on User { name } } }",
    "mutation { like(input: {id: 1, tags: [\"a\", \"b\"], when: null}) }",
    "subscription S { events { kind } }",
    "fragment F on User @include(if: true) { id alias: name(first: 1.5e3) }",
    "{ a(s: \"\"\"\n  block\n  \"\"\") }",
];

const INVALID_EXECUTABLE: &[&str] = &[
    "{ hello",
    "query Q($a: ) { a }",
    "{ a(b: ) }",
    "fragment F { a }",
    "{ a ... }",
    "{ a(x: \"unterminated) }",
];

const VALID_SCHEMA: &[&str] = &[
    "type Query { hello: String }",
    "\"doc\" type A implements B & C @d { f(a: Int = 1): [A!]! }",
    "schema { query: Q } extend schema @a",
    "union U = A | B\nenum E { X Y }\ninput I { a: Int = 1 }",
    "directive @d(a: String) repeatable on FIELD | QUERY",
    "scalar Date @specifiedBy(url: \"x\")\nextend type Query { now: Date }",
];

const INVALID_SCHEMA: &[&str] = &[
    "type Query { hello String }",
    "type Query { hello: }",
    "directive @d on",
    "enum E { ",
];

#[test]
fn executable_acceptance_matches() {
    for source in VALID_EXECUTABLE {
        assert!(apollo_accepts(source), "apollo rejected {source:?}");
        assert!(parse_executable(source).is_ok(), "rejected {source:?}");
    }
    for source in INVALID_EXECUTABLE {
        assert!(!apollo_accepts(source), "apollo accepted {source:?}");
        assert!(parse_executable(source).is_err(), "accepted {source:?}");
    }
}

#[test]
fn schema_acceptance_matches() {
    for source in VALID_SCHEMA {
        assert!(apollo_accepts(source), "apollo rejected {source:?}");
        assert!(parse_schema(source).is_ok(), "rejected {source:?}");
    }
    for source in INVALID_SCHEMA {
        assert!(!apollo_accepts(source), "apollo accepted {source:?}");
        assert!(parse_schema(source).is_err(), "accepted {source:?}");
    }
}
