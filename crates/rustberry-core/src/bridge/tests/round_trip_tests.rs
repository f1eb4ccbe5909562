use super::parse;
use crate::bridge::mirror::print_ast;
use crate::bridge::to_internal_ast;
use crate::bridge::to_mirrored_ast;

const DOCUMENTS: &[&str] = &[
    "{ hello }",
    "query Q { a: dog { ...DogFields ... on Dog @skip(if: $skip) { barkVolume } } }
     fragment DogFields on Dog { name nickname }",
    r#"query Args($id: ID! = "4", $list: [[Int!]]! = [[1], []], $obj: In = {a: {b: [null]}}) @onQuery {
         node(id: $id, flag: true, ratio: -1.5e3, kind: ENUM_VALUE) @include(if: true) @d {
           __typename
         }
       }"#,
    "mutation { like(story: 123) { likeCount } } subscription S { events { id } }",
    "query ($v: Int @onVariable) { f(x: $v) }",
    "{ ... { a } ... @include(if: false) { b } }",
    "{ f(s: \"\"\"\n      block\n        indented\n      \"\"\", t: \"\"\"one\n\ntwo\"\"\", u: \"esc\\u00e9\\n\") }",
    r#"{ f(argumentNumberOne: "aaaaaaaaaa", argumentNumberTwo: "bbbbbbbbbb", nested: {deep: [1, 2, 3]}) { g } }"#,
    "# comment\n{\n  a # trailing\n  , b ,, c\n}",
];

#[test]
fn printed_mirror_reparses_to_the_same_document() {
    for source in DOCUMENTS {
        let original = parse(source);
        let printed = print_ast(&to_mirrored_ast(&original));
        let reparsed = rustberry_parser::parse_executable(&printed)
            .unwrap_or_else(|err| panic!("printed form of {source:?} failed to parse: {err}\n{printed}"));

        let mut expected = to_internal_ast(&original);
        let mut actual = to_internal_ast(&reparsed);
        expected.erase_spans();
        actual.erase_spans();
        assert_eq!(actual, expected, "round trip changed {source:?}; printed:\n{printed}");
    }
}

#[test]
fn printing_is_a_fixpoint() {
    for source in DOCUMENTS {
        let printed = print_ast(&to_mirrored_ast(&parse(source)));
        let reprinted = print_ast(&to_mirrored_ast(&parse(&printed)));
        assert_eq!(reprinted, printed);
    }
}
