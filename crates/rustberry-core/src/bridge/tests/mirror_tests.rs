use super::parse;
use crate::bridge::mirror::DefinitionNode;
use crate::bridge::mirror::DocumentNode;
use crate::bridge::mirror::OperationType;
use crate::bridge::mirror::SelectionNode;
use crate::bridge::mirror::TypeNode;
use crate::bridge::mirror::ValueNode;
use crate::bridge::to_mirrored_ast;
use serde_json::json;

fn mirror(source: &str) -> DocumentNode {
    to_mirrored_ast(&parse(source))
}

#[test]
fn shorthand_query_mirrors_as_anonymous_query_operation() {
    let doc = mirror("{ hello }");
    assert_eq!(doc.definitions.len(), 1);
    let DefinitionNode::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(op.operation, OperationType::Query);
    assert!(op.name.is_none());
    assert_eq!(op.selection_set.selections.len(), 1);
    let SelectionNode::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.name.value, "hello");
    assert!(field.selection_set.is_none());
}

#[test]
fn kinds_follow_graphql_core() {
    let doc = mirror(r#"
        query Q($v: [Int!]) { f(a: 1, b: 1.5, c: "s", d: true, e: null, g: E, h: [$v], i: {j: 1}) {
          ... on T { x }
          ...F
        } }
        fragment F on T { y }
    "#);
    assert_eq!(doc.kind(), "document");
    let DefinitionNode::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(doc.definitions[0].kind(), "operation_definition");
    assert_eq!(doc.definitions[1].kind(), "fragment_definition");
    assert_eq!(op.variable_definitions[0].kind(), "variable_definition");
    assert_eq!(op.variable_definitions[0].variable.kind(), "variable");
    assert_eq!(op.selection_set.kind(), "selection_set");

    let TypeNode::List(list_type) = &op.variable_definitions[0].type_ else {
        panic!("expected a list type");
    };
    assert_eq!(list_type.kind(), "list_type");
    assert_eq!(list_type.type_.kind(), "non_null_type");
    let TypeNode::NonNull(non_null) = &*list_type.type_ else {
        panic!("expected a non-null type");
    };
    assert_eq!(non_null.type_.kind(), "named_type");

    let SelectionNode::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.kind(), "field");
    assert_eq!(field.name.kind(), "name");
    let value_kinds: Vec<&str> = field.arguments.iter().map(|arg| arg.value.kind()).collect();
    assert_eq!(value_kinds, vec![
        "int_value",
        "float_value",
        "string_value",
        "boolean_value",
        "null_value",
        "enum_value",
        "list_value",
        "object_value",
    ]);
    assert_eq!(field.arguments[0].kind(), "argument");
    let ValueNode::Object(object) = &field.arguments[7].value else {
        panic!("expected an object value");
    };
    assert_eq!(object.fields[0].kind(), "object_field");

    let nested = &field.selection_set.as_ref().unwrap().selections;
    assert_eq!(nested[0].kind(), "inline_fragment");
    assert_eq!(nested[1].kind(), "fragment_spread");
}

#[test]
fn keys_follow_graphql_core_order() {
    let doc = mirror("query Q($a: Int @d) { ...F } fragment F on T { x }");
    let DefinitionNode::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(op.keys(), [
        "loc",
        "name",
        "directives",
        "variable_definitions",
        "selection_set",
        "operation",
    ]);
    assert_eq!(op.variable_definitions[0].keys(), [
        "loc",
        "variable",
        "type",
        "default_value",
        "directives",
    ]);
    assert_eq!(op.selection_set.selections[0].keys(), ["loc", "directives", "name"]);
    assert_eq!(doc.definitions[1].keys(), [
        "loc",
        "name",
        "directives",
        "variable_definitions",
        "selection_set",
        "type_condition",
    ]);

    let DefinitionNode::FragmentDefinition(frag) = &doc.definitions[1] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(frag.selection_set.selections[0].keys(), [
        "loc",
        "directives",
        "alias",
        "name",
        "arguments",
        "selection_set",
    ]);
    assert_eq!(frag.type_condition.keys(), ["loc", "name"]);
}

#[test]
fn locations_are_byte_offsets_into_the_source() {
    let doc = mirror("query Q($a: Int!) { hello }");
    let DefinitionNode::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    let name = op.name.as_ref().unwrap();
    assert_eq!((name.loc.start, name.loc.end), (6, 7));

    let var_def = &op.variable_definitions[0];
    assert_eq!((var_def.loc.start, var_def.loc.end), (8, 16));
    assert_eq!((var_def.variable.loc.start, var_def.variable.loc.end), (8, 10));
    let TypeNode::NonNull(non_null) = &var_def.type_ else {
        panic!("expected a non-null type");
    };
    assert_eq!((non_null.loc.start, non_null.loc.end), (12, 16));
    assert_eq!(non_null.type_.loc().start..non_null.type_.loc().end, 12..15);

    let field = &op.selection_set.selections[0];
    assert_eq!(field.loc().start..field.loc().end, 20..25);
    let (line, column) = field.loc().span().start_inclusive.to_line_column();
    assert_eq!((line, column), (1, 21));
}

#[test]
fn mirroring_is_deterministic() {
    let document = parse("{ a { b } ... on T { c } }");
    assert_eq!(to_mirrored_ast(&document), to_mirrored_ast(&document));
}

mod to_dict_shape {
    use super::*;

    #[test]
    fn field_selection_serializes_in_key_order() {
        let doc = mirror("{ hello }");
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            concat!(
                r#"{"kind":"document","definitions":[{"kind":"operation_definition","#,
                r#""name":null,"directives":[],"variable_definitions":[],"#,
                r#""selection_set":{"kind":"selection_set","selections":[{"kind":"field","#,
                r#""directives":[],"alias":null,"name":{"kind":"name","value":"hello"},"#,
                r#""arguments":[],"selection_set":null}]},"operation":"query"}]}"#,
            ),
        );
    }

    #[test]
    fn variable_definitions_use_type_key() {
        let doc = mirror("mutation M($a: [Int!] = [1]) { a }");
        let DefinitionNode::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(serde_json::to_value(op.operation).unwrap(), json!("mutation"));
        assert_eq!(
            serde_json::to_value(&op.variable_definitions[0]).unwrap(),
            json!({
                "kind": "variable_definition",
                "variable": {"kind": "variable", "name": {"kind": "name", "value": "a"}},
                "type": {
                    "kind": "list_type",
                    "type": {
                        "kind": "non_null_type",
                        "type": {"kind": "named_type", "name": {"kind": "name", "value": "Int"}},
                    },
                },
                "default_value": {"kind": "list_value", "values": [{"kind": "int_value", "value": "1"}]},
                "directives": [],
            }),
        );
    }

    #[test]
    fn fragments_and_values() {
        let doc = mirror(r#"fragment F on T @d(x: {a: "b", c: null}) { ... { y } }"#);
        assert_eq!(
            serde_json::to_value(&doc.definitions[0]).unwrap(),
            json!({
                "kind": "fragment_definition",
                "name": {"kind": "name", "value": "F"},
                "directives": [{
                    "kind": "directive",
                    "name": {"kind": "name", "value": "d"},
                    "arguments": [{
                        "kind": "argument",
                        "name": {"kind": "name", "value": "x"},
                        "value": {
                            "kind": "object_value",
                            "fields": [
                                {
                                    "kind": "object_field",
                                    "name": {"kind": "name", "value": "a"},
                                    "value": {"kind": "string_value", "value": "b", "block": false},
                                },
                                {
                                    "kind": "object_field",
                                    "name": {"kind": "name", "value": "c"},
                                    "value": {"kind": "null_value"},
                                },
                            ],
                        },
                    }],
                }],
                "variable_definitions": null,
                "selection_set": {
                    "kind": "selection_set",
                    "selections": [{
                        "kind": "inline_fragment",
                        "directives": [],
                        "type_condition": null,
                        "selection_set": {
                            "kind": "selection_set",
                            "selections": [{
                                "kind": "field",
                                "directives": [],
                                "alias": null,
                                "name": {"kind": "name", "value": "y"},
                                "arguments": [],
                                "selection_set": null,
                            }],
                        },
                    }],
                },
                "type_condition": {"kind": "named_type", "name": {"kind": "name", "value": "T"}},
            }),
        );
    }
}
