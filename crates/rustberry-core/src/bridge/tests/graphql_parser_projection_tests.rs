use super::parse;
use crate::bridge::GraphQLParserProjectionError;
use crate::bridge::to_graphql_parser_ast;
use graphql_parser::Pos;
use graphql_parser::query::Definition;
use graphql_parser::query::OperationDefinition;
use graphql_parser::query::Selection;
use graphql_parser::query::Type;
use graphql_parser::query::TypeCondition;
use graphql_parser::query::Value;

fn project(source: &str) -> graphql_parser::query::Document<'static, String> {
    to_graphql_parser_ast(&parse(source)).unwrap()
}

#[test]
fn shorthand_query_becomes_selection_set() {
    let doc = project("{ hello }");
    let [Definition::Operation(OperationDefinition::SelectionSet(set))] = doc.definitions.as_slice()
    else {
        panic!("expected a bare selection set, got {doc:?}");
    };
    let [Selection::Field(field)] = set.items.as_slice() else {
        panic!("expected one field");
    };
    assert_eq!(field.name, "hello");
    assert_eq!(field.position, Pos { line: 1, column: 3 });
    assert!(field.selection_set.items.is_empty());
}

#[test]
fn named_operations_keep_variables_and_directives() {
    let doc = project("query Q($id: ID! = 4, $ids: [ID]) @live { node(id: $id) { id } }");
    let [Definition::Operation(OperationDefinition::Query(query))] = doc.definitions.as_slice()
    else {
        panic!("expected a query, got {doc:?}");
    };
    assert_eq!(query.name.as_deref(), Some("Q"));
    assert_eq!(query.directives[0].name, "live");

    let id = &query.variable_definitions[0];
    assert_eq!(id.name, "id");
    assert_eq!(id.var_type, Type::NonNullType(Box::new(Type::NamedType("ID".to_string()))));
    assert_eq!(id.default_value, Some(Value::Int(4.into())));
    assert_eq!(
        query.variable_definitions[1].var_type,
        Type::ListType(Box::new(Type::NamedType("ID".to_string()))),
    );

    let Selection::Field(node) = &query.selection_set.items[0] else {
        panic!("expected a field");
    };
    assert_eq!(node.arguments, vec![("id".to_string(), Value::Variable("id".to_string()))]);
}

#[test]
fn mutations_subscriptions_and_fragments() {
    let doc = project(
        "mutation M { a } subscription { b } fragment F on T @d { ... on U { c } ...G }",
    );
    assert!(matches!(
        &doc.definitions[0],
        Definition::Operation(OperationDefinition::Mutation(m)) if m.name.as_deref() == Some("M"),
    ));
    assert!(matches!(
        &doc.definitions[1],
        Definition::Operation(OperationDefinition::Subscription(s)) if s.name.is_none(),
    ));
    let Definition::Fragment(frag) = &doc.definitions[2] else {
        panic!("expected a fragment");
    };
    assert_eq!(frag.name, "F");
    assert_eq!(frag.type_condition, TypeCondition::On("T".to_string()));
    assert_eq!(frag.directives[0].name, "d");
    let Selection::InlineFragment(inline) = &frag.selection_set.items[0] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(inline.type_condition, Some(TypeCondition::On("U".to_string())));
    let Selection::FragmentSpread(spread) = &frag.selection_set.items[1] else {
        panic!("expected a fragment spread");
    };
    assert_eq!(spread.fragment_name, "G");
}

#[test]
fn values_convert_and_objects_sort_by_key() {
    let doc = project(r#"{ f(o: {b: 1, a: [2.5, "s", null, E, false]}) }"#);
    let Definition::Operation(OperationDefinition::SelectionSet(set)) = &doc.definitions[0] else {
        panic!("expected a bare selection set");
    };
    let Selection::Field(field) = &set.items[0] else {
        panic!("expected a field");
    };
    let Value::Object(object) = &field.arguments[0].1 else {
        panic!("expected an object value");
    };
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(
        object["a"],
        Value::List(vec![
            Value::Float(2.5),
            Value::String("s".to_string()),
            Value::Null,
            Value::Enum("E".to_string()),
            Value::Boolean(false),
        ]),
    );
}

#[test]
fn projected_document_prints_as_parsable_graphql() {
    let doc = project("query Q($a: [Int!]!) { f(x: $a) @skip(if: false) { ... on T { g } } }");
    let printed = doc.to_string();
    assert!(graphql_parser::parse_query::<String>(&printed).is_ok(), "{printed}");
}

mod unrepresentable {
    use super::*;

    #[test]
    fn variable_directives_are_rejected() {
        let err = to_graphql_parser_ast(&parse("query Q($a: Int @d) { f(x: $a) }")).unwrap_err();
        assert!(matches!(
            &err,
            GraphQLParserProjectionError::VariableDirectives { variable_name, .. }
                if variable_name == "a",
        ));
        assert_eq!(err.span().byte_range(), 8..18);
    }

    #[test]
    fn ints_beyond_32_bits_are_rejected() {
        let err = to_graphql_parser_ast(&parse("{ f(x: 3000000000) }")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "integer `3000000000` does not fit the 32-bit integers graphql_parser can represent",
        );
    }
}
