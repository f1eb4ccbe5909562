use crate::DocumentKind;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseErrorKind;
use crate::ast;
use crate::ast::DirectiveLocationKind;
use crate::tests::utils::parse_schema_err;
use crate::tests::utils::parse_schema_ok;

fn only_type(doc: &ast::SchemaDocument) -> &ast::TypeDefinition {
    match doc.definitions.as_slice() {
        [ast::TypeSystemDefinition::Type(def)] => def,
        other => panic!("expected exactly one type definition, found {other:?}"),
    }
}

#[test]
fn object_type_with_description_and_arguments() {
    let source = r#"
        """
        The root type.
        """
        type Query implements & Node & Entity @key(fields: "id") {
          "Looks up a user."
          user(id: ID!, first: Int = 10): User @deprecated
        }
    "#;
    let doc = parse_schema_ok(source);
    let ast::TypeDefinition::Object(query) = only_type(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(query.name.value, "Query");
    let description = query.description.as_ref().unwrap();
    assert_eq!(description.value, "The root type.");
    assert!(description.block);
    assert_eq!(
        query.implements.iter().map(|name| name.value.as_str()).collect::<Vec<_>>(),
        vec!["Node", "Entity"],
    );
    assert_eq!(query.directives[0].name.value, "key");

    let user = &query.fields[0];
    assert_eq!(user.description.as_ref().unwrap().value, "Looks up a user.");
    assert_eq!(user.field_type.to_string(), "User");
    assert_eq!(user.arguments.len(), 2);
    assert_eq!(user.arguments[0].value_type.to_string(), "ID!");
    assert!(matches!(
        &user.arguments[1].default_value,
        Some(ast::Value::Int(int)) if int.as_i32() == Some(10)
    ));
    assert_eq!(user.directives[0].name.value, "deprecated");

    // The type's span starts at its description.
    assert!(query.span.slice(source).unwrap().starts_with("\"\"\"\n"));
}

#[test]
fn all_type_kinds() {
    let doc = parse_schema_ok(r#"
        scalar DateTime @specifiedBy(url: "https://example.com")
        interface Node implements Entity { id: ID! }
        union SearchResult = | User | Post
        enum Role { ADMIN @deprecated MEMBER }
        input Filter { role: Role = MEMBER, tags: [String!] = ["a"] }
    "#);
    let keywords: Vec<_> = doc
        .definitions
        .iter()
        .map(|def| match def {
            ast::TypeSystemDefinition::Type(def) => def.keyword(),
            other => panic!("unexpected definition {other:?}"),
        })
        .collect();
    assert_eq!(keywords, vec!["scalar", "interface", "union", "enum", "input"]);

    let ast::TypeSystemDefinition::Type(ast::TypeDefinition::Union(union)) = &doc.definitions[2]
    else {
        panic!("expected a union");
    };
    assert_eq!(union.members.len(), 2);

    let ast::TypeSystemDefinition::Type(ast::TypeDefinition::Enum(role)) = &doc.definitions[3]
    else {
        panic!("expected an enum");
    };
    assert_eq!(role.values[0].directives[0].name.value, "deprecated");
    assert_eq!(role.values[1].name.value, "MEMBER");
}

#[test]
fn schema_definition() {
    let doc = parse_schema_ok("schema @a { query: Q mutation: M subscription: S }");
    let [ast::TypeSystemDefinition::Schema(schema)] = doc.definitions.as_slice() else {
        panic!("expected a schema definition");
    };
    let roots: Vec<_> = schema
        .root_operations
        .iter()
        .map(|root| (root.operation_kind, root.named_type.value.as_str()))
        .collect();
    assert_eq!(
        roots,
        vec![
            (ast::OperationKind::Query, "Q"),
            (ast::OperationKind::Mutation, "M"),
            (ast::OperationKind::Subscription, "S"),
        ],
    );
}

#[test]
fn directive_definition() {
    let doc = parse_schema_ok(
        "directive @cache(maxAge: Int) repeatable on | FIELD_DEFINITION | OBJECT",
    );
    let [ast::TypeSystemDefinition::Directive(directive)] = doc.definitions.as_slice() else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name.value, "cache");
    assert!(directive.repeatable);
    assert_eq!(
        directive.locations.iter().map(|loc| loc.kind).collect::<Vec<_>>(),
        vec![DirectiveLocationKind::FieldDefinition, DirectiveLocationKind::Object],
    );
}

#[test]
fn extensions_of_every_kind() {
    let doc = parse_schema_ok(r#"
        extend schema @a { mutation: M }
        extend scalar S @b
        extend type T implements I
        extend interface I { f: Int }
        extend union U = V
        extend enum E { X }
        extend input In @c
    "#);
    assert!(matches!(doc.definitions[0], ast::TypeSystemDefinition::SchemaExtension(_)));
    for def in &doc.definitions[1..] {
        assert!(matches!(def, ast::TypeSystemDefinition::TypeExtension(_)));
    }
}

#[test]
fn empty_extension_is_an_error() {
    let err = parse_schema_err("extend type Foo");
    assert_eq!(err.message(), "`extend type` must add interfaces, directives or fields");
}

#[test]
fn extension_with_description_is_an_error() {
    let err = parse_schema_err("\"doc\" extend scalar S @a");
    assert_eq!(err.message(), "extensions cannot have descriptions");
}

#[test]
fn empty_fields_definition_is_an_error() {
    let err = parse_schema_err("type Query {}");
    assert_eq!(err.message(), "field definitions cannot be empty");
}

#[test]
fn operations_are_rejected() {
    let err = parse_schema_err("type Query { a: Int } query { a }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::WrongDocumentKind {
            document_kind: DocumentKind::Schema,
            ..
        }
    ));
}

#[test]
fn enum_value_cannot_be_a_keyword_literal() {
    let err = parse_schema_err("enum Bool { true false }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::ReservedName { name } if name == "true"
    ));
}

#[test]
fn unknown_directive_location_suggests_a_fix() {
    let err = parse_schema_err("directive @d on FIELDS");
    assert_eq!(err.message(), "unknown directive location `FIELDS`");
    let help = &err.notes()[0];
    assert_eq!(help.kind, GraphQLErrorNoteKind::Help);
    assert_eq!(help.message, "did you mean `FIELD`?");
}

#[test]
fn variables_are_rejected_in_schema_directives() {
    let err = parse_schema_err("type Query { a: Int @d(x: $v) }");
    assert_eq!(err.message(), "variables are not allowed in const directive arguments");
}

#[test]
fn missing_colon_in_field_definition() {
    let err = parse_schema_err("type User { name String }");
    assert_eq!(err.message(), "expected `:`, found `String`");
}
