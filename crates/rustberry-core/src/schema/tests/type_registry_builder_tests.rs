use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::schema::TypeRegistryBuilder;
use crate::schema::TypeValidationError;
use crate::schema::tests::build_errors;
use rustberry_parser::ast::DirectiveLocationKind;
use rustberry_parser::ast::OperationKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn minimal_query_schema_builds() -> Result<()> {
        let registry = TypeRegistry::from_sdl("type Query { hello: String }")?;

        assert_eq!(registry.root_type_name(OperationKind::Query), Some("Query"));
        assert_eq!(registry.root_type_name(OperationKind::Mutation), None);
        assert_eq!(registry.root_type_name(OperationKind::Subscription), None);
        assert_eq!(registry.directives().count(), 4);
        assert!(registry.lookup_type("String").is_some_and(|type_| type_.is_builtin()));
        assert!(registry.lookup_type("__Schema").is_some());

        let hello = registry.field("Query", "hello").unwrap();
        assert_eq!(hello.type_annotation.to_string(), "String");

        Ok(())
    }

    #[test]
    fn user_types_keep_definition_order() -> Result<()> {
        let registry = TypeRegistry::from_sdl("type Query { b: B } type B { a: A } enum A { X }")?;

        let user_types: Vec<&str> = registry
            .types()
            .filter(|type_| !type_.is_builtin())
            .map(|type_| type_.name())
            .collect();
        assert_eq!(user_types, vec!["Query", "B", "A"]);

        Ok(())
    }

    #[test]
    fn default_root_type_names_are_used() -> Result<()> {
        let registry = TypeRegistry::from_sdl(concat!(
            "type Query { a: Int }\n",
            "type Mutation { b: Int }\n",
            "type Subscription { c: Int }\n",
        ))?;

        assert_eq!(registry.root_type_name(OperationKind::Query), Some("Query"));
        assert_eq!(registry.root_type_name(OperationKind::Mutation), Some("Mutation"));
        assert_eq!(registry.root_type_name(OperationKind::Subscription), Some("Subscription"));
        assert_eq!(registry.root_type(OperationKind::Mutation).unwrap().0.name, "Mutation");

        Ok(())
    }

    #[test]
    fn schema_definition_names_root_types() -> Result<()> {
        let registry = TypeRegistry::from_sdl(concat!(
            "schema { query: Root mutation: Mut }\n",
            "type Root { a: Int }\n",
            "type Mut { b: Int }\n",
            "type Query { c: Int }\n",
        ))?;

        assert_eq!(registry.root_type_name(OperationKind::Query), Some("Root"));
        assert_eq!(registry.root_type_name(OperationKind::Mutation), Some("Mut"));
        assert_eq!(registry.root_type_name(OperationKind::Subscription), None);

        Ok(())
    }

    #[test]
    fn schema_extension_adds_root_type() -> Result<()> {
        let registry = TypeRegistry::from_sdl(concat!(
            "schema { query: Q }\n",
            "type Q { a: Int }\n",
            "type M { b: Int }\n",
            "extend schema { mutation: M }\n",
        ))?;

        assert_eq!(registry.root_type_name(OperationKind::Query), Some("Q"));
        assert_eq!(registry.root_type_name(OperationKind::Mutation), Some("M"));

        Ok(())
    }

    #[test]
    fn builder_merges_multiple_documents() -> Result<()> {
        let base = rustberry_parser::parse_schema("type Query { a: Int }")?;
        let ext = rustberry_parser::parse_schema("extend type Query { b: String }")?;

        let mut builder = TypeRegistryBuilder::new()?;
        builder.add_document(&base).add_document(&ext);
        let registry = builder.build()?;

        let fields: Vec<&String> = registry
            .lookup_type("Query")
            .and_then(|type_| type_.fields())
            .unwrap()
            .keys()
            .collect();
        assert_eq!(fields, vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn syntax_error_is_reported_as_parse_error() {
        let result = TypeRegistry::from_sdl("type Query {");

        assert!(matches!(result, Err(SchemaBuildError::Parse(_))));
    }
}

mod root_types {
    use super::*;

    #[test]
    fn missing_query_root_type() {
        let errors = build_errors("type Foo { a: Int }");

        assert_eq!(errors, vec![TypeValidationError::MissingQueryRootType]);
    }

    #[test]
    fn non_object_query_root_type() {
        let errors = build_errors("schema { query: Q } interface Q { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::NonObjectRootOperationType {
                operation: OperationKind::Query,
                type_name,
                ..
            } if type_name == "Q",
        ));
    }

    #[test]
    fn default_query_name_on_non_object_type() {
        let errors = build_errors("enum Query { A }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::NonObjectRootOperationType { type_name, .. } if type_name == "Query",
        ));
    }

    #[test]
    fn undefined_root_type() {
        let sdl = "schema { query: Nope }";
        let errors = build_errors(sdl);

        assert_eq!(errors.len(), 1);
        let TypeValidationError::UndefinedTypeName { undefined_type_name, ref_span } = &errors[0]
        else {
            panic!("unexpected error: {:?}", errors[0]);
        };
        assert_eq!(undefined_type_name, "Nope");
        assert_eq!(ref_span.slice(sdl), Some("Nope"));
    }

    #[test]
    fn duplicate_root_operation_type() {
        let errors = build_errors("schema { query: Q query: Q } type Q { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            TypeValidationError::DuplicateRootOperationType { operation: OperationKind::Query, .. },
        ));
    }

    #[test]
    fn duplicate_schema_definition() {
        let errors = build_errors("schema { query: Q } schema { mutation: Q } type Q { a: Int }");

        assert_eq!(errors.len(), 1);
        let TypeValidationError::DuplicateSchemaDefinition { def1, def2 } = errors[0] else {
            panic!("unexpected error: {:?}", errors[0]);
        };
        assert!(def1.start_inclusive.byte_offset() < def2.start_inclusive.byte_offset());
    }
}

mod definitions {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let errors = build_errors("type Query { a: Int } type Query { b: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::DuplicateDefinition { kind: "type", name, .. } if name == "Query",
        ));
    }

    #[test]
    fn redefined_builtin_scalar() {
        let errors = build_errors("scalar String\ntype Query { a: String }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::RedefinedBuiltin { kind: "scalar type", name, .. } if name == "String",
        ));
    }

    #[test]
    fn redefined_builtin_directive() {
        let errors = build_errors(concat!(
            "directive @skip(if: Boolean!) on FIELD\n",
            "type Query { a: Int }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::RedefinedBuiltin { kind: "directive", name, .. } if name == "skip",
        ));
    }

    #[test]
    fn duplicate_directive_definition() {
        let errors = build_errors(concat!(
            "directive @tag on OBJECT\n",
            "directive @tag on FIELD_DEFINITION\n",
            "type Query { a: Int }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::DuplicateDefinition { kind: "directive", name, .. } if name == "tag",
        ));
    }

    #[test]
    fn dunder_prefixed_type_name() {
        let errors = build_errors("type __Foo { a: Int } type Query { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidDunderPrefixedName { name, .. } if name == "__Foo",
        ));
    }

    #[test]
    fn duplicate_members() {
        let errors = build_errors(concat!(
            "type Query { a: Int a: String }\n",
            "enum E { A A }\n",
            "union U = Query | Query\n",
            "input I { x: Int x: Int }\n",
        ));

        let duplicates: Vec<(&str, &str)> = errors
            .iter()
            .map(|err| match err {
                TypeValidationError::DuplicateMember { parent, member_name, .. } =>
                    (parent.as_str(), member_name.as_str()),
                other => panic!("unexpected error: {other:?}"),
            })
            .collect();
        assert_eq!(duplicates, vec![("Query", "a"), ("E", "A"), ("U", "Query"), ("I", "x")]);
    }

    #[test]
    fn empty_types_are_rejected() {
        let errors = build_errors(concat!(
            "type Query { a: Int }\n",
            "type Empty\n",
            "interface Nothing\n",
            "union U\n",
            "enum E\n",
            "input I\n",
        ));

        let empty: Vec<(&str, &str, &str)> = errors
            .iter()
            .map(|err| match err {
                TypeValidationError::EmptyTypeDefinition { kind, type_name, what, .. } =>
                    (*kind, type_name.as_str(), *what),
                other => panic!("unexpected error: {other:?}"),
            })
            .collect();
        assert_eq!(empty, vec![
            ("object type", "Empty", "fields"),
            ("interface type", "Nothing", "fields"),
            ("union type", "U", "member types"),
            ("enum type", "E", "values"),
            ("input object type", "I", "fields"),
        ]);
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_adds_fields_and_interfaces() -> Result<()> {
        let registry = TypeRegistry::from_sdl(concat!(
            "type Query { a: Int }\n",
            "interface Node { id: ID! }\n",
            "extend type Query implements Node { id: ID! }\n",
        ))?;

        let query = registry.lookup_type("Query").and_then(|type_| type_.as_object()).unwrap();
        assert!(query.0.implements("Node"));
        assert!(query.0.fields.contains_key("id"));
        assert_eq!(registry.possible_types("Node"), vec!["Query"]);

        Ok(())
    }

    #[test]
    fn extensions_of_every_kind_merge() -> Result<()> {
        let registry = TypeRegistry::from_sdl(concat!(
            "type Query { a: Int }\n",
            "type Other { b: Int }\n",
            "scalar Date\n",
            "union U = Query\n",
            "enum E { A }\n",
            "input I { x: Int }\n",
            "extend scalar Date @specifiedBy(url: \"https://example.com/date\")\n",
            "extend union U = Other\n",
            "extend enum E { B }\n",
            "extend input I { y: Int }\n",
        ))?;

        assert_eq!(registry.lookup_type("Date").unwrap().directives().len(), 1);
        assert_eq!(registry.possible_types("U"), vec!["Query", "Other"]);
        let enum_values: Vec<&String> =
            registry.lookup_type("E").and_then(|t| t.as_enum()).unwrap().values.keys().collect();
        assert_eq!(enum_values, vec!["A", "B"]);
        let input_fields: Vec<&String> = registry
            .lookup_type("I")
            .and_then(|t| t.as_input_object())
            .unwrap()
            .fields
            .keys()
            .collect();
        assert_eq!(input_fields, vec!["x", "y"]);

        Ok(())
    }

    #[test]
    fn extension_fills_a_bodyless_type() -> Result<()> {
        let registry = TypeRegistry::from_sdl("type Query\nextend type Query { a: Int }")?;

        assert!(registry.field("Query", "a").is_some());

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let errors = build_errors("type Query { a: Int } extend type Missing { b: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::ExtensionOfUndefinedType { type_name, .. } if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_with_mismatched_kind() {
        let errors = build_errors("type Query { a: Int } enum E { A } extend type E { b: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::ExtensionKindMismatch {
                type_name,
                defined_kind: "enum type",
                extension_keyword: "type",
                ..
            } if type_name == "E",
        ));
    }

    #[test]
    fn extension_redefining_a_field() {
        let errors = build_errors("type Query { a: Int } extend type Query { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::DuplicateMember { parent, member_name, .. }
                if parent == "Query" && member_name == "a",
        ));
    }
}

mod directives {
    use super::*;

    #[test]
    fn custom_directive_definition() -> Result<()> {
        let registry = TypeRegistry::from_sdl(concat!(
            "directive @auth(role: String!) repeatable on FIELD_DEFINITION | OBJECT\n",
            "type Query @auth(role: \"a\") @auth(role: \"b\") { a: Int @auth(role: \"c\") }\n",
        ))?;

        let auth = registry.lookup_directive("auth").unwrap();
        assert!(auth.repeatable);
        assert!(!auth.is_builtin());
        assert_eq!(auth.locations, vec![
            DirectiveLocationKind::FieldDefinition,
            DirectiveLocationKind::Object,
        ]);
        assert!(auth.parameters["role"].is_required());
        assert_eq!(registry.lookup_type("Query").unwrap().directives().len(), 2);

        Ok(())
    }

    #[test]
    fn deprecated_field_reason() -> Result<()> {
        let registry = TypeRegistry::from_sdl(concat!(
            "type Query {\n",
            "  a: Int @deprecated(reason: \"use b\")\n",
            "  b: Int @deprecated\n",
            "  c: Int\n",
            "}\n",
        ))?;

        let field = |name| registry.field("Query", name).unwrap().deprecation_reason();
        assert_eq!(field("a").as_deref(), Some("use b"));
        assert_eq!(field("b").as_deref(), Some("No longer supported"));
        assert_eq!(field("c"), None);

        Ok(())
    }

    #[test]
    fn undefined_directive() {
        let errors = build_errors("type Query @nope { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::UndefinedDirective { directive_name, .. } if directive_name == "nope",
        ));
    }

    #[test]
    fn misplaced_directive() {
        let errors = build_errors("type Query { a: Int @specifiedBy(url: \"x\") }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::MisplacedDirective {
                directive_name,
                location: DirectiveLocationKind::FieldDefinition,
                ..
            } if directive_name == "specifiedBy",
        ));
    }

    #[test]
    fn repeated_non_repeatable_directive() {
        let errors = build_errors("directive @tag on OBJECT\ntype Query @tag @tag { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::RepeatedNonRepeatableDirective { directive_name, .. }
                if directive_name == "tag",
        ));
    }

    #[test]
    fn directive_repeated_through_an_extension() {
        let errors = build_errors(concat!(
            "directive @tag on OBJECT\n",
            "type Query @tag { a: Int }\n",
            "extend type Query @tag\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], TypeValidationError::RepeatedNonRepeatableDirective { .. }));
    }

    #[test]
    fn directive_parameter_with_output_type() {
        let errors = build_errors("directive @d(arg: Query) on FIELD\ntype Query { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidInputValueWithOutputType { input_path, invalid_type_name, .. }
                if input_path == "@d(arg:)" && invalid_type_name == "Query",
        ));
    }
}
