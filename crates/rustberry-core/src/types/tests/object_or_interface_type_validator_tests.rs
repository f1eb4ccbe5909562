use crate::schema::TypeValidationError;
use crate::types::tests::type_errors;

mod interface_implementations {
    use super::*;

    #[test]
    fn covariant_implementation_validates() {
        let errors = type_errors(concat!(
            "interface Node { id: ID parent: Node children(first: Int): [Node] }\n",
            "type User implements Node { id: ID! parent: User children(first: Int, after: String): [User!]! }\n",
            "type Query { user: User }\n",
        ));

        assert_eq!(errors, vec![]);
    }

    #[test]
    fn missing_interface_field() {
        let errors = type_errors(concat!(
            "interface Node { id: ID! }\n",
            "type User implements Node { name: String }\n",
            "type Query { user: User }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::MissingInterfaceSpecifiedField { type_name, interface_name, field_name, .. }
                if type_name == "User" && interface_name == "Node" && field_name == "id",
        ));
    }

    #[test]
    fn field_type_must_be_a_subtype() {
        let errors = type_errors(concat!(
            "interface Node { id: ID! }\n",
            "type User implements Node { id: ID }\n",
            "type Query { user: User }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                expected_field_type,
                invalid_field_type,
                ..
            } if expected_field_type == "ID!" && invalid_field_type == "ID",
        ));
    }

    #[test]
    fn missing_interface_field_parameter() {
        let errors = type_errors(concat!(
            "interface I { f(a: Int): Int }\n",
            "type T implements I { f: Int }\n",
            "type Query { t: T }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::MissingInterfaceSpecifiedFieldParameter { missing_parameter_name, .. }
                if missing_parameter_name == "a",
        ));
    }

    #[test]
    fn parameter_types_must_match_exactly() {
        let errors = type_errors(concat!(
            "interface I { f(a: Int): Int }\n",
            "type T implements I { f(a: Int!): Int }\n",
            "type Query { t: T }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                expected_parameter_type,
                invalid_parameter_type,
                ..
            } if expected_parameter_type == "Int" && invalid_parameter_type == "Int!",
        ));
    }

    #[test]
    fn additional_parameters_must_be_optional() {
        let errors = type_errors(concat!(
            "interface I { f: Int }\n",
            "type T implements I { f(b: Int!, c: Int, d: Int! = 1): Int }\n",
            "type Query { t: T }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                parameter_name,
                ..
            } if parameter_name == "b",
        ));
    }

    #[test]
    fn interface_cannot_implement_itself() {
        let errors = type_errors("interface I implements I { f: Int } type Query { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::SelfImplementingInterface { type_name, .. } if type_name == "I",
        ));
    }

    #[test]
    fn implements_undefined_interface() {
        let errors = type_errors("type Query implements Nope { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::ImplementsUndefinedInterface { undefined_interface_name, .. }
                if undefined_interface_name == "Nope",
        ));
    }

    #[test]
    fn implements_non_interface_type() {
        let errors = type_errors("type Query implements Other { a: Int } type Other { a: Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::ImplementsNonInterfaceType { non_interface_type_name, .. }
                if non_interface_type_name == "Other",
        ));
    }

    #[test]
    fn transitively_implemented_interfaces_must_be_listed() {
        let errors = type_errors(concat!(
            "interface A { a: Int }\n",
            "interface B implements A { a: Int }\n",
            "type T implements B { a: Int }\n",
            "type Query { t: T }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::MissingRecursiveInterfaceImplementation {
                type_name,
                inheritance_path,
                missing_recursive_interface_name,
                ..
            } if type_name == "T"
                && inheritance_path == &vec!["B".to_string()]
                && missing_recursive_interface_name == "A",
        ));
    }

    #[test]
    fn listing_every_transitive_interface_validates() {
        let errors = type_errors(concat!(
            "interface A { a: Int }\n",
            "interface B implements A { a: Int }\n",
            "type T implements B & A { a: Int }\n",
            "type Query { t: T }\n",
        ));

        assert_eq!(errors, vec![]);
    }
}

mod field_types {
    use super::*;

    #[test]
    fn output_field_with_input_type() {
        let errors = type_errors("input In { a: Int } type Query { f: In }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidOutputFieldWithInputType {
                parent_type_name,
                field_name,
                invalid_type_name,
                ..
            } if parent_type_name == "Query" && field_name == "f" && invalid_type_name == "In",
        ));
    }

    #[test]
    fn parameter_with_output_type() {
        let errors = type_errors("type Query { f(a: Query): Int }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidInputValueWithOutputType { input_path, .. }
                if input_path == "Query.f(a:)",
        ));
    }

    #[test]
    fn field_with_undefined_type() {
        let sdl = "type Query { f: [Missing!] }";
        let errors = type_errors(sdl);

        assert_eq!(errors.len(), 1);
        let TypeValidationError::UndefinedTypeName { ref_span, .. } = &errors[0] else {
            panic!("unexpected error: {:?}", errors[0]);
        };
        assert_eq!(ref_span.slice(sdl), Some("Missing"));
    }
}
