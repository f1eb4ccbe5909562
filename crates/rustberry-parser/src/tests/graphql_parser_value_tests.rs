use crate::GraphQLParseErrorKind;
use crate::GraphQLStringParsingError;
use crate::ast;
use crate::tests::utils::first_argument_value;
use crate::tests::utils::parse_executable_err;

#[test]
fn scalar_literals() {
    assert!(matches!(first_argument_value("{ f(a: -7) }", "a"), ast::Value::Int(v) if v.as_i32() == Some(-7)));
    assert!(matches!(first_argument_value("{ f(a: 2.5e1) }", "a"), ast::Value::Float(v) if v.as_f64() == Some(25.0)));
    assert!(matches!(first_argument_value("{ f(a: true) }", "a"), ast::Value::Boolean(v) if v.value));
    assert!(matches!(first_argument_value("{ f(a: null) }", "a"), ast::Value::Null(_)));
    assert!(matches!(first_argument_value("{ f(a: RED) }", "a"), ast::Value::Enum(v) if v.value == "RED"));
    assert!(matches!(first_argument_value("{ f(a: $v) }", "a"), ast::Value::Variable(v) if v.name.value == "v"));
}

#[test]
fn int_out_of_range_still_parses() {
    let value = first_argument_value("{ f(a: 99999999999) }", "a");
    let ast::Value::Int(int) = value else {
        panic!("expected an int");
    };
    assert_eq!(int.raw, "99999999999");
    assert_eq!(int.as_i32(), None);
}

#[test]
fn strings_are_cooked() {
    let ast::Value::String(simple) =
        first_argument_value(r#"{ f(a: "tab\there é 😀") }"#, "a")
    else {
        panic!("expected a string");
    };
    assert_eq!(simple.value, "tab\there é 😀");
    assert!(!simple.block);

    let ast::Value::String(block) =
        first_argument_value("{ f(a: \"\"\"\n    line one\n      line two\n  \"\"\") }", "a")
    else {
        panic!("expected a string");
    };
    assert_eq!(block.value, "line one\n  line two");
    assert!(block.block);
}

#[test]
fn lists_and_objects() {
    let value = first_argument_value(r#"{ f(a: [1, "two", {x: [$v], y: {z: null}}]) }"#, "a");
    let ast::Value::List(list) = &value else {
        panic!("expected a list");
    };
    assert_eq!(list.values.len(), 3);
    let ast::Value::Object(object) = &list.values[2] else {
        panic!("expected an object");
    };
    assert_eq!(object.fields[0].name.value, "x");
    assert_eq!(object.fields[1].name.value, "y");

    let mut variables = Vec::new();
    value.for_each_variable(&mut |var| variables.push(var.name.value.clone()));
    assert_eq!(variables, vec!["v"]);
    assert_eq!(value.to_string(), r#"[1, "two", {x: [$v], y: {z: null}}]"#);
}

#[test]
fn empty_list_and_object_are_allowed() {
    assert!(matches!(first_argument_value("{ f(a: []) }", "a"), ast::Value::List(v) if v.values.is_empty()));
    assert!(matches!(first_argument_value("{ f(a: {}) }", "a"), ast::Value::Object(v) if v.fields.is_empty()));
}

#[test]
fn invalid_escape_is_a_value_error() {
    let err = parse_executable_err(r#"{ f(a: "\q") }"#);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::InvalidValue(
            GraphQLStringParsingError::InvalidEscapeSequence("\\q".to_string()),
        ),
    );
}

#[test]
fn empty_argument_list_is_an_error() {
    let err = parse_executable_err("{ f() }");
    assert_eq!(err.message(), "argument list cannot be empty");
}

#[test]
fn deeply_nested_list_is_rejected() {
    let source = format!("{{ f(a: {}1{}) }}", "[".repeat(80), "]".repeat(80));
    let err = parse_executable_err(&source);
    assert!(err.message().starts_with("maximum nesting depth"));
}
