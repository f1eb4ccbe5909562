use crate::RuleId;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;

fn build_err(sdl: &str) -> SchemaBuildError {
    TypeRegistry::from_sdl(sdl).unwrap_err()
}

#[test]
fn parse_error_becomes_one_syntax_diagnostic() {
    let diagnostics = build_err("type Query {").to_diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, RuleId::Syntax);
}

#[test]
fn each_type_error_becomes_a_diagnostic() {
    let sdl = "type Query { a: Missing b: AlsoMissing }";
    let diagnostics = build_err(sdl).to_diagnostics();

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|diagnostic| diagnostic.rule == RuleId::SchemaBuild));
    assert_eq!(diagnostics[0].message, "unknown type `Missing`");
    assert_eq!(diagnostics[0].spans[0].slice(sdl), Some("Missing"));
    assert_eq!(diagnostics[1].spans[0].slice(sdl), Some("AlsoMissing"));
}

#[test]
fn duplicate_definition_points_at_both_definitions() {
    let sdl = "type Query { a: Int }\ntype Query { b: Int }";
    let diagnostics = build_err(sdl).to_diagnostics();

    assert_eq!(diagnostics.len(), 1);
    let locations = diagnostics[0].locations();
    assert_eq!((locations[0].line, locations[0].column), (2, 1));
    assert_eq!((locations[1].line, locations[1].column), (1, 1));
}

#[test]
fn missing_query_root_has_no_location() {
    let diagnostics = build_err("type Foo { a: Int }").to_diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].spans.is_empty());
    assert_eq!(diagnostics[0].to_string(), "the schema has no query root operation type [schema-build]");
}

#[test]
fn error_message_lists_every_problem() {
    let err = build_err("type Query { a: Missing } extend type Nope { b: Int }");

    assert_eq!(
        err.to_string(),
        "schema is invalid (2 errors): cannot extend `Nope` because it is not defined; \
         unknown type `Missing`",
    );
}
