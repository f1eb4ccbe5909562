use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::ast;

pub fn parse_executable_ok(source: &str) -> ast::ExecutableDocument {
    GraphQLParser::new(source)
        .parse_executable_document()
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(source, None)))
}

pub fn parse_executable_err(source: &str) -> GraphQLParseError {
    GraphQLParser::new(source).parse_executable_document().unwrap_err()
}

pub fn parse_schema_ok(source: &str) -> ast::SchemaDocument {
    GraphQLParser::new(source)
        .parse_schema_document()
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(source, None)))
}

pub fn parse_schema_err(source: &str) -> GraphQLParseError {
    GraphQLParser::new(source).parse_schema_document().unwrap_err()
}

pub fn only_operation(doc: &ast::ExecutableDocument) -> &ast::OperationDefinition {
    let mut operations = doc.operations();
    let op = operations.next().unwrap();
    assert!(operations.next().is_none());
    op
}

pub fn field_at(selection_set: &ast::SelectionSet, idx: usize) -> &ast::Field {
    match &selection_set.selections[idx] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field at {idx}, found {other:?}"),
    }
}

/// The value of the `name` argument of the first field of the only
/// operation.
pub fn first_argument_value(source: &str, name: &str) -> ast::Value {
    let doc = parse_executable_ok(source);
    let field = field_at(&only_operation(&doc).selection_set, 0);
    field.argument(name).unwrap().value.clone()
}
