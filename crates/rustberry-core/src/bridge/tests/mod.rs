mod graphql_parser_projection_tests;
mod mirror_tests;
mod round_trip_tests;

use rustberry_parser::ast;

pub(super) fn parse(source: &str) -> ast::ExecutableDocument {
    rustberry_parser::parse_executable(source).unwrap()
}
