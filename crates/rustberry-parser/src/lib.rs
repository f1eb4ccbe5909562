//! A GraphQL lexer and recursive descent parser for schema documents and
//! executable documents.
//!
//! Parsing stops at the first lexical or syntax error and reports it as a
//! single [`GraphQLParseError`]. Both document grammars share one
//! sub-grammar for values, directive annotations and type annotations.
//!
//! ```
//! use rustberry_parser::GraphQLParser;
//!
//! let doc = GraphQLParser::new("query Hello { hello }")
//!     .parse_executable_document()
//!     .unwrap();
//! assert_eq!(doc.operations().count(), 1);
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod source_position;
mod string_value_cooking;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::DocumentKind;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;
pub use string_value_cooking::cook_block_string_value;
pub use string_value_cooking::cook_string_value;
pub use string_value_cooking::print_string_literal;

/// Parses an executable document from a string.
pub fn parse_executable(source: &str) -> Result<ast::ExecutableDocument, GraphQLParseError> {
    GraphQLParser::new(source).parse_executable_document()
}

/// Parses a schema document from a string.
pub fn parse_schema(source: &str) -> Result<ast::SchemaDocument, GraphQLParseError> {
    GraphQLParser::new(source).parse_schema_document()
}

#[cfg(test)]
mod tests;
