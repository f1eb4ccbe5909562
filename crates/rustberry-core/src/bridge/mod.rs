//! Projections of a parsed executable document for execution engines.
//!
//! The internal [`ast`](rustberry_parser::ast) stays the only authoritative
//! representation. Everything here is derived from it on demand, and every
//! call allocates a fresh output that shares nothing with earlier calls:
//!
//! - [`CompactDocument`]: interned strings and flat arenas, for fast
//!   traversal and for hand-off across process boundaries.
//! - [`mirror::DocumentNode`]: nodes named and shaped like graphql-core's
//!   `graphql.language.ast`, printable back to source with
//!   [`mirror::print_ast()`].
//! - [`to_graphql_parser_ast()`]: the `graphql_parser` crate's query AST.

mod compact;
mod compact_ast_codec_error;
mod graphql_parser_projection;
pub mod mirror;

pub use compact::CompactArgument;
pub use compact::CompactDefinition;
pub use compact::CompactDirective;
pub use compact::CompactDocument;
pub use compact::CompactField;
pub use compact::CompactFragment;
pub use compact::CompactName;
pub use compact::CompactObjectField;
pub use compact::CompactOperation;
pub use compact::CompactSelection;
pub use compact::CompactType;
pub use compact::CompactValue;
pub use compact::CompactValueKind;
pub use compact::CompactVariableDefinition;
pub use compact::SelectionRange;
pub use compact::StrId;
pub use compact_ast_codec_error::CompactAstCodecError;
pub use graphql_parser_projection::GraphQLParserProjectionError;
pub use graphql_parser_projection::to_graphql_parser_ast;

use rustberry_parser::ast;

/// Builds the compact form of `document`.
pub fn to_internal_ast(document: &ast::ExecutableDocument) -> CompactDocument {
    CompactDocument::from_document(document)
}

/// Builds the graphql-core shaped form of `document`.
pub fn to_mirrored_ast(document: &ast::ExecutableDocument) -> mirror::DocumentNode {
    mirror::DocumentNode::from(document)
}

#[cfg(test)]
mod tests;
