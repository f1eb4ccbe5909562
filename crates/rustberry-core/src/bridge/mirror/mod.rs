//! Nodes named and shaped after graphql-core's `graphql.language.ast`.
//!
//! Each node carries the same fields, in the same order, as its graphql-core
//! counterpart, reports the same `kind` tag and lists the same `keys`.
//! Serializing a node with serde produces the dictionary graphql-core's
//! `ast_to_dict()` returns for the equivalent node (without locations).
//!
//! ```
//! use rustberry_core::bridge::mirror;
//!
//! let document = rustberry_parser::parse_executable("{ hello }").unwrap();
//! let mirrored = mirror::DocumentNode::from(&document);
//!
//! assert_eq!(mirrored.kind(), "document");
//! assert_eq!(mirror::print_ast(&mirrored), "{\n  hello\n}");
//! ```

mod from_ast;
mod nodes;
mod printer;

pub use nodes::ArgumentNode;
pub use nodes::BooleanValueNode;
pub use nodes::DefinitionNode;
pub use nodes::DirectiveNode;
pub use nodes::DocumentNode;
pub use nodes::EnumValueNode;
pub use nodes::FieldNode;
pub use nodes::FloatValueNode;
pub use nodes::FragmentDefinitionNode;
pub use nodes::FragmentSpreadNode;
pub use nodes::InlineFragmentNode;
pub use nodes::IntValueNode;
pub use nodes::ListTypeNode;
pub use nodes::ListValueNode;
pub use nodes::Location;
pub use nodes::MirrorNode;
pub use nodes::NameNode;
pub use nodes::NamedTypeNode;
pub use nodes::NonNullTypeNode;
pub use nodes::NullValueNode;
pub use nodes::ObjectFieldNode;
pub use nodes::ObjectValueNode;
pub use nodes::OperationDefinitionNode;
pub use nodes::OperationType;
pub use nodes::SelectionNode;
pub use nodes::SelectionSetNode;
pub use nodes::StringValueNode;
pub use nodes::TypeNode;
pub use nodes::ValueNode;
pub use nodes::VariableDefinitionNode;
pub use nodes::VariableNode;
pub use printer::print_ast;
