//! The internal AST produced by [`GraphQLParser`](crate::GraphQLParser).
//!
//! Nodes own their strings, so a parsed document outlives the source text it
//! came from. Every node carries a [`GraphQLSourceSpan`](crate::GraphQLSourceSpan)
//! covering all the tokens it was built from.
//!
//! Executable documents ([`ExecutableDocument`]) and schema documents
//! ([`SchemaDocument`]) share the node types in [`shared_nodes`] and
//! [`values`].

mod ast_node;
mod directive_location;
mod executable_defs;
mod shared_nodes;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use directive_location::DirectiveLocation;
pub use directive_location::DirectiveLocationKind;
pub use executable_defs::ExecutableDefinition;
pub use executable_defs::ExecutableDocument;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationKind;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::TypeCondition;
pub use executable_defs::VariableDefinition;
pub use shared_nodes::Argument;
pub use shared_nodes::DirectiveAnnotation;
pub use shared_nodes::ListTypeAnnotation;
pub use shared_nodes::Name;
pub use shared_nodes::NamedTypeAnnotation;
pub use shared_nodes::TypeAnnotation;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::SchemaDocument;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::TypeSystemDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::VariableValue;
