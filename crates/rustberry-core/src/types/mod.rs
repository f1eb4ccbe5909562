mod directive;
mod graphql_type;
mod input_object_type_validator;
mod input_value;
mod named_types;
mod object_or_interface_type_data;
mod object_or_interface_type_validator;
mod subtyping;
mod union_type_validator;

pub use directive::BUILTIN_DIRECTIVE_NAMES;
pub use directive::Directive;
pub use graphql_type::BUILTIN_SCALAR_NAMES;
pub use graphql_type::GraphQLType;
pub use graphql_type::GraphQLTypeKind;
pub(crate) use input_object_type_validator::InputObjectTypeValidator;
pub use input_value::InputValue;
pub use named_types::EnumType;
pub use named_types::EnumValue;
pub use named_types::InputObjectType;
pub use named_types::ScalarType;
pub use named_types::UnionType;
pub use object_or_interface_type_data::Field;
pub use object_or_interface_type_data::InterfaceType;
pub use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_data::ObjectType;
pub(crate) use object_or_interface_type_data::deprecation_reason;
pub(crate) use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub(crate) use subtyping::is_possible_type;
pub(crate) use subtyping::is_subtype;
pub(crate) use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
