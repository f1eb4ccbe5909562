use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use serde::Serialize;

pub const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

impl GraphQLTypeKind {
    /// The SDL keyword that introduces this kind of type.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Enum => "enum type",
            Self::InputObject => "input object type",
            Self::Interface => "interface type",
            Self::Object => "object type",
            Self::Scalar => "scalar type",
            Self::Union => "union type",
        }
    }
}

/// A named type defined by a schema (or built in).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
            Self::Interface(t) => &t.0.name,
            Self::Object(t) => &t.0.name,
            Self::Scalar(t) => &t.name,
            Self::Union(t) => &t.name,
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Enum(_) => GraphQLTypeKind::Enum,
            Self::InputObject(_) => GraphQLTypeKind::InputObject,
            Self::Interface(_) => GraphQLTypeKind::Interface,
            Self::Object(_) => GraphQLTypeKind::Object,
            Self::Scalar(_) => GraphQLTypeKind::Scalar,
            Self::Union(_) => GraphQLTypeKind::Union,
        }
    }

    /// Where the type was defined. Spans of built-in types point into the
    /// built-in SDL rather than into a user document.
    pub fn def_span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Enum(t) => t.span,
            Self::InputObject(t) => t.span,
            Self::Interface(t) => t.0.span,
            Self::Object(t) => t.0.span,
            Self::Scalar(t) => t.span,
            Self::Union(t) => t.span,
        }
    }

    pub fn directives(&self) -> &[ast::DirectiveAnnotation] {
        match self {
            Self::Enum(t) => &t.directives,
            Self::InputObject(t) => &t.directives,
            Self::Interface(t) => &t.0.directives,
            Self::Object(t) => &t.0.directives,
            Self::Scalar(t) => &t.directives,
            Self::Union(t) => &t.directives,
        }
    }

    pub(crate) fn directives_mut(&mut self) -> &mut Vec<ast::DirectiveAnnotation> {
        match self {
            Self::Enum(t) => &mut t.directives,
            Self::InputObject(t) => &mut t.directives,
            Self::Interface(t) => &mut t.0.directives,
            Self::Object(t) => &mut t.0.directives,
            Self::Scalar(t) => &mut t.directives,
            Self::Union(t) => &mut t.directives,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    /// Shared data of object and interface types.
    pub fn as_object_or_interface(&self) -> Option<&ObjectOrInterfaceTypeData> {
        match self {
            Self::Interface(t) => Some(&t.0),
            Self::Object(t) => Some(&t.0),
            _ => None,
        }
    }

    /// Declared fields of an object or interface type. Meta fields such as
    /// `__typename` are resolved by
    /// [`TypeRegistry::field`](crate::schema::TypeRegistry::field) instead.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        self.as_object_or_interface().map(|data| &data.fields)
    }

    pub fn is_builtin(&self) -> bool {
        let name = self.name();
        name.starts_with("__") || BUILTIN_SCALAR_NAMES.contains(&name)
    }

    /// Object, interface or union.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Scalar or enum.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }
}
