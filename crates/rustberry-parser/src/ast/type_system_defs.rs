//! Nodes of [type-system documents](https://spec.graphql.org/October2021/#TypeSystemDocument).
//!
//! Extensions (`extend type Foo ...`) reuse the definition node of their
//! kind; [`TypeSystemDefinition`] records whether a node defines or extends.
//! Extension nodes never carry a description.

use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::DirectiveLocation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::ast_node::impl_ast_node;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SchemaDocument {
    pub definitions: Vec<TypeSystemDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TypeSystemDefinition {
    Schema(SchemaDefinition),
    SchemaExtension(SchemaDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeDefinition),
    Directive(DirectiveDefinition),
}

#[inherent]
impl AstNode for TypeSystemDefinition {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Schema(def) | Self::SchemaExtension(def) => def.span,
            Self::Type(def) | Self::TypeExtension(def) => def.span(),
            Self::Directive(def) => def.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

/// `schema @directives { query: Query ... }`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,
    pub directives: Vec<DirectiveAnnotation>,
    pub root_operations: Vec<RootOperationTypeDefinition>,
    pub span: GraphQLSourceSpan,
}

/// `query: Query` inside a schema definition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RootOperationTypeDefinition {
    pub operation_kind: OperationKind,
    pub named_type: Name,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &Name {
        match self {
            Self::Scalar(def) => &def.name,
            Self::Object(def) => &def.name,
            Self::Interface(def) => &def.name,
            Self::Union(def) => &def.name,
            Self::Enum(def) => &def.name,
            Self::InputObject(def) => &def.name,
        }
    }

    pub fn description(&self) -> Option<&StringValue> {
        match self {
            Self::Scalar(def) => def.description.as_ref(),
            Self::Object(def) => def.description.as_ref(),
            Self::Interface(def) => def.description.as_ref(),
            Self::Union(def) => def.description.as_ref(),
            Self::Enum(def) => def.description.as_ref(),
            Self::InputObject(def) => def.description.as_ref(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Scalar(def) => &def.directives,
            Self::Object(def) => &def.directives,
            Self::Interface(def) => &def.directives,
            Self::Union(def) => &def.directives,
            Self::Enum(def) => &def.directives,
            Self::InputObject(def) => &def.directives,
        }
    }

    /// The SDL keyword introducing this kind of definition.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Object(_) => "type",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input",
        }
    }
}

#[inherent]
impl AstNode for TypeDefinition {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Scalar(def) => def.span,
            Self::Object(def) => def.span,
            Self::Interface(def) => def.span,
            Self::Union(def) => def.span,
            Self::Enum(def) => def.span,
            Self::InputObject(def) => def.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScalarTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub implements: Vec<Name>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InterfaceTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub implements: Vec<Name>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnionTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<Name>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValueDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
    pub span: GraphQLSourceSpan,
}

/// A field of an object or interface type.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

/// An argument definition or an input object field.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

/// `directive @name(args) repeatable on LOCATION | ...`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DirectiveDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub span: GraphQLSourceSpan,
}

impl_ast_node!(
    SchemaDocument,
    SchemaDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    DirectiveDefinition,
    crate::ast::DirectiveLocation,
);
