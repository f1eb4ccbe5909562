//! Nodes used by both executable and schema documents.

use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Value;
use crate::ast::ast_node::impl_ast_node;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A GraphQL [name](https://spec.graphql.org/October2021/#Name).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Name {
    pub value: String,
    pub span: GraphQLSourceSpan,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// `name: value` inside the parentheses of a field or directive.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: GraphQLSourceSpan,
}

/// An applied directive, e.g. `@include(if: $flag)`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DirectiveAnnotation {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub span: GraphQLSourceSpan,
}

/// A type reference such as `String`, `[Int!]` or `[[ID]!]!`.
///
/// Non-nullability is a flag on each level rather than a wrapper node, which
/// makes `T!!` unrepresentable.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TypeAnnotation {
    Named(NamedTypeAnnotation),
    List(ListTypeAnnotation),
}

impl TypeAnnotation {
    pub fn nullable(&self) -> bool {
        match self {
            Self::Named(named) => named.nullable,
            Self::List(list) => list.nullable,
        }
    }

    /// The name at the bottom of any list wrappers.
    pub fn innermost_name(&self) -> &Name {
        match self {
            Self::Named(named) => &named.name,
            Self::List(list) => list.element_type.innermost_name(),
        }
    }

    /// Structural equality that ignores spans.
    pub fn is_equivalent_to(&self, other: &TypeAnnotation) -> bool {
        match (self, other) {
            (Self::Named(a), Self::Named(b)) =>
                a.nullable == b.nullable && a.name.value == b.name.value,
            (Self::List(a), Self::List(b)) =>
                a.nullable == b.nullable && a.element_type.is_equivalent_to(&b.element_type),
            _ => false,
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Named(named) => named.span,
            Self::List(list) => list.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nullable = match self {
            Self::Named(named) => {
                write!(f, "{}", named.name)?;
                named.nullable
            },
            Self::List(list) => {
                write!(f, "[{}]", list.element_type)?;
                list.nullable
            },
        };
        if !nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NamedTypeAnnotation {
    pub name: Name,
    pub nullable: bool,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ListTypeAnnotation {
    pub element_type: Box<TypeAnnotation>,
    pub nullable: bool,
    pub span: GraphQLSourceSpan,
}

impl_ast_node!(
    Name,
    Argument,
    DirectiveAnnotation,
    NamedTypeAnnotation,
    ListTypeAnnotation,
);
