use crate::types::InputValue;
use indexmap::IndexMap;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use serde::Serialize;

/// Everything object types and interface types have in common.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectOrInterfaceTypeData {
    pub name: String,
    pub description: Option<String>,
    /// Implemented interfaces, in declaration order (extensions appended).
    pub interfaces: Vec<ast::Name>,
    pub fields: IndexMap<String, Field>,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

impl ObjectOrInterfaceTypeData {
    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|name| name.value.as_str()).collect()
    }

    pub fn implements(&self, iface_name: &str) -> bool {
        self.interfaces.iter().any(|name| name.value == iface_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectType(pub ObjectOrInterfaceTypeData);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterfaceType(pub ObjectOrInterfaceTypeData);

/// An output field of an object or interface type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub parameters: IndexMap<String, InputValue>,
    pub type_annotation: ast::TypeAnnotation,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

impl Field {
    /// The `reason:` of an `@deprecated` annotation, or its default.
    pub fn deprecation_reason(&self) -> Option<String> {
        deprecation_reason(&self.directives)
    }
}

pub(crate) fn deprecation_reason(directives: &[ast::DirectiveAnnotation]) -> Option<String> {
    let deprecated = directives.iter().find(|d| d.name.value == "deprecated")?;
    let reason = deprecated
        .arguments
        .iter()
        .find(|arg| arg.name.value == "reason")
        .and_then(|arg| match &arg.value {
            ast::Value::String(s) => Some(s.value.clone()),
            _ => None,
        });
    Some(reason.unwrap_or_else(|| "No longer supported".to_string()))
}
