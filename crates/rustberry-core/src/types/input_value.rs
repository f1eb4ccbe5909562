use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use serde::Serialize;

/// A field or directive parameter, or a field of an input object type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub type_annotation: ast::TypeAnnotation,
    pub default_value: Option<ast::Value>,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

impl InputValue {
    /// Non-nullable without a default: callers must supply a value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }
}
