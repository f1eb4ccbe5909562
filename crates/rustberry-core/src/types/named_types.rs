use crate::types::InputValue;
use indexmap::IndexMap;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<ast::Name>,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

impl UnionType {
    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.iter().any(|member| member.value == type_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValue>,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, InputValue>,
    pub directives: Vec<ast::DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}
