use crate::types::InputValue;
use indexmap::IndexMap;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast::DirectiveLocationKind;
use serde::Serialize;

pub const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = ["deprecated", "include", "skip", "specifiedBy"];

/// A directive definition (`directive @name(...) on ...`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,
    pub description: Option<String>,
    pub parameters: IndexMap<String, InputValue>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocationKind>,
    pub span: GraphQLSourceSpan,
}

impl Directive {
    pub fn is_builtin(&self) -> bool {
        BUILTIN_DIRECTIVE_NAMES.contains(&self.name.as_str())
    }

    pub fn allowed_at(&self, location: DirectiveLocationKind) -> bool {
        self.locations.contains(&location)
    }
}
