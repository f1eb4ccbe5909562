//! Nodes of [executable documents](https://spec.graphql.org/October2021/#ExecutableDocument).

use crate::GraphQLSourceSpan;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::ast_node::impl_ast_node;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A parsed executable document: operations and fragments, in source order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExecutableDocument {
    pub definitions: Vec<ExecutableDefinition>,
    pub span: GraphQLSourceSpan,
}

impl ExecutableDocument {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Operation(op) => Some(op),
            ExecutableDefinition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Fragment(frag) => Some(frag),
            ExecutableDefinition::Operation(_) => None,
        })
    }

    /// The first fragment definition named `name`.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name.value == name)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ExecutableDefinition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[inherent]
impl AstNode for ExecutableDefinition {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Operation(op) => op.span,
            Self::Fragment(frag) => frag.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation. A bare `{ ... }` parses as an anonymous query with
/// `shorthand` set.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub shorthand: bool,
    pub span: GraphQLSourceSpan,
}

/// `$name: Type = default @directives`. `variable` is the name without the
/// `$`; `variable_span` covers both.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableDefinition {
    pub variable: Name,
    pub variable_span: GraphQLSourceSpan,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

/// An ordered list of selections. Order is significant.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Field(field) => &field.directives,
            Self::FragmentSpread(spread) => &spread.directives,
            Self::InlineFragment(inline) => &inline.directives,
        }
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Field(field) => field.span,
            Self::FragmentSpread(spread) => spread.span,
            Self::InlineFragment(inline) => inline.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
    pub span: GraphQLSourceSpan,
}

impl Field {
    /// The key this field occupies in a response: its alias if present,
    /// otherwise its name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}

/// `...Name @directives`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

/// `... on Type @directives { ... }`; the type condition is optional.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<TypeCondition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

/// `on Type`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TypeCondition {
    pub named_type: Name,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: TypeCondition,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

impl_ast_node!(
    ExecutableDocument,
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    TypeCondition,
    FragmentDefinition,
);
