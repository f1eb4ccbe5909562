use inherent::inherent;
use rustberry_parser::GraphQLSourceSpan;
use serde::Serialize;

/// Implemented by every mirrored node and node union.
pub trait MirrorNode {
    /// graphql-core's `kind` tag, e.g. `"operation_definition"`.
    fn kind(&self) -> &'static str;

    /// graphql-core's `keys`: `"loc"` followed by the node's fields in
    /// declaration order.
    fn keys(&self) -> &'static [&'static str];

    fn loc(&self) -> Location;
}

/// Where a node came from. `start` and `end` are byte offsets into the
/// parsed source.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    span: GraphQLSourceSpan,
}

impl Location {
    /// The full span, with line and column information.
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}

impl From<GraphQLSourceSpan> for Location {
    fn from(span: GraphQLSourceSpan) -> Self {
        let range = span.byte_range();
        Self {
            start: range.start,
            end: range.end,
            span,
        }
    }
}

macro_rules! key_name {
    ($field:ident) => { stringify!($field) };
    ($field:ident $key:literal) => { $key };
}

/// Declares a node struct with a `loc` plus the given fields, serialized
/// under graphql-core's kind tag. `field as "key"` renames fields whose
/// graphql-core name is a Rust keyword.
macro_rules! mirror_node {
    (
        $(#[$meta:meta])*
        $node:ident = $kind:literal {
            $($field:ident $(as $key:literal)? : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(tag = "kind", rename = $kind)]
        pub struct $node {
            #[serde(skip)]
            pub loc: Location,
            $(
                $(#[serde(rename = $key)])?
                pub $field: $ty,
            )*
        }

        #[inherent]
        impl MirrorNode for $node {
            pub fn kind(&self) -> &'static str {
                $kind
            }

            pub fn keys(&self) -> &'static [&'static str] {
                &["loc", $(key_name!($field $($key)?)),*]
            }

            pub fn loc(&self) -> Location {
                self.loc
            }
        }
    };
}

/// Declares an untagged union of nodes. It serializes as whichever node it
/// holds, which already carries its own kind tag.
macro_rules! mirror_union {
    (
        $(#[$meta:meta])*
        $union:ident { $($variant:ident($node:ty)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum $union {
            $($variant($node)),+
        }

        #[inherent]
        impl MirrorNode for $union {
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(node) => node.kind()),+
                }
            }

            pub fn keys(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant(node) => node.keys()),+
                }
            }

            pub fn loc(&self) -> Location {
                match self {
                    $(Self::$variant(node) => node.loc()),+
                }
            }
        }

        $(
            impl From<$node> for $union {
                fn from(node: $node) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

mirror_node! {
    NameNode = "name" {
        value: String,
    }
}

mirror_node! {
    /// The root of a mirrored executable document.
    DocumentNode = "document" {
        definitions: Vec<DefinitionNode>,
    }
}

mirror_union! {
    DefinitionNode {
        OperationDefinition(OperationDefinitionNode),
        FragmentDefinition(FragmentDefinitionNode),
    }
}

mirror_node! {
    /// An operation. Shorthand `{ ... }` queries have no name and the
    /// `query` operation type.
    OperationDefinitionNode = "operation_definition" {
        name: Option<NameNode>,
        directives: Vec<DirectiveNode>,
        variable_definitions: Vec<VariableDefinitionNode>,
        selection_set: SelectionSetNode,
        operation: OperationType,
    }
}

mirror_node! {
    VariableDefinitionNode = "variable_definition" {
        variable: VariableNode,
        type_ as "type": TypeNode,
        default_value: Option<ValueNode>,
        directives: Vec<DirectiveNode>,
    }
}

mirror_node! {
    SelectionSetNode = "selection_set" {
        selections: Vec<SelectionNode>,
    }
}

mirror_union! {
    SelectionNode {
        Field(FieldNode),
        FragmentSpread(FragmentSpreadNode),
        InlineFragment(InlineFragmentNode),
    }
}

mirror_node! {
    FieldNode = "field" {
        directives: Vec<DirectiveNode>,
        alias: Option<NameNode>,
        name: NameNode,
        arguments: Vec<ArgumentNode>,
        selection_set: Option<SelectionSetNode>,
    }
}

mirror_node! {
    ArgumentNode = "argument" {
        name: NameNode,
        value: ValueNode,
    }
}

mirror_node! {
    FragmentSpreadNode = "fragment_spread" {
        directives: Vec<DirectiveNode>,
        name: NameNode,
    }
}

mirror_node! {
    InlineFragmentNode = "inline_fragment" {
        directives: Vec<DirectiveNode>,
        type_condition: Option<NamedTypeNode>,
        selection_set: SelectionSetNode,
    }
}

mirror_node! {
    /// `variable_definitions` holds legacy fragment variables, which are
    /// never parsed, so it is always `None`.
    FragmentDefinitionNode = "fragment_definition" {
        name: NameNode,
        directives: Vec<DirectiveNode>,
        variable_definitions: Option<Vec<VariableDefinitionNode>>,
        selection_set: SelectionSetNode,
        type_condition: NamedTypeNode,
    }
}

mirror_union! {
    ValueNode {
        Variable(VariableNode),
        Int(IntValueNode),
        Float(FloatValueNode),
        String(StringValueNode),
        Boolean(BooleanValueNode),
        Null(NullValueNode),
        Enum(EnumValueNode),
        List(ListValueNode),
        Object(ObjectValueNode),
    }
}

mirror_node! {
    VariableNode = "variable" {
        name: NameNode,
    }
}

mirror_node! {
    /// Keeps the literal's source text.
    IntValueNode = "int_value" {
        value: String,
    }
}

mirror_node! {
    FloatValueNode = "float_value" {
        value: String,
    }
}

mirror_node! {
    StringValueNode = "string_value" {
        value: String,
        block: bool,
    }
}

mirror_node! {
    BooleanValueNode = "boolean_value" {
        value: bool,
    }
}

mirror_node! {
    NullValueNode = "null_value" {}
}

mirror_node! {
    EnumValueNode = "enum_value" {
        value: String,
    }
}

mirror_node! {
    ListValueNode = "list_value" {
        values: Vec<ValueNode>,
    }
}

mirror_node! {
    ObjectValueNode = "object_value" {
        fields: Vec<ObjectFieldNode>,
    }
}

mirror_node! {
    ObjectFieldNode = "object_field" {
        name: NameNode,
        value: ValueNode,
    }
}

mirror_node! {
    DirectiveNode = "directive" {
        name: NameNode,
        arguments: Vec<ArgumentNode>,
    }
}

mirror_union! {
    TypeNode {
        Named(NamedTypeNode),
        List(ListTypeNode),
        NonNull(NonNullTypeNode),
    }
}

mirror_node! {
    NamedTypeNode = "named_type" {
        name: NameNode,
    }
}

mirror_node! {
    ListTypeNode = "list_type" {
        type_ as "type": Box<TypeNode>,
    }
}

mirror_node! {
    /// Wraps a named or list type, never another non-null type.
    NonNullTypeNode = "non_null_type" {
        type_ as "type": Box<TypeNode>,
    }
}
