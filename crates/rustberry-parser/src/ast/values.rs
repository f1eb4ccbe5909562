//! Input value literals.

use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::ast_node::impl_ast_node;
use crate::string_value_cooking::print_string_literal;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A [value](https://spec.graphql.org/October2021/#Value) literal or
/// variable reference.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Variable(VariableValue),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    /// A short noun for error messages ("an integer", "a list", ...).
    pub fn kind_description(&self) -> &'static str {
        match self {
            Self::Variable(_) => "a variable",
            Self::Int(_) => "an integer",
            Self::Float(_) => "a float",
            Self::String(_) => "a string",
            Self::Boolean(_) => "a boolean",
            Self::Null(_) => "null",
            Self::Enum(_) => "an enum value",
            Self::List(_) => "a list",
            Self::Object(_) => "an input object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    /// Calls `visit` for every variable referenced anywhere inside this
    /// value, in source order.
    pub fn for_each_variable<'a>(&'a self, visit: &mut impl FnMut(&'a VariableValue)) {
        match self {
            Self::Variable(var) => visit(var),
            Self::List(list) => {
                for item in &list.values {
                    item.for_each_variable(visit);
                }
            },
            Self::Object(obj) => {
                for field in &obj.fields {
                    field.value.for_each_variable(visit);
                }
            },
            _ => {},
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(var) => write!(f, "${}", var.name),
            Self::Int(int) => f.write_str(&int.raw),
            Self::Float(float) => f.write_str(&float.raw),
            Self::String(string) => f.write_str(&print_string_literal(&string.value)),
            Self::Boolean(boolean) => write!(f, "{}", boolean.value),
            Self::Null(_) => f.write_str("null"),
            Self::Enum(enum_value) => f.write_str(&enum_value.value),
            Self::List(list) => {
                f.write_str("[")?;
                for (idx, item) in list.values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(obj) => {
                f.write_str("{")?;
                for (idx, field) in obj.fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            },
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Variable(v) => v.span,
            Self::Int(v) => v.span,
            Self::Float(v) => v.span,
            Self::String(v) => v.span,
            Self::Boolean(v) => v.span,
            Self::Null(v) => v.span,
            Self::Enum(v) => v.span,
            Self::List(v) => v.span,
            Self::Object(v) => v.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

/// `$name`. The span covers the `$`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableValue {
    pub name: Name,
    pub span: GraphQLSourceSpan,
}

/// Integer literal, kept as written. Range checks against `Int` happen during
/// validation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IntValue {
    pub raw: String,
    pub span: GraphQLSourceSpan,
}

impl IntValue {
    pub fn as_i32(&self) -> Option<i32> {
        self.raw.parse().ok()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FloatValue {
    pub raw: String,
    pub span: GraphQLSourceSpan,
}

impl FloatValue {
    pub fn as_f64(&self) -> Option<f64> {
        self.raw.parse().ok().filter(|v: &f64| v.is_finite())
    }
}

/// A string literal after escape processing (or block-string indentation
/// removal).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BooleanValue {
    pub value: bool,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NullValue {
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumValue {
    pub value: String,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub span: GraphQLSourceSpan,
}

/// `name: value` inside an input object literal.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub span: GraphQLSourceSpan,
}

impl_ast_node!(
    VariableValue,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
);
