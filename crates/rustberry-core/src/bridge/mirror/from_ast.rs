use crate::bridge::mirror::ArgumentNode;
use crate::bridge::mirror::BooleanValueNode;
use crate::bridge::mirror::DefinitionNode;
use crate::bridge::mirror::DirectiveNode;
use crate::bridge::mirror::DocumentNode;
use crate::bridge::mirror::EnumValueNode;
use crate::bridge::mirror::FieldNode;
use crate::bridge::mirror::FloatValueNode;
use crate::bridge::mirror::FragmentDefinitionNode;
use crate::bridge::mirror::FragmentSpreadNode;
use crate::bridge::mirror::InlineFragmentNode;
use crate::bridge::mirror::IntValueNode;
use crate::bridge::mirror::ListTypeNode;
use crate::bridge::mirror::ListValueNode;
use crate::bridge::mirror::NameNode;
use crate::bridge::mirror::NamedTypeNode;
use crate::bridge::mirror::NonNullTypeNode;
use crate::bridge::mirror::NullValueNode;
use crate::bridge::mirror::ObjectFieldNode;
use crate::bridge::mirror::ObjectValueNode;
use crate::bridge::mirror::OperationDefinitionNode;
use crate::bridge::mirror::OperationType;
use crate::bridge::mirror::SelectionNode;
use crate::bridge::mirror::SelectionSetNode;
use crate::bridge::mirror::StringValueNode;
use crate::bridge::mirror::TypeNode;
use crate::bridge::mirror::ValueNode;
use crate::bridge::mirror::VariableDefinitionNode;
use crate::bridge::mirror::VariableNode;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;

impl From<&ast::ExecutableDocument> for DocumentNode {
    fn from(document: &ast::ExecutableDocument) -> Self {
        Self {
            loc: document.span.into(),
            definitions: document.definitions.iter().map(definition).collect(),
        }
    }
}

impl From<ast::OperationKind> for OperationType {
    fn from(kind: ast::OperationKind) -> Self {
        match kind {
            ast::OperationKind::Query => Self::Query,
            ast::OperationKind::Mutation => Self::Mutation,
            ast::OperationKind::Subscription => Self::Subscription,
        }
    }
}

fn definition(def: &ast::ExecutableDefinition) -> DefinitionNode {
    match def {
        ast::ExecutableDefinition::Operation(op) => OperationDefinitionNode {
            loc: op.span.into(),
            name: op.name.as_ref().map(name),
            directives: directives(&op.directives),
            variable_definitions: op.variable_definitions.iter().map(variable_definition).collect(),
            selection_set: selection_set(&op.selection_set),
            operation: op.kind.into(),
        }
        .into(),
        ast::ExecutableDefinition::Fragment(frag) => FragmentDefinitionNode {
            loc: frag.span.into(),
            name: name(&frag.name),
            directives: directives(&frag.directives),
            variable_definitions: None,
            selection_set: selection_set(&frag.selection_set),
            type_condition: named_type(
                &frag.type_condition.named_type,
                frag.type_condition.named_type.span,
            ),
        }
        .into(),
    }
}

fn name(name: &ast::Name) -> NameNode {
    NameNode {
        loc: name.span.into(),
        value: name.value.clone(),
    }
}

fn named_type(type_name: &ast::Name, span: GraphQLSourceSpan) -> NamedTypeNode {
    NamedTypeNode {
        loc: span.into(),
        name: name(type_name),
    }
}

fn variable_definition(var_def: &ast::VariableDefinition) -> VariableDefinitionNode {
    VariableDefinitionNode {
        loc: var_def.span.into(),
        variable: VariableNode {
            loc: var_def.variable_span.into(),
            name: name(&var_def.variable),
        },
        type_: type_node(&var_def.var_type),
        default_value: var_def.default_value.as_ref().map(value),
        directives: directives(&var_def.directives),
    }
}

/// Non-nullability is a flag on our annotations but a wrapper node in the
/// mirror. The wrapper takes the annotation's span; a wrapped named type
/// takes its name's span.
fn type_node(annotation: &ast::TypeAnnotation) -> TypeNode {
    let inner: TypeNode = match annotation {
        ast::TypeAnnotation::Named(named) => {
            let span = if named.nullable { named.span } else { named.name.span };
            named_type(&named.name, span).into()
        },
        ast::TypeAnnotation::List(list) => ListTypeNode {
            loc: list.span.into(),
            type_: Box::new(type_node(&list.element_type)),
        }
        .into(),
    };
    if annotation.nullable() {
        inner
    } else {
        NonNullTypeNode {
            loc: annotation.span().into(),
            type_: Box::new(inner),
        }
        .into()
    }
}

fn selection_set(set: &ast::SelectionSet) -> SelectionSetNode {
    SelectionSetNode {
        loc: set.span.into(),
        selections: set.selections.iter().map(selection).collect(),
    }
}

fn selection(selection: &ast::Selection) -> SelectionNode {
    match selection {
        ast::Selection::Field(field) => FieldNode {
            loc: field.span.into(),
            directives: directives(&field.directives),
            alias: field.alias.as_ref().map(name),
            name: name(&field.name),
            arguments: arguments(&field.arguments),
            selection_set: field.selection_set.as_ref().map(selection_set),
        }
        .into(),
        ast::Selection::FragmentSpread(spread) => FragmentSpreadNode {
            loc: spread.span.into(),
            directives: directives(&spread.directives),
            name: name(&spread.name),
        }
        .into(),
        ast::Selection::InlineFragment(inline) => InlineFragmentNode {
            loc: inline.span.into(),
            directives: directives(&inline.directives),
            type_condition: inline
                .type_condition
                .as_ref()
                .map(|cond| named_type(&cond.named_type, cond.named_type.span)),
            selection_set: selection_set(&inline.selection_set),
        }
        .into(),
    }
}

fn arguments(args: &[ast::Argument]) -> Vec<ArgumentNode> {
    args.iter()
        .map(|arg| ArgumentNode {
            loc: arg.span.into(),
            name: name(&arg.name),
            value: value(&arg.value),
        })
        .collect()
}

fn directives(dirs: &[ast::DirectiveAnnotation]) -> Vec<DirectiveNode> {
    dirs.iter()
        .map(|dir| DirectiveNode {
            loc: dir.span.into(),
            name: name(&dir.name),
            arguments: arguments(&dir.arguments),
        })
        .collect()
}

fn value(val: &ast::Value) -> ValueNode {
    match val {
        ast::Value::Variable(var) => VariableNode {
            loc: var.span.into(),
            name: name(&var.name),
        }
        .into(),
        ast::Value::Int(int) => IntValueNode {
            loc: int.span.into(),
            value: int.raw.clone(),
        }
        .into(),
        ast::Value::Float(float) => FloatValueNode {
            loc: float.span.into(),
            value: float.raw.clone(),
        }
        .into(),
        ast::Value::String(string) => StringValueNode {
            loc: string.span.into(),
            value: string.value.clone(),
            block: string.block,
        }
        .into(),
        ast::Value::Boolean(boolean) => BooleanValueNode {
            loc: boolean.span.into(),
            value: boolean.value,
        }
        .into(),
        ast::Value::Null(null) => NullValueNode {
            loc: null.span.into(),
        }
        .into(),
        ast::Value::Enum(enum_value) => EnumValueNode {
            loc: enum_value.span.into(),
            value: enum_value.value.clone(),
        }
        .into(),
        ast::Value::List(list) => ListValueNode {
            loc: list.span.into(),
            values: list.values.iter().map(value).collect(),
        }
        .into(),
        ast::Value::Object(object) => ObjectValueNode {
            loc: object.span.into(),
            fields: object
                .fields
                .iter()
                .map(|field| ObjectFieldNode {
                    loc: field.span.into(),
                    name: name(&field.name),
                    value: value(&field.value),
                })
                .collect(),
        }
        .into(),
    }
}
