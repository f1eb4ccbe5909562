use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use std::collections::BTreeMap;

type GpDocument = graphql_parser::query::Document<'static, String>;
type GpValue = graphql_parser::query::Value<'static, String>;
type GpType = graphql_parser::query::Type<'static, String>;
type GpDirective = graphql_parser::query::Directive<'static, String>;
type GpSelectionSet = graphql_parser::query::SelectionSet<'static, String>;

/// Something `graphql_parser`'s query AST has no room for.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParserProjectionError {
    #[error("variable `${variable_name}` has directives, which graphql_parser cannot represent")]
    VariableDirectives {
        variable_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("integer `{raw}` does not fit the 32-bit integers graphql_parser can represent")]
    IntOutOfRange {
        raw: String,
        span: GraphQLSourceSpan,
    },
}

impl GraphQLParserProjectionError {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::VariableDirectives { span, .. } | Self::IntOutOfRange { span, .. } => *span,
        }
    }
}

/// Converts `document` to a `graphql_parser` query document.
///
/// Shorthand and other anonymous queries without variables or directives
/// become [`OperationDefinition::SelectionSet`]; a field without a selection
/// set gets an empty one positioned at the field; object values are ordered
/// by field name. Positions are 1-based, as `graphql_parser` reports them.
///
/// [`OperationDefinition::SelectionSet`]: graphql_parser::query::OperationDefinition::SelectionSet
pub fn to_graphql_parser_ast(
    document: &ast::ExecutableDocument,
) -> Result<GpDocument, GraphQLParserProjectionError> {
    use graphql_parser::query::Definition as GpDefinition;

    let definitions = document
        .definitions
        .iter()
        .map(|def| match def {
            ast::ExecutableDefinition::Operation(op) => operation_to_gp(op).map(GpDefinition::Operation),
            ast::ExecutableDefinition::Fragment(frag) => fragment_to_gp(frag).map(GpDefinition::Fragment),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(graphql_parser::query::Document { definitions })
}

fn pos(span: &GraphQLSourceSpan) -> graphql_parser::Pos {
    let (line, column) = span.start_inclusive.to_line_column();
    graphql_parser::Pos { line, column }
}

fn end_pos(span: &GraphQLSourceSpan) -> graphql_parser::Pos {
    let (line, column) = span.end_exclusive.to_line_column();
    graphql_parser::Pos { line, column }
}

fn operation_to_gp(
    op: &ast::OperationDefinition,
) -> Result<graphql_parser::query::OperationDefinition<'static, String>, GraphQLParserProjectionError> {
    use graphql_parser::query::OperationDefinition as GpOp;

    let selection_set = selection_set_to_gp(&op.selection_set)?;
    let is_bare_selection_set = op.kind == ast::OperationKind::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty();
    if is_bare_selection_set {
        return Ok(GpOp::SelectionSet(selection_set));
    }

    let position = pos(&op.span);
    let name = op.name.as_ref().map(|name| name.value.clone());
    let variable_definitions = op
        .variable_definitions
        .iter()
        .map(variable_definition_to_gp)
        .collect::<Result<Vec<_>, _>>()?;
    let directives = directives_to_gp(&op.directives)?;
    Ok(match op.kind {
        ast::OperationKind::Query => GpOp::Query(graphql_parser::query::Query {
            position,
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
        ast::OperationKind::Mutation => GpOp::Mutation(graphql_parser::query::Mutation {
            position,
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
        ast::OperationKind::Subscription => GpOp::Subscription(graphql_parser::query::Subscription {
            position,
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
    })
}

fn fragment_to_gp(
    frag: &ast::FragmentDefinition,
) -> Result<graphql_parser::query::FragmentDefinition<'static, String>, GraphQLParserProjectionError> {
    Ok(graphql_parser::query::FragmentDefinition {
        position: pos(&frag.span),
        name: frag.name.value.clone(),
        type_condition: graphql_parser::query::TypeCondition::On(
            frag.type_condition.named_type.value.clone(),
        ),
        directives: directives_to_gp(&frag.directives)?,
        selection_set: selection_set_to_gp(&frag.selection_set)?,
    })
}

fn variable_definition_to_gp(
    var_def: &ast::VariableDefinition,
) -> Result<graphql_parser::query::VariableDefinition<'static, String>, GraphQLParserProjectionError> {
    if !var_def.directives.is_empty() {
        return Err(GraphQLParserProjectionError::VariableDirectives {
            variable_name: var_def.variable.value.clone(),
            span: var_def.span,
        });
    }
    Ok(graphql_parser::query::VariableDefinition {
        position: pos(&var_def.span),
        name: var_def.variable.value.clone(),
        var_type: type_annotation_to_gp(&var_def.var_type),
        default_value: var_def.default_value.as_ref().map(value_to_gp).transpose()?,
    })
}

fn selection_set_to_gp(set: &ast::SelectionSet) -> Result<GpSelectionSet, GraphQLParserProjectionError> {
    Ok(graphql_parser::query::SelectionSet {
        span: (pos(&set.span), end_pos(&set.span)),
        items: set
            .selections
            .iter()
            .map(selection_to_gp)
            .collect::<Result<Vec<_>, _>>()?,
    })
}

fn selection_to_gp(
    selection: &ast::Selection,
) -> Result<graphql_parser::query::Selection<'static, String>, GraphQLParserProjectionError> {
    use graphql_parser::query::Selection as GpSelection;

    Ok(match selection {
        ast::Selection::Field(field) => GpSelection::Field(graphql_parser::query::Field {
            position: pos(&field.span),
            alias: field.alias.as_ref().map(|alias| alias.value.clone()),
            name: field.name.value.clone(),
            arguments: arguments_to_gp(&field.arguments)?,
            directives: directives_to_gp(&field.directives)?,
            selection_set: match &field.selection_set {
                Some(set) => selection_set_to_gp(set)?,
                None => graphql_parser::query::SelectionSet {
                    span: (pos(&field.span), pos(&field.span)),
                    items: vec![],
                },
            },
        }),
        ast::Selection::FragmentSpread(spread) =>
            GpSelection::FragmentSpread(graphql_parser::query::FragmentSpread {
                position: pos(&spread.span),
                fragment_name: spread.name.value.clone(),
                directives: directives_to_gp(&spread.directives)?,
            }),
        ast::Selection::InlineFragment(inline) =>
            GpSelection::InlineFragment(graphql_parser::query::InlineFragment {
                position: pos(&inline.span),
                type_condition: inline.type_condition.as_ref().map(|cond| {
                    graphql_parser::query::TypeCondition::On(cond.named_type.value.clone())
                }),
                directives: directives_to_gp(&inline.directives)?,
                selection_set: selection_set_to_gp(&inline.selection_set)?,
            }),
    })
}

fn arguments_to_gp(
    arguments: &[ast::Argument],
) -> Result<Vec<(String, GpValue)>, GraphQLParserProjectionError> {
    arguments
        .iter()
        .map(|arg| Ok((arg.name.value.clone(), value_to_gp(&arg.value)?)))
        .collect()
}

fn directives_to_gp(
    directives: &[ast::DirectiveAnnotation],
) -> Result<Vec<GpDirective>, GraphQLParserProjectionError> {
    directives
        .iter()
        .map(|dir| {
            Ok(graphql_parser::query::Directive {
                position: pos(&dir.span),
                name: dir.name.value.clone(),
                arguments: arguments_to_gp(&dir.arguments)?,
            })
        })
        .collect()
}

/// `graphql_parser` wraps non-null types in a recursive `NonNullType`
/// where our annotations carry a flag.
fn type_annotation_to_gp(annotation: &ast::TypeAnnotation) -> GpType {
    let inner = match annotation {
        ast::TypeAnnotation::Named(named) => GpType::NamedType(named.name.value.clone()),
        ast::TypeAnnotation::List(list) =>
            GpType::ListType(Box::new(type_annotation_to_gp(&list.element_type))),
    };
    if annotation.nullable() {
        inner
    } else {
        GpType::NonNullType(Box::new(inner))
    }
}

fn value_to_gp(value: &ast::Value) -> Result<GpValue, GraphQLParserProjectionError> {
    Ok(match value {
        ast::Value::Variable(var) => GpValue::Variable(var.name.value.clone()),
        ast::Value::Int(int) => match int.as_i32() {
            Some(number) => GpValue::Int(number.into()),
            None => {
                return Err(GraphQLParserProjectionError::IntOutOfRange {
                    raw: int.raw.clone(),
                    span: int.span,
                });
            },
        },
        // GraphQL float syntax is a subset of what `f64::from_str` accepts.
        ast::Value::Float(float) => GpValue::Float(float.raw.parse().unwrap_or(f64::NAN)),
        ast::Value::String(string) => GpValue::String(string.value.clone()),
        ast::Value::Boolean(boolean) => GpValue::Boolean(boolean.value),
        ast::Value::Null(_) => GpValue::Null,
        ast::Value::Enum(enum_value) => GpValue::Enum(enum_value.value.clone()),
        ast::Value::List(list) =>
            GpValue::List(list.values.iter().map(value_to_gp).collect::<Result<_, _>>()?),
        ast::Value::Object(object) => {
            let mut fields = BTreeMap::new();
            for field in &object.fields {
                fields.insert(field.name.value.clone(), value_to_gp(&field.value)?);
            }
            GpValue::Object(fields)
        },
    })
}
