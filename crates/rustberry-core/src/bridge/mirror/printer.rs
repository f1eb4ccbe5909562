use crate::bridge::mirror::ArgumentNode;
use crate::bridge::mirror::DefinitionNode;
use crate::bridge::mirror::DirectiveNode;
use crate::bridge::mirror::DocumentNode;
use crate::bridge::mirror::FieldNode;
use crate::bridge::mirror::FragmentDefinitionNode;
use crate::bridge::mirror::OperationDefinitionNode;
use crate::bridge::mirror::SelectionNode;
use crate::bridge::mirror::SelectionSetNode;
use crate::bridge::mirror::TypeNode;
use crate::bridge::mirror::ValueNode;
use crate::bridge::mirror::VariableDefinitionNode;
use rustberry_parser::print_string_literal;

/// Field argument lists longer than this are broken onto one line per
/// argument.
const MAX_LINE_LENGTH: usize = 80;

/// Prints a mirrored document as GraphQL source, laid out the way
/// graphql-core's `print_ast()` lays it out.
///
/// Parsing the output yields a document equal to the mirrored one in
/// everything but spans and layout.
pub fn print_ast(document: &DocumentNode) -> String {
    join(document.definitions.iter().map(print_definition), "\n\n")
}

fn print_definition(definition: &DefinitionNode) -> String {
    match definition {
        DefinitionNode::OperationDefinition(op) => print_operation(op),
        DefinitionNode::FragmentDefinition(frag) => print_fragment(frag),
    }
}

fn print_operation(op: &OperationDefinitionNode) -> String {
    let var_defs = wrap("(", &print_variable_definitions(&op.variable_definitions), ")");
    let name = op.name.as_ref().map_or("", |name| name.value.as_str());
    let prefix = join(
        [
            op.operation.as_str().to_string(),
            format!("{name}{var_defs}"),
            print_directives(&op.directives),
        ],
        " ",
    );
    let selection_set = print_selection_set(&op.selection_set);
    // An anonymous query without variables or directives prints as its
    // bare selection set.
    if prefix == "query" {
        selection_set
    } else {
        format!("{prefix} {selection_set}")
    }
}

fn print_fragment(frag: &FragmentDefinitionNode) -> String {
    let var_defs = frag
        .variable_definitions
        .as_deref()
        .map(print_variable_definitions)
        .unwrap_or_default();
    format!(
        "fragment {}{} on {} {}{}",
        frag.name.value,
        wrap("(", &var_defs, ")"),
        frag.type_condition.name.value,
        wrap("", &print_directives(&frag.directives), " "),
        print_selection_set(&frag.selection_set),
    )
}

fn print_variable_definitions(var_defs: &[VariableDefinitionNode]) -> String {
    join(var_defs.iter().map(print_variable_definition), ", ")
}

fn print_variable_definition(var_def: &VariableDefinitionNode) -> String {
    let default_value = var_def.default_value.as_ref().map(print_value).unwrap_or_default();
    format!(
        "${}: {}{}{}",
        var_def.variable.name.value,
        print_type(&var_def.type_),
        wrap(" = ", &default_value, ""),
        wrap(" ", &print_directives(&var_def.directives), ""),
    )
}

fn print_selection_set(set: &SelectionSetNode) -> String {
    block(set.selections.iter().map(print_selection))
}

fn print_selection(selection: &SelectionNode) -> String {
    match selection {
        SelectionNode::Field(field) => print_field(field),
        SelectionNode::FragmentSpread(spread) => format!(
            "...{}{}",
            spread.name.value,
            wrap(" ", &print_directives(&spread.directives), ""),
        ),
        SelectionNode::InlineFragment(inline) => join(
            [
                "...".to_string(),
                inline
                    .type_condition
                    .as_ref()
                    .map(|cond| format!("on {}", cond.name.value))
                    .unwrap_or_default(),
                print_directives(&inline.directives),
                print_selection_set(&inline.selection_set),
            ],
            " ",
        ),
    }
}

fn print_field(field: &FieldNode) -> String {
    let prefix = match &field.alias {
        Some(alias) => format!("{}: {}", alias.value, field.name.value),
        None => field.name.value.clone(),
    };
    let arguments: Vec<String> = field.arguments.iter().map(print_argument).collect();
    let mut args_line = format!("{prefix}{}", wrap("(", &join(arguments.iter().cloned(), ", "), ")"));
    if args_line.len() > MAX_LINE_LENGTH {
        args_line = format!("{prefix}{}", wrap("(\n", &indent(&join(arguments, "\n")), "\n)"));
    }
    join(
        [
            args_line,
            print_directives(&field.directives),
            field.selection_set.as_ref().map(print_selection_set).unwrap_or_default(),
        ],
        " ",
    )
}

fn print_argument(argument: &ArgumentNode) -> String {
    format!("{}: {}", argument.name.value, print_value(&argument.value))
}

fn print_directives(directives: &[DirectiveNode]) -> String {
    join(directives.iter().map(print_directive), " ")
}

fn print_directive(directive: &DirectiveNode) -> String {
    let arguments = join(directive.arguments.iter().map(print_argument), ", ");
    format!("@{}{}", directive.name.value, wrap("(", &arguments, ")"))
}

fn print_value(value: &ValueNode) -> String {
    match value {
        ValueNode::Variable(var) => format!("${}", var.name.value),
        ValueNode::Int(int) => int.value.clone(),
        ValueNode::Float(float) => float.value.clone(),
        ValueNode::String(string) if string.block =>
            print_block_string(&string.value).unwrap_or_else(|| print_string_literal(&string.value)),
        ValueNode::String(string) => print_string_literal(&string.value),
        ValueNode::Boolean(boolean) => boolean.value.to_string(),
        ValueNode::Null(_) => "null".to_string(),
        ValueNode::Enum(enum_value) => enum_value.value.clone(),
        ValueNode::List(list) => format!("[{}]", join(list.values.iter().map(print_value), ", ")),
        ValueNode::Object(object) => format!(
            "{{{}}}",
            join(
                object
                    .fields
                    .iter()
                    .map(|field| format!("{}: {}", field.name.value, print_value(&field.value))),
                ", ",
            ),
        ),
    }
}

fn print_type(type_: &TypeNode) -> String {
    match type_ {
        TypeNode::Named(named) => named.name.value.clone(),
        TypeNode::List(list) => format!("[{}]", print_type(&list.type_)),
        TypeNode::NonNull(non_null) => format!("{}!", print_type(&non_null.type_)),
    }
}

/// Prints `value` as a `"""` block string, or returns `None` when block
/// string cooking (indentation removal, blank line trimming) would not give
/// `value` back.
///
/// Every line after the first starts without whitespace, so the indentation
/// [`indent()`] adds to enclosing blocks is exactly the common indentation
/// cooking strips.
fn print_block_string(value: &str) -> Option<String> {
    let is_blank = |line: &str| line.chars().all(|ch| ch == ' ' || ch == '\t');
    let mut lines = value.split('\n');
    let first_line = lines.next()?;
    let last_line = value.rsplit('\n').next()?;
    let printable = !is_blank(first_line)
        && !is_blank(last_line)
        && !value.ends_with('"')
        && !value.ends_with('\\')
        && value.chars().all(|ch| ch == '\n' || ch == '\t' || !ch.is_control())
        && lines.all(|line| !line.starts_with([' ', '\t']));
    printable.then(|| format!("\"\"\"{}\"\"\"", value.replace("\"\"\"", "\\\"\"\"")))
}

/// Joins the non-empty parts with `separator`.
fn join(parts: impl IntoIterator<Item = String>, separator: &str) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `start + text + end`, or nothing when `text` is empty.
fn wrap(start: &str, text: &str, end: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{start}{text}{end}")
    }
}

fn indent(text: &str) -> String {
    wrap("  ", &text.replace('\n', "\n  "), "")
}

fn block(items: impl IntoIterator<Item = String>) -> String {
    wrap("{\n", &indent(&join(items, "\n")), "\n}")
}
