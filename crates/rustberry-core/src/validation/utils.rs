use rustberry_parser::ast;
use rustberry_parser::ast::TypeAnnotation;
use std::collections::HashMap;
use std::hash::Hash;

/// Structural equality of two value literals, ignoring spans and the order
/// of input object fields.
pub(crate) fn values_equal(a: &ast::Value, b: &ast::Value) -> bool {
    match (a, b) {
        (ast::Value::Variable(a), ast::Value::Variable(b)) => a.name.value == b.name.value,
        (ast::Value::Int(a), ast::Value::Int(b)) => a.raw == b.raw,
        (ast::Value::Float(a), ast::Value::Float(b)) => a.raw == b.raw,
        (ast::Value::String(a), ast::Value::String(b)) => a.value == b.value,
        (ast::Value::Boolean(a), ast::Value::Boolean(b)) => a.value == b.value,
        (ast::Value::Null(_), ast::Value::Null(_)) => true,
        (ast::Value::Enum(a), ast::Value::Enum(b)) => a.value == b.value,
        (ast::Value::List(a), ast::Value::List(b)) =>
            a.values.len() == b.values.len()
                && a.values.iter().zip(&b.values).all(|(a, b)| values_equal(a, b)),
        (ast::Value::Object(a), ast::Value::Object(b)) =>
            a.fields.len() == b.fields.len()
                && a.fields.iter().all(|a_field| {
                    b.fields.iter().any(|b_field| {
                        a_field.name.value == b_field.name.value
                            && values_equal(&a_field.value, &b_field.value)
                    })
                }),
        _ => false,
    }
}

/// `true` if both argument lists pass the same values under the same names.
pub(crate) fn arguments_equal(a: &[ast::Argument], b: &[ast::Argument]) -> bool {
    a.len() == b.len()
        && a.iter().all(|a_arg| {
            b.iter().any(|b_arg| {
                a_arg.name.value == b_arg.name.value && values_equal(&a_arg.value, &b_arg.value)
            })
        })
}

/// `annot` with its outermost non-null marker removed.
pub(crate) fn nullable_version(annot: &TypeAnnotation) -> TypeAnnotation {
    let mut nullable = annot.clone();
    match &mut nullable {
        TypeAnnotation::Named(named) => named.nullable = true,
        TypeAnnotation::List(list) => list.nullable = true,
    }
    nullable
}

/// Spreads written directly in `selection_set`, looking through fields and
/// inline fragments but not into other fragments.
pub(crate) fn direct_fragment_spreads(selection_set: &ast::SelectionSet) -> Vec<&ast::FragmentSpread> {
    let mut spreads = vec![];
    collect_spreads(selection_set, &mut spreads);
    spreads
}

fn collect_spreads<'a>(selection_set: &'a ast::SelectionSet, spreads: &mut Vec<&'a ast::FragmentSpread>) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if let Some(sub_selection_set) = &field.selection_set {
                    collect_spreads(sub_selection_set, spreads);
                }
            },
            ast::Selection::FragmentSpread(spread) => spreads.push(spread),
            ast::Selection::InlineFragment(inline_fragment) =>
                collect_spreads(&inline_fragment.selection_set, spreads),
        }
    }
}

/// Reports every repeated key of `items`: `on_duplicate(duplicate, first)`.
pub(crate) fn for_each_duplicate<'a, T, K: Eq + Hash>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&'a T) -> K,
    mut on_duplicate: impl FnMut(&'a T, &'a T),
) where
    T: 'a,
{
    let mut first_by_key: HashMap<K, &'a T> = HashMap::new();
    for item in items {
        match first_by_key.get(&key(item)) {
            Some(first) => on_duplicate(item, *first),
            None => {
                first_by_key.insert(key(item), item);
            },
        }
    }
}

/// ` "Name"` for named operations, empty for anonymous ones; used as a
/// message suffix.
pub(crate) fn operation_name_suffix(operation: &ast::OperationDefinition) -> String {
    operation
        .name
        .as_ref()
        .map(|name| format!(" \"{}\"", name.value))
        .unwrap_or_default()
}
