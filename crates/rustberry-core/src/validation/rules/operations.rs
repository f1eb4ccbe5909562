use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::validation::utils::for_each_duplicate;
use rustberry_parser::ast;
use rustberry_parser::ast::OperationKind;
use std::collections::HashSet;

pub(crate) fn unique_operation_names(
    document: &ast::ExecutableDocument,
    _registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    for_each_duplicate(
        document.operations().filter_map(|operation| operation.name.as_ref()),
        |name| name.value.as_str(),
        |duplicate, first| diagnostics.push(
            Diagnostic::error(
                RuleId::UniqueOperationNames,
                format!("There can be only one operation named \"{}\".", duplicate.value),
                duplicate.span,
            ).with_span(first.span)
        ),
    );
    diagnostics
}

/// An anonymous operation must be the only operation in its document. All
/// offending operations are reported by a single diagnostic.
pub(crate) fn lone_anonymous_operation(
    document: &ast::ExecutableDocument,
    _registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let operation_count = document.operations().count();
    let anonymous_spans: Vec<_> = document
        .operations()
        .filter(|operation| operation.name.is_none())
        .map(|operation| operation.span)
        .collect();
    if operation_count < 2 || anonymous_spans.is_empty() {
        return vec![];
    }

    let mut diagnostic = Diagnostic::without_span(
        RuleId::LoneAnonymousOperation,
        "This anonymous operation must be the only defined operation.",
    );
    diagnostic.spans = anonymous_spans;
    vec![diagnostic]
}

pub(crate) fn known_operation_type(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    document
        .operations()
        .filter(|operation| registry.root_type_name(operation.kind).is_none())
        .map(|operation| Diagnostic::error(
            RuleId::KnownOperationType,
            format!("Schema is not configured to execute {} operation.", operation.kind),
            operation.span,
        ))
        .collect()
}

pub(crate) fn single_field_subscriptions(
    document: &ast::ExecutableDocument,
    _registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    for operation in document.operations() {
        if operation.kind != OperationKind::Subscription {
            continue;
        }
        let subject = match &operation.name {
            Some(name) => format!("Subscription \"{}\"", name.value),
            None => "Anonymous Subscription".to_string(),
        };

        let mut root_fields = vec![];
        collect_root_fields(document, &operation.selection_set, &mut root_fields, &mut HashSet::new());

        let mut response_keys: Vec<&str> = vec![];
        let mut extra_field_spans = vec![];
        for field in &root_fields {
            if !response_keys.contains(&field.response_key()) {
                response_keys.push(field.response_key());
                if response_keys.len() > 1 {
                    extra_field_spans.push(field.span);
                }
            }
        }
        if !extra_field_spans.is_empty() {
            let mut diagnostic = Diagnostic::without_span(
                RuleId::SingleFieldSubscriptions,
                format!("{subject} must select only one top level field."),
            );
            diagnostic.spans = extra_field_spans;
            diagnostics.push(diagnostic);
        }

        for field in root_fields.iter().filter(|field| field.name.value.starts_with("__")) {
            diagnostics.push(Diagnostic::error(
                RuleId::SingleFieldSubscriptions,
                format!("{subject} must not select an introspection top level field."),
                field.span,
            ));
        }
    }
    diagnostics
}

fn collect_root_fields<'a>(
    document: &'a ast::ExecutableDocument,
    selection_set: &'a ast::SelectionSet,
    fields: &mut Vec<&'a ast::Field>,
    visited_fragments: &mut HashSet<&'a str>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => fields.push(field),
            ast::Selection::FragmentSpread(spread) => {
                if visited_fragments.insert(spread.name.value.as_str())
                    && let Some(fragment) = document.fragment(&spread.name.value) {
                    collect_root_fields(document, &fragment.selection_set, fields, visited_fragments);
                }
            },
            ast::Selection::InlineFragment(inline_fragment) => collect_root_fields(
                document,
                &inline_fragment.selection_set,
                fields,
                visited_fragments,
            ),
        }
    }
}
