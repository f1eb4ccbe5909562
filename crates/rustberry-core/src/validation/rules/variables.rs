use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::validation::utils::for_each_duplicate;
use crate::validation::utils::nullable_version;
use crate::validation::utils::operation_name_suffix;
use crate::validation::variable_usages::operation_variable_usages;
use rustberry_parser::ast;
use std::collections::HashMap;
use std::collections::HashSet;

pub(crate) fn unique_variable_names(
    document: &ast::ExecutableDocument,
    _registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    for operation in document.operations() {
        for_each_duplicate(
            &operation.variable_definitions,
            |var_def| var_def.variable.value.as_str(),
            |duplicate, first| diagnostics.push(
                Diagnostic::error(
                    RuleId::UniqueVariableNames,
                    format!("There can be only one variable named \"${}\".", duplicate.variable.value),
                    duplicate.variable_span,
                ).with_span(first.variable_span)
            ),
        );
    }
    diagnostics
}

pub(crate) fn variables_are_input_types(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    document
        .operations()
        .flat_map(|operation| &operation.variable_definitions)
        .filter(|var_def| {
            registry
                .lookup_type(&var_def.var_type.innermost_name().value)
                .is_some_and(|var_type| !var_type.is_input_type())
        })
        .map(|var_def| Diagnostic::error(
            RuleId::VariablesAreInputTypes,
            format!(
                "Variable \"${}\" cannot be non-input type \"{}\".",
                var_def.variable.value,
                var_def.var_type,
            ),
            var_def.var_type.span(),
        ))
        .collect()
}

/// Every variable used by an operation, directly or through the fragments
/// it spreads, must be declared by that operation.
pub(crate) fn undefined_variable(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    for operation in document.operations() {
        let defined: HashSet<&str> = operation
            .variable_definitions
            .iter()
            .map(|var_def| var_def.variable.value.as_str())
            .collect();
        for usage in operation_variable_usages(document, registry, operation) {
            let name = &usage.variable.name.value;
            if !defined.contains(name.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        RuleId::UndefinedVariable,
                        match &operation.name {
                            Some(op_name) => format!(
                                "Variable \"${name}\" is not defined by operation \"{}\".",
                                op_name.value,
                            ),
                            None => format!("Variable \"${name}\" is not defined."),
                        },
                        usage.variable.span,
                    ).with_span(operation.span)
                );
            }
        }
    }
    diagnostics
}

pub(crate) fn unused_variable(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    for operation in document.operations() {
        let used: HashSet<&str> = operation_variable_usages(document, registry, operation)
            .into_iter()
            .map(|usage| usage.variable.name.value.as_str())
            .collect();
        for var_def in &operation.variable_definitions {
            if !used.contains(var_def.variable.value.as_str()) {
                diagnostics.push(Diagnostic::error(
                    RuleId::UnusedVariable,
                    format!(
                        "Variable \"${}\" is never used{}.",
                        var_def.variable.value,
                        if operation.name.is_some() {
                            format!(" in operation{}", operation_name_suffix(operation))
                        } else {
                            String::new()
                        },
                    ),
                    var_def.variable_span,
                ));
            }
        }
    }
    diagnostics
}

/// A variable may only flow into a position whose type accepts the
/// variable's declared type. A nullable variable may still feed a non-null
/// position when either side provides a non-null default.
pub(crate) fn variable_usage(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    for operation in document.operations() {
        let var_defs: HashMap<&str, &ast::VariableDefinition> = operation
            .variable_definitions
            .iter()
            .map(|var_def| (var_def.variable.value.as_str(), var_def))
            .collect();

        for usage in operation_variable_usages(document, registry, operation) {
            let Some(expected_type) = usage.expected_type else { continue };
            let Some(var_def) = var_defs.get(usage.variable.name.value.as_str()) else {
                continue;
            };
            // Unknown variable types are reported by known-type-names.
            if registry.lookup_type(&var_def.var_type.innermost_name().value).is_none() {
                continue;
            }

            let allowed = if !expected_type.nullable() && var_def.var_type.nullable() {
                let has_non_null_default = var_def
                    .default_value
                    .as_ref()
                    .is_some_and(|default_value| !default_value.is_null());
                (has_non_null_default || usage.location_has_default)
                    && registry.is_subtype(&var_def.var_type, &nullable_version(expected_type))
            } else {
                registry.is_subtype(&var_def.var_type, expected_type)
            };

            if !allowed {
                diagnostics.push(
                    Diagnostic::error(
                        RuleId::VariableUsage,
                        format!(
                            "Variable \"${}\" of type \"{}\" used in position expecting type \"{expected_type}\".",
                            var_def.variable.value,
                            var_def.var_type,
                        ),
                        usage.variable.span,
                    ).with_span(var_def.variable_span)
                );
            }
        }
    }
    diagnostics
}
