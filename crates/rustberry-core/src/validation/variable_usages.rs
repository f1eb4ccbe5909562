use crate::schema::TypeRegistry;
use crate::types::GraphQLType;
use crate::types::InputValue;
use indexmap::IndexMap;
use rustberry_parser::ast;
use rustberry_parser::ast::TypeAnnotation;
use std::collections::HashSet;

/// A `$variable` reference and the input type expected where it appears.
#[derive(Debug)]
pub(crate) struct VariableUsage<'a> {
    pub variable: &'a ast::VariableValue,
    pub expected_type: Option<&'a TypeAnnotation>,
    /// The argument or input field holding the variable declares a default.
    pub location_has_default: bool,
}

/// Every variable usage reachable from `operation`, following fragment
/// spreads (each fragment once).
pub(crate) fn operation_variable_usages<'a>(
    document: &'a ast::ExecutableDocument,
    registry: &'a TypeRegistry,
    operation: &'a ast::OperationDefinition,
) -> Vec<VariableUsage<'a>> {
    let mut collector = UsageCollector {
        document,
        registry,
        usages: vec![],
        visited_fragments: HashSet::new(),
    };
    collector.directives(&operation.directives);
    for var_def in &operation.variable_definitions {
        collector.directives(&var_def.directives);
    }
    let root_type = registry
        .root_type_name(operation.kind)
        .and_then(|name| registry.lookup_type(name));
    collector.selection_set(root_type, &operation.selection_set);
    collector.usages
}

struct UsageCollector<'a> {
    document: &'a ast::ExecutableDocument,
    registry: &'a TypeRegistry,
    usages: Vec<VariableUsage<'a>>,
    visited_fragments: HashSet<&'a str>,
}

impl<'a> UsageCollector<'a> {
    fn selection_set(&mut self, parent_type: Option<&'a GraphQLType>, selection_set: &'a ast::SelectionSet) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let field_def = parent_type
                        .and_then(|parent| self.registry.field(parent.name(), &field.name.value));
                    self.arguments(&field.arguments, field_def.map(|def| &def.parameters));
                    self.directives(&field.directives);
                    if let Some(sub_selection_set) = &field.selection_set {
                        let field_type = field_def.and_then(|def| {
                            self.registry.lookup_type(&def.type_annotation.innermost_name().value)
                        });
                        self.selection_set(field_type, sub_selection_set);
                    }
                },
                ast::Selection::FragmentSpread(spread) => {
                    self.directives(&spread.directives);
                    if !self.visited_fragments.insert(spread.name.value.as_str()) {
                        continue;
                    }
                    if let Some(fragment) = self.document.fragment(&spread.name.value) {
                        self.directives(&fragment.directives);
                        let fragment_type =
                            self.registry.lookup_type(&fragment.type_condition.named_type.value);
                        self.selection_set(fragment_type, &fragment.selection_set);
                    }
                },
                ast::Selection::InlineFragment(inline_fragment) => {
                    self.directives(&inline_fragment.directives);
                    let fragment_type = match &inline_fragment.type_condition {
                        Some(type_condition) =>
                            self.registry.lookup_type(&type_condition.named_type.value),
                        None => parent_type,
                    };
                    self.selection_set(fragment_type, &inline_fragment.selection_set);
                },
            }
        }
    }

    fn directives(&mut self, directives: &'a [ast::DirectiveAnnotation]) {
        for directive in directives {
            let parameters = self
                .registry
                .lookup_directive(&directive.name.value)
                .map(|def| &def.parameters);
            self.arguments(&directive.arguments, parameters);
        }
    }

    fn arguments(
        &mut self,
        arguments: &'a [ast::Argument],
        parameters: Option<&'a IndexMap<String, InputValue>>,
    ) {
        for argument in arguments {
            let parameter = parameters.and_then(|params| params.get(&argument.name.value));
            self.value(
                &argument.value,
                parameter.map(|param| &param.type_annotation),
                parameter.is_some_and(|param| param.default_value.is_some()),
            );
        }
    }

    fn value(
        &mut self,
        value: &'a ast::Value,
        expected_type: Option<&'a TypeAnnotation>,
        location_has_default: bool,
    ) {
        match value {
            ast::Value::Variable(variable) => self.usages.push(VariableUsage {
                variable,
                expected_type,
                location_has_default,
            }),
            ast::Value::List(list) => {
                // A single item is coerced to a list of one, so a non-list
                // expected type applies to each item.
                let item_type = expected_type.map(|annot| match annot {
                    TypeAnnotation::List(list_annot) => &*list_annot.element_type,
                    TypeAnnotation::Named(_) => annot,
                });
                for item in &list.values {
                    self.value(item, item_type, false);
                }
            },
            ast::Value::Object(object) => {
                let input_type = expected_type
                    .and_then(|annot| self.registry.lookup_type(&annot.innermost_name().value))
                    .and_then(GraphQLType::as_input_object);
                for field in &object.fields {
                    let field_def = input_type.and_then(|t| t.fields.get(&field.name.value));
                    self.value(
                        &field.value,
                        field_def.map(|def| &def.type_annotation),
                        field_def.is_some_and(|def| def.default_value.is_some()),
                    );
                }
            },
            _ => (),
        }
    }
}
