use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::GraphQLType;
use rustberry_parser::ast;
use rustberry_parser::ast::DirectiveLocationKind;
use rustberry_parser::ast::OperationKind;

/// Callbacks of [`walk_document()`]. Selections are reported together with
/// the type they are selected on, when that type is known.
pub(crate) trait DocumentVisitor<'a> {
    fn enter_operation(&mut self, _operation: &'a ast::OperationDefinition) {}

    fn enter_fragment(&mut self, _fragment: &'a ast::FragmentDefinition) {}

    fn visit_variable_definition(&mut self, _var_def: &'a ast::VariableDefinition) {}

    fn visit_selection_set(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        _selection_set: &'a ast::SelectionSet,
    ) {}

    fn visit_field(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        _field: &'a ast::Field,
        _field_def: Option<&'a Field>,
    ) {}

    fn visit_fragment_spread(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        _spread: &'a ast::FragmentSpread,
    ) {}

    fn visit_inline_fragment(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        _inline_fragment: &'a ast::InlineFragment,
    ) {}

    fn visit_directives(
        &mut self,
        _directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocationKind,
    ) {}
}

/// Visits every definition of `document` once, in source order. Fragment
/// spreads are reported but not followed.
pub(crate) fn walk_document<'a, V: DocumentVisitor<'a>>(
    document: &'a ast::ExecutableDocument,
    registry: &'a TypeRegistry,
    visitor: &mut V,
) {
    for definition in &document.definitions {
        match definition {
            ast::ExecutableDefinition::Operation(operation) => {
                visitor.enter_operation(operation);
                for var_def in &operation.variable_definitions {
                    visitor.visit_variable_definition(var_def);
                    visitor.visit_directives(
                        &var_def.directives,
                        DirectiveLocationKind::VariableDefinition,
                    );
                }
                visitor.visit_directives(&operation.directives, operation_location(operation.kind));
                let root_type = registry
                    .root_type_name(operation.kind)
                    .and_then(|name| registry.lookup_type(name));
                walk_selection_set(registry, root_type, &operation.selection_set, visitor);
            },
            ast::ExecutableDefinition::Fragment(fragment) => {
                visitor.enter_fragment(fragment);
                visitor.visit_directives(&fragment.directives, DirectiveLocationKind::FragmentDefinition);
                let type_condition = registry.lookup_type(&fragment.type_condition.named_type.value);
                walk_selection_set(registry, type_condition, &fragment.selection_set, visitor);
            },
        }
    }
}

fn walk_selection_set<'a, V: DocumentVisitor<'a>>(
    registry: &'a TypeRegistry,
    parent_type: Option<&'a GraphQLType>,
    selection_set: &'a ast::SelectionSet,
    visitor: &mut V,
) {
    visitor.visit_selection_set(parent_type, selection_set);
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                let field_def = parent_type
                    .and_then(|parent| registry.field(parent.name(), &field.name.value));
                visitor.visit_field(parent_type, field, field_def);
                visitor.visit_directives(&field.directives, DirectiveLocationKind::Field);
                if let Some(sub_selection_set) = &field.selection_set {
                    let field_type = field_def.and_then(|def| {
                        registry.lookup_type(&def.type_annotation.innermost_name().value)
                    });
                    walk_selection_set(registry, field_type, sub_selection_set, visitor);
                }
            },
            ast::Selection::FragmentSpread(spread) => {
                visitor.visit_fragment_spread(parent_type, spread);
                visitor.visit_directives(&spread.directives, DirectiveLocationKind::FragmentSpread);
            },
            ast::Selection::InlineFragment(inline_fragment) => {
                visitor.visit_inline_fragment(parent_type, inline_fragment);
                visitor.visit_directives(
                    &inline_fragment.directives,
                    DirectiveLocationKind::InlineFragment,
                );
                let fragment_type = match &inline_fragment.type_condition {
                    Some(type_condition) => registry.lookup_type(&type_condition.named_type.value),
                    None => parent_type,
                };
                walk_selection_set(registry, fragment_type, &inline_fragment.selection_set, visitor);
            },
        }
    }
}

pub(crate) fn operation_location(kind: OperationKind) -> DirectiveLocationKind {
    match kind {
        OperationKind::Query => DirectiveLocationKind::Query,
        OperationKind::Mutation => DirectiveLocationKind::Mutation,
        OperationKind::Subscription => DirectiveLocationKind::Subscription,
    }
}
