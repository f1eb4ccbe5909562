use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::validation::typed_walk::DocumentVisitor;
use crate::validation::typed_walk::walk_document;
use rustberry_parser::ast;

/// Every field must exist on the composite type it is selected on.
pub(crate) fn unknown_field(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = UnknownFieldVisitor { diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct UnknownFieldVisitor {
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DocumentVisitor<'a> for UnknownFieldVisitor {
    fn visit_field(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        field: &'a ast::Field,
        field_def: Option<&'a Field>,
    ) {
        // Unknown parents are reported by known-type-names.
        if let Some(parent_type) = parent_type
            && parent_type.is_composite()
            && field_def.is_none() {
            self.diagnostics.push(Diagnostic::error(
                RuleId::UnknownField,
                format!(
                    "Cannot query field \"{}\" on type \"{}\".",
                    field.name.value,
                    parent_type.name(),
                ),
                field.name.span,
            ));
        }
    }
}

/// Leaf-typed fields take no selection set; composite-typed fields require
/// one.
pub(crate) fn leaf_field_selections(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = LeafFieldSelectionsVisitor { registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct LeafFieldSelectionsVisitor<'a> {
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DocumentVisitor<'a> for LeafFieldSelectionsVisitor<'a> {
    fn visit_field(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        field: &'a ast::Field,
        field_def: Option<&'a Field>,
    ) {
        let Some(field_def) = field_def else { return };
        let type_annotation = &field_def.type_annotation;
        let Some(field_type) = self.registry.lookup_type(&type_annotation.innermost_name().value)
        else {
            return;
        };

        match &field.selection_set {
            Some(selection_set) if field_type.is_leaf() => self.diagnostics.push(Diagnostic::error(
                RuleId::LeafFieldSelections,
                format!(
                    "Field \"{}\" must not have a selection since type \"{type_annotation}\" has no subfields.",
                    field.name.value,
                ),
                selection_set.span,
            )),
            None if field_type.is_composite() => self.diagnostics.push(Diagnostic::error(
                RuleId::LeafFieldSelections,
                format!(
                    "Field \"{name}\" of type \"{type_annotation}\" must have a selection of subfields. Did you mean \"{name} {{ ... }}\"?",
                    name = field.name.value,
                ),
                field.span,
            )),
            _ => (),
        }
    }
}
