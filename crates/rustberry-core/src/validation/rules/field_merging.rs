use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::validation::typed_walk::DocumentVisitor;
use crate::validation::typed_walk::walk_document;
use crate::validation::utils::arguments_equal;
use indexmap::IndexMap;
use rustberry_parser::ast;
use rustberry_parser::ast::TypeAnnotation;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fields sharing a response key within one selection set (fragments
/// included) must be mergeable: same field and arguments unless their
/// parents can never be the same object, and compatible return shapes
/// always.
pub(crate) fn field_merging(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut checker = FieldMergeChecker {
        document,
        registry,
        compared_pairs: HashMap::new(),
        diagnostics: vec![],
    };
    walk_document(document, registry, &mut checker);
    checker.diagnostics
}

#[derive(Clone, Copy)]
struct CollectedField<'a> {
    parent_type: Option<&'a GraphQLType>,
    field: &'a ast::Field,
    field_def: Option<&'a Field>,
}

type FieldsByResponseKey<'a> = IndexMap<&'a str, Vec<CollectedField<'a>>>;

struct FieldMergeChecker<'a> {
    document: &'a ast::ExecutableDocument,
    registry: &'a TypeRegistry,
    /// Byte offsets of field pairs already compared, and whether their
    /// parents were mutually exclusive at the time. A pair compared with
    /// exclusive parents is compared again when it shows up without them;
    /// otherwise each pair is checked once, which also stops recursion
    /// through cyclic fragments.
    compared_pairs: HashMap<(u32, u32), bool>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> FieldMergeChecker<'a> {
    fn collect_fields(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) -> FieldsByResponseKey<'a> {
        let mut fields = IndexMap::new();
        self.collect_fields_into(parent_type, selection_set, &mut fields, &mut HashSet::new());
        fields
    }

    fn collect_fields_into(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
        fields: &mut FieldsByResponseKey<'a>,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let field_def = parent_type.and_then(|parent| {
                        self.registry.field(parent.name(), &field.name.value)
                    });
                    fields.entry(field.response_key()).or_default().push(CollectedField {
                        parent_type,
                        field,
                        field_def,
                    });
                },
                ast::Selection::FragmentSpread(spread) => {
                    if !visited_fragments.insert(spread.name.value.as_str()) {
                        continue;
                    }
                    let Some(fragment) = self.document.fragment(&spread.name.value) else {
                        continue;
                    };
                    let fragment_type =
                        self.registry.lookup_type(&fragment.type_condition.named_type.value);
                    self.collect_fields_into(
                        fragment_type,
                        &fragment.selection_set,
                        fields,
                        visited_fragments,
                    );
                },
                ast::Selection::InlineFragment(inline_fragment) => {
                    let fragment_type = match &inline_fragment.type_condition {
                        Some(type_condition) =>
                            self.registry.lookup_type(&type_condition.named_type.value),
                        None => parent_type,
                    };
                    self.collect_fields_into(
                        fragment_type,
                        &inline_fragment.selection_set,
                        fields,
                        visited_fragments,
                    );
                },
            }
        }
    }

    /// Why `a` and `b` cannot be merged, if they cannot.
    fn find_conflict(
        &mut self,
        a: &CollectedField<'a>,
        b: &CollectedField<'a>,
        parents_mutually_exclusive: bool,
    ) -> Option<String> {
        let a_offset = a.field.span.start_inclusive.byte_offset();
        let b_offset = b.field.span.start_inclusive.byte_offset();
        let pair = (a_offset.min(b_offset), a_offset.max(b_offset));
        if a_offset == b_offset {
            return None;
        }
        match self.compared_pairs.get(&pair) {
            Some(&was_exclusive) if !was_exclusive || parents_mutually_exclusive => return None,
            _ => {
                self.compared_pairs.insert(pair, parents_mutually_exclusive);
            },
        }

        // Two distinct object parents can never describe the same value, so
        // only the shape of the results has to agree.
        let mutually_exclusive = parents_mutually_exclusive
            || match (a.parent_type, b.parent_type) {
                (Some(a_parent), Some(b_parent)) =>
                    a_parent.name() != b_parent.name()
                        && a_parent.as_object().is_some()
                        && b_parent.as_object().is_some(),
                _ => false,
            };

        if !mutually_exclusive {
            if a.field.name.value != b.field.name.value {
                return Some(format!(
                    "\"{}\" and \"{}\" are different fields",
                    a.field.name.value,
                    b.field.name.value,
                ));
            }
            if !arguments_equal(&a.field.arguments, &b.field.arguments) {
                return Some("they have differing arguments".to_string());
            }
        }

        if let (Some(a_def), Some(b_def)) = (a.field_def, b.field_def)
            && self.types_conflict(&a_def.type_annotation, &b_def.type_annotation) {
            return Some(format!(
                "they return conflicting types \"{}\" and \"{}\"",
                a_def.type_annotation,
                b_def.type_annotation,
            ));
        }

        let (Some(a_selection_set), Some(b_selection_set)) =
            (&a.field.selection_set, &b.field.selection_set)
        else {
            return None;
        };
        let a_fields = self.collect_fields(self.field_type(a), a_selection_set);
        let b_fields = self.collect_fields(self.field_type(b), b_selection_set);
        for (response_key, a_subfields) in &a_fields {
            let Some(b_subfields) = b_fields.get(response_key) else { continue };
            for a_subfield in a_subfields {
                for b_subfield in b_subfields {
                    if let Some(reason) = self.find_conflict(a_subfield, b_subfield, mutually_exclusive) {
                        return Some(format!("subfields \"{response_key}\" conflict because {reason}"));
                    }
                }
            }
        }
        None
    }

    fn field_type(&self, collected: &CollectedField<'a>) -> Option<&'a GraphQLType> {
        let field_def = collected.field_def?;
        self.registry.lookup_type(&field_def.type_annotation.innermost_name().value)
    }

    /// List and non-null wrappers must match exactly; leaf types must be
    /// identical. Differing composite types are resolved through subfields.
    fn types_conflict(&self, a: &TypeAnnotation, b: &TypeAnnotation) -> bool {
        match (a, b) {
            (TypeAnnotation::List(a_list), TypeAnnotation::List(b_list)) =>
                a_list.nullable != b_list.nullable
                    || self.types_conflict(&a_list.element_type, &b_list.element_type),
            (TypeAnnotation::Named(a_named), TypeAnnotation::Named(b_named)) => {
                if a_named.nullable != b_named.nullable {
                    return true;
                }
                let is_leaf = |name: &str| {
                    self.registry.lookup_type(name).is_some_and(GraphQLType::is_leaf)
                };
                a_named.name.value != b_named.name.value
                    && (is_leaf(&a_named.name.value) || is_leaf(&b_named.name.value))
            },
            _ => true,
        }
    }
}

impl<'a> DocumentVisitor<'a> for FieldMergeChecker<'a> {
    fn visit_selection_set(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) {
        let fields_by_key = self.collect_fields(parent_type, selection_set);
        for (response_key, fields) in &fields_by_key {
            for (idx, a) in fields.iter().enumerate() {
                for b in &fields[idx + 1..] {
                    if let Some(reason) = self.find_conflict(a, b, false) {
                        self.diagnostics.push(
                            Diagnostic::error(
                                RuleId::FieldMerging,
                                format!(
                                    "Fields \"{response_key}\" conflict because {reason}. Use different aliases on the fields to fetch both if this was intentional.",
                                ),
                                a.field.span,
                            ).with_span(b.field.span)
                        );
                    }
                }
            }
        }
    }
}
