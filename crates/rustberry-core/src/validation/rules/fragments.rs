use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::types::GraphQLType;
use crate::validation::typed_walk::DocumentVisitor;
use crate::validation::typed_walk::walk_document;
use crate::validation::utils::direct_fragment_spreads;
use crate::validation::utils::for_each_duplicate;
use rustberry_parser::ast;
use std::collections::HashMap;
use std::collections::HashSet;

pub(crate) fn unique_fragment_names(
    document: &ast::ExecutableDocument,
    _registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    for_each_duplicate(
        document.fragments().map(|fragment| &fragment.name),
        |name| name.value.as_str(),
        |duplicate, first| diagnostics.push(
            Diagnostic::error(
                RuleId::UniqueFragmentNames,
                format!("There can be only one fragment named \"{}\".", duplicate.value),
                duplicate.span,
            ).with_span(first.span)
        ),
    );
    diagnostics
}

pub(crate) fn known_fragment_names(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = KnownFragmentNames { document, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct KnownFragmentNames<'a> {
    document: &'a ast::ExecutableDocument,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DocumentVisitor<'a> for KnownFragmentNames<'a> {
    fn visit_fragment_spread(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        spread: &'a ast::FragmentSpread,
    ) {
        if self.document.fragment(&spread.name.value).is_none() {
            self.diagnostics.push(Diagnostic::error(
                RuleId::KnownFragmentNames,
                format!("Unknown fragment \"{}\".", spread.name.value),
                spread.name.span,
            ));
        }
    }
}

/// Fragments must not spread themselves, directly or through other
/// fragments. Each cycle is reported once, spanning the spreads that form
/// it.
pub(crate) fn fragment_cycle(
    document: &ast::ExecutableDocument,
    _registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut detector = CycleDetector {
        document,
        visited: HashSet::new(),
        spread_path: vec![],
        spread_path_index: HashMap::new(),
        diagnostics: vec![],
    };
    for fragment in document.fragments() {
        detector.detect(fragment);
    }
    detector.diagnostics
}

struct CycleDetector<'a> {
    document: &'a ast::ExecutableDocument,
    visited: HashSet<&'a str>,
    spread_path: Vec<&'a ast::FragmentSpread>,
    /// Position in `spread_path` at which each fragment on the current path
    /// was entered.
    spread_path_index: HashMap<&'a str, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> CycleDetector<'a> {
    fn detect(&mut self, fragment: &'a ast::FragmentDefinition) {
        let fragment_name = fragment.name.value.as_str();
        if !self.visited.insert(fragment_name) {
            return;
        }

        let spreads = direct_fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.spread_path_index.insert(fragment_name, self.spread_path.len());
        for spread in spreads {
            let spread_name = spread.name.value.as_str();
            self.spread_path.push(spread);
            match self.spread_path_index.get(spread_name) {
                Some(&cycle_start) => self.report(spread_name, cycle_start),
                None => {
                    if let Some(target) = self.document.fragment(spread_name) {
                        self.detect(target);
                    }
                },
            }
            self.spread_path.pop();
        }
        self.spread_path_index.remove(fragment_name);
    }

    fn report(&mut self, fragment_name: &str, cycle_start: usize) {
        let cycle = &self.spread_path[cycle_start..];
        let via: Vec<String> = cycle[..cycle.len() - 1]
            .iter()
            .map(|spread| format!("\"{}\"", spread.name.value))
            .collect();
        let message = if via.is_empty() {
            format!("Cannot spread fragment \"{fragment_name}\" within itself.")
        } else {
            format!(
                "Cannot spread fragment \"{fragment_name}\" within itself via {}.",
                via.join(", "),
            )
        };
        let mut diagnostic = Diagnostic::without_span(RuleId::FragmentCycle, message);
        diagnostic.spans = cycle.iter().map(|spread| spread.span).collect();
        self.diagnostics.push(diagnostic);
    }
}

/// Type conditions and variable types must name types the schema defines.
pub(crate) fn known_type_names(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = KnownTypeNames { registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct KnownTypeNames<'a> {
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl KnownTypeNames<'_> {
    fn check(&mut self, name: &ast::Name) {
        if self.registry.lookup_type(&name.value).is_none() {
            self.diagnostics.push(Diagnostic::error(
                RuleId::KnownTypeNames,
                format!("Unknown type \"{}\".", name.value),
                name.span,
            ));
        }
    }
}

impl<'a> DocumentVisitor<'a> for KnownTypeNames<'a> {
    fn enter_fragment(&mut self, fragment: &'a ast::FragmentDefinition) {
        self.check(&fragment.type_condition.named_type);
    }

    fn visit_variable_definition(&mut self, var_def: &'a ast::VariableDefinition) {
        self.check(var_def.var_type.innermost_name());
    }

    fn visit_inline_fragment(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        inline_fragment: &'a ast::InlineFragment,
    ) {
        if let Some(type_condition) = &inline_fragment.type_condition {
            self.check(&type_condition.named_type);
        }
    }
}

pub(crate) fn fragment_on_composite_type(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = FragmentOnCompositeType { registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct FragmentOnCompositeType<'a> {
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl FragmentOnCompositeType<'_> {
    fn is_non_composite(&self, name: &ast::Name) -> bool {
        self.registry
            .lookup_type(&name.value)
            .is_some_and(|type_| !type_.is_composite())
    }
}

impl<'a> DocumentVisitor<'a> for FragmentOnCompositeType<'a> {
    fn enter_fragment(&mut self, fragment: &'a ast::FragmentDefinition) {
        let type_name = &fragment.type_condition.named_type;
        if self.is_non_composite(type_name) {
            self.diagnostics.push(Diagnostic::error(
                RuleId::FragmentOnCompositeType,
                format!(
                    "Fragment \"{}\" cannot condition on non composite type \"{}\".",
                    fragment.name.value,
                    type_name.value,
                ),
                type_name.span,
            ));
        }
    }

    fn visit_inline_fragment(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        inline_fragment: &'a ast::InlineFragment,
    ) {
        if let Some(type_condition) = &inline_fragment.type_condition
            && self.is_non_composite(&type_condition.named_type) {
            self.diagnostics.push(Diagnostic::error(
                RuleId::FragmentOnCompositeType,
                format!(
                    "Fragment cannot condition on non composite type \"{}\".",
                    type_condition.named_type.value,
                ),
                type_condition.named_type.span,
            ));
        }
    }
}

/// A fragment may only be spread where some object type satisfies both the
/// fragment's type condition and the enclosing type.
pub(crate) fn possible_fragment_spread(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = PossibleFragmentSpread { document, registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct PossibleFragmentSpread<'a> {
    document: &'a ast::ExecutableDocument,
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> PossibleFragmentSpread<'a> {
    /// The fragment type when both it and `parent_type` are composite and
    /// share no possible object type.
    fn disjoint_type(
        &self,
        parent_type: Option<&GraphQLType>,
        fragment_type_name: &str,
    ) -> Option<&'a GraphQLType> {
        let parent_type = parent_type.filter(|type_| type_.is_composite())?;
        let fragment_type = self
            .registry
            .lookup_type(fragment_type_name)
            .filter(|type_| type_.is_composite())?;
        (!self.registry.types_overlap(fragment_type.name(), parent_type.name()))
            .then_some(fragment_type)
    }
}

impl<'a> DocumentVisitor<'a> for PossibleFragmentSpread<'a> {
    fn visit_fragment_spread(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        spread: &'a ast::FragmentSpread,
    ) {
        let Some(fragment) = self.document.fragment(&spread.name.value) else { return };
        if let (Some(parent), Some(fragment_type)) = (
            parent_type,
            self.disjoint_type(parent_type, &fragment.type_condition.named_type.value),
        ) {
            let message = format!(
                "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                spread.name.value,
                parent.name(),
                fragment_type.name(),
            );
            self.diagnostics.push(Diagnostic::error(
                RuleId::PossibleFragmentSpread,
                message,
                spread.span,
            ));
        }
    }

    fn visit_inline_fragment(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        inline_fragment: &'a ast::InlineFragment,
    ) {
        let Some(type_condition) = &inline_fragment.type_condition else { return };
        if let (Some(parent), Some(fragment_type)) = (
            parent_type,
            self.disjoint_type(parent_type, &type_condition.named_type.value),
        ) {
            let message = format!(
                "Fragment cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                parent.name(),
                fragment_type.name(),
            );
            self.diagnostics.push(Diagnostic::error(
                RuleId::PossibleFragmentSpread,
                message,
                inline_fragment.span,
            ));
        }
    }
}

/// Every fragment must be reachable from some operation.
pub(crate) fn unused_fragment(
    document: &ast::ExecutableDocument,
    _registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut reachable: HashSet<&str> = HashSet::new();
    let mut pending: Vec<&ast::FragmentSpread> = document
        .operations()
        .flat_map(|operation| direct_fragment_spreads(&operation.selection_set))
        .collect();
    while let Some(spread) = pending.pop() {
        if reachable.insert(spread.name.value.as_str())
            && let Some(fragment) = document.fragment(&spread.name.value) {
            pending.extend(direct_fragment_spreads(&fragment.selection_set));
        }
    }

    document
        .fragments()
        .filter(|fragment| !reachable.contains(fragment.name.value.as_str()))
        .map(|fragment| Diagnostic::error(
            RuleId::UnusedFragment,
            format!("Fragment \"{}\" is never used.", fragment.name.value),
            fragment.span,
        ))
        .collect()
}
